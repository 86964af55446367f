// crates/lcec-configgen/src/pdo.rs

//! Builds the sync manager / PDO / entry tree of a slave from `ethercat pdos`.
//!
//! The listing is read in a single forward pass. A sync manager header opens
//! a new [`SyncManager`], a PDO header opens a new [`Pdo`] in the current sync
//! manager, and entry lines are appended to the current PDO:
//!
//! ```text
//! SM2: PhysAddr 0x1100, DefaultSize    2, ControlRegister 0x24, Enable 1
//!   RxPDO 0x1600 "Channel 1"
//!     PDO entry 0x7000:01,  1 bit, "Output"
//! ```

use crate::error::ConfigGenError;
use crate::introspect::BusIntrospector;
use crate::od::{ObjectDictionary, ObjectKey};
use crate::pins::normalize_pin_name;
use crate::scan::{LineRule, group, optional_group, parse_hex_u8, parse_hex_u16, scan_lines};
use crate::types::{Direction, Pdo, PdoEntry, PinType, Slave, SyncManager};
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SYNC_MANAGER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^SM([0-9]+): PhysAddr (0x[0-9a-fA-F]+)").expect("valid sync manager regex")
});
static PDO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^  ([RT]xPDO) (0x[0-9a-fA-F]+)(?: "(.*)")?"#).expect("valid pdo regex")
});
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^    PDO entry (0x[0-9a-fA-F]+):([0-9a-fA-F]+), +([0-9]+) bit(?:, "(.*)")?"#)
        .expect("valid pdo entry regex")
});

struct PdoScan<'a> {
    dictionary: &'a ObjectDictionary,
    sync_managers: Vec<SyncManager>,
}

fn pdo_rules<'a>() -> [LineRule<PdoScan<'a>>; 3] {
    [
        LineRule {
            pattern: &SYNC_MANAGER_RE,
            handler: on_sync_manager,
        },
        LineRule {
            pattern: &PDO_RE,
            handler: on_pdo,
        },
        LineRule {
            pattern: &ENTRY_RE,
            handler: on_entry,
        },
    ]
}

/// Direction assumed for a sync manager before any PDO says otherwise:
/// even indices are `in`, odd indices `out`. This is a parity heuristic, not
/// read from the device.
fn default_direction(index: u8) -> Direction {
    if index % 2 == 0 {
        Direction::In
    } else {
        Direction::Out
    }
}

fn on_sync_manager(scan: &mut PdoScan<'_>, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    let index: u8 = group(caps, 1)
        .parse()
        .map_err(|_| ConfigGenError::invalid_number("sync manager index", group(caps, 1)))?;
    scan.sync_managers.push(SyncManager {
        index,
        direction: default_direction(index),
        pdos: Vec::new(),
    });
    Ok(())
}

fn on_pdo(scan: &mut PdoScan<'_>, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    let index = parse_hex_u16(group(caps, 2))?;
    let Some(sm) = scan.sync_managers.last_mut() else {
        warn!("[PDO] PDO 0x{:04x} listed before any sync manager, ignoring", index);
        return Ok(());
    };
    sm.direction = match group(caps, 1) {
        "RxPDO" => Direction::Out,
        _ => Direction::In,
    };
    sm.pdos.push(Pdo {
        index,
        label: optional_group(caps, 3).map(str::to_string),
        entries: Vec::new(),
    });
    Ok(())
}

fn on_entry(scan: &mut PdoScan<'_>, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    let index = parse_hex_u16(group(caps, 1))?;
    let sub_index = parse_hex_u8(group(caps, 2))?;
    let bit_len: u32 = group(caps, 3)
        .parse()
        .map_err(|_| ConfigGenError::invalid_number("bit length", group(caps, 3)))?;

    if index == 0 {
        trace!("[PDO] Skipping {} bit padding entry", bit_len);
        return Ok(());
    }

    let dictionary = scan.dictionary;
    let Some(pdo) = scan
        .sync_managers
        .last_mut()
        .and_then(|sm| sm.pdos.last_mut())
    else {
        warn!(
            "[PDO] Entry 0x{:04x}:{:02x} listed outside a PDO, ignoring",
            index, sub_index
        );
        return Ok(());
    };

    let declared = dictionary.data_type(ObjectKey::new(index, sub_index));
    pdo.entries.push(PdoEntry {
        index,
        sub_index,
        bit_len,
        pin_name: infer_pin_name(index, sub_index, optional_group(caps, 4)),
        pin_type: infer_pin_type(bit_len, declared),
        // The label is consumed by the pin name.
        label: None,
    });
    Ok(())
}

/// Derives a HAL pin name from the entry label, or from its address when unlabeled.
pub fn infer_pin_name(index: u16, sub_index: u8, label: Option<&str>) -> String {
    match label {
        Some(label) => normalize_pin_name(label),
        None => format!("pin-{:04x}-{:02x}", index, sub_index),
    }
}

/// Maps an entry's bit length and declared dictionary type to a HAL pin type.
///
/// Anything shorter than a byte is a `bit` pin whatever its declared type.
/// Types with no HAL equivalent yield [`PinType::Blank`] (nothing declared)
/// or [`PinType::Unmappable`], which are written out for manual review.
pub fn infer_pin_type(bit_len: u32, declared: Option<&str>) -> PinType {
    if bit_len < 8 {
        return PinType::Bit;
    }
    let pin_type = match declared.unwrap_or("") {
        "uint8" | "uint16" | "uint32" => PinType::U32,
        "int8" | "int16" | "int32" => PinType::S32,
        "bool" if bit_len == 1 => PinType::Bit,
        "bool" => PinType::U32,
        "uint64" => PinType::U64,
        "int64" => PinType::S64,
        "float" | "double" if bit_len == 32 => PinType::FloatIeee,
        "float" | "double" => PinType::FloatDoubleIeee,
        "" => PinType::Blank,
        other => PinType::Unmappable(other.to_string()),
    };
    if matches!(pin_type, PinType::Blank | PinType::Unmappable(_)) {
        warn!(
            "[PDO] No HAL type for {} bit entry declared as {:?}, emitting {}",
            bit_len,
            declared.unwrap_or(""),
            pin_type
        );
    }
    pin_type
}

/// Parses an `ethercat pdos` listing, typing entries against `dictionary`.
///
/// Padding entries (index `0x0000`) are dropped. Pin names are not
/// de-duplicated here.
pub fn parse_pdos(
    text: &str,
    dictionary: &ObjectDictionary,
) -> Result<Vec<SyncManager>, ConfigGenError> {
    let mut scan = PdoScan {
        dictionary,
        sync_managers: Vec::new(),
    };
    scan_lines(text, &pdo_rules(), &mut scan)?;
    Ok(scan.sync_managers)
}

/// Fetches and parses the PDO assignment of a probed slave.
pub fn build_pdos<B: BusIntrospector + ?Sized>(
    bus: &B,
    slave: &Slave,
) -> Result<Vec<SyncManager>, ConfigGenError> {
    let text = bus.pdos(slave.master, slave.position)?;
    let sync_managers = parse_pdos(&text, &slave.dictionary)?;
    debug!(
        "[PDO] Slave {}:{} has {} sync manager(s) with {} entries",
        slave.master,
        slave.position,
        sync_managers.len(),
        sync_managers
            .iter()
            .flat_map(|sm| &sm.pdos)
            .map(|pdo| pdo.entries.len())
            .sum::<usize>()
    );
    Ok(sync_managers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::od::parse_sdos;

    const PDOS: &str = "\
SM0: PhysAddr 0x1000, DefaultSize  128, ControlRegister 0x26, Enable 1
SM1: PhysAddr 0x1080, DefaultSize  128, ControlRegister 0x22, Enable 1
SM2: PhysAddr 0x1100, DefaultSize    4, ControlRegister 0x24, Enable 1
  RxPDO 0x1600 \"Outputs\"
    PDO entry 0x7000:01, 16 bit, \"Control Word\"
    PDO entry 0x0000:00, 16 bit, \"\"
SM3: PhysAddr 0x1180, DefaultSize    6, ControlRegister 0x20, Enable 1
  TxPDO 0x1a00 \"Inputs\"
    PDO entry 0x6000:01,  1 bit, \"Ready\"
    PDO entry 0x6000:11, 32 bit, \"Position Value\"
    PDO entry 0x6000:12, 32 bit, \"\"
    PDO entry 0x6000:13, 32 bit, \"Mystery\"
";

    const SDOS: &str = "  0x6000:01, r-r-r-, bool, 1 bit, \"Ready\"
  0x6000:11, r-r-r-, int32, 32 bit, \"Position\"
  0x6000:12, r-r-r-, float, 32 bit, \"Speed\"
  0x6000:13, r-r-r-, visible_string, 32 bit, \"Mystery\"
  0x7000:01, rwrwrw, uint16, 16 bit, \"Control Word\"
";

    fn parsed() -> Vec<SyncManager> {
        parse_pdos(PDOS, &parse_sdos(SDOS).unwrap()).unwrap()
    }

    #[test]
    fn test_tree_shape_and_directions() {
        let sms = parsed();
        assert_eq!(sms.len(), 4);
        assert_eq!(
            sms.iter().map(|sm| (sm.index, sm.direction)).collect::<Vec<_>>(),
            vec![
                (0, Direction::In),
                (1, Direction::Out),
                (2, Direction::Out),
                (3, Direction::In)
            ]
        );
        assert!(sms[0].pdos.is_empty());
        assert_eq!(sms[2].pdos[0].index, 0x1600);
        assert_eq!(sms[2].pdos[0].label.as_deref(), Some("Outputs"));
    }

    #[test]
    fn test_padding_entries_are_dropped() {
        let sms = parsed();
        assert_eq!(sms[2].pdos[0].entries.len(), 1);
        assert!(
            sms.iter()
                .flat_map(|sm| &sm.pdos)
                .flat_map(|p| &p.entries)
                .all(|e| e.index != 0)
        );
    }

    #[test]
    fn test_pin_names_and_types() {
        let sms = parsed();
        let inputs: Vec<(&str, &PinType)> = sms[3].pdos[0]
            .entries
            .iter()
            .map(|e| (e.pin_name.as_str(), &e.pin_type))
            .collect();
        assert_eq!(
            inputs,
            vec![
                ("ready", &PinType::Bit),
                ("position-value", &PinType::S32),
                ("pin-6000-12", &PinType::FloatIeee),
                ("mystery", &PinType::Unmappable("visible_string".into())),
            ]
        );
        assert_eq!(sms[2].pdos[0].entries[0].pin_type, PinType::U32);
        assert_eq!(sms[2].pdos[0].entries[0].pin_name, "control-word");
        assert!(sms[3].pdos[0].entries.iter().all(|e| e.label.is_none()));
    }

    #[test]
    fn test_bool_declared_entries() {
        let dictionary = parse_sdos(SDOS).unwrap();
        assert_eq!(dictionary.len(), 5);
        assert_eq!(dictionary.data_type(ObjectKey::new(0x6000, 1)), Some("bool"));

        let text = "\
SM3: PhysAddr 0x1180, DefaultSize    2, ControlRegister 0x20, Enable 1
  TxPDO 0x1a00 \"Inputs\"
    PDO entry 0x6000:01,  1 bit, \"Ready\"
    PDO entry 0x6000:01,  8 bit, \"Ready Byte\"
";
        let sms = parse_pdos(text, &dictionary).unwrap();
        let types: Vec<&PinType> = sms[0].pdos[0].entries.iter().map(|e| &e.pin_type).collect();
        assert_eq!(types, vec![&PinType::Bit, &PinType::U32]);
    }

    #[test]
    fn test_infer_pin_type_rules() {
        assert_eq!(infer_pin_type(1, Some("uint32")), PinType::Bit);
        assert_eq!(infer_pin_type(16, Some("uint16")), PinType::U32);
        assert_eq!(infer_pin_type(8, Some("int8")), PinType::S32);
        assert_eq!(infer_pin_type(8, Some("bool")), PinType::U32);
        assert_eq!(infer_pin_type(64, Some("uint64")), PinType::U64);
        assert_eq!(infer_pin_type(64, Some("int64")), PinType::S64);
        assert_eq!(infer_pin_type(32, Some("float")), PinType::FloatIeee);
        assert_eq!(infer_pin_type(64, Some("double")), PinType::FloatDoubleIeee);
        assert_eq!(infer_pin_type(16, None), PinType::Blank);
        assert_eq!(
            infer_pin_type(16, Some("octet_string")),
            PinType::Unmappable("octet_string".into())
        );
    }

    #[test]
    fn test_unlabeled_pdo_and_stray_lines() {
        let text = "  TxPDO 0x1a00 \"Before any SM\"
    PDO entry 0x6000:01, 8 bit, \"Orphan\"
SM2: PhysAddr 0x1100, DefaultSize    1, ControlRegister 0x24, Enable 1
    PDO entry 0x6000:02, 8 bit, \"No PDO yet\"
  TxPDO 0x1a01
    PDO entry 0x6000:03, 8 bit
";
        let sms = parse_pdos(text, &ObjectDictionary::new()).unwrap();
        assert_eq!(sms.len(), 1);
        assert_eq!(sms[0].direction, Direction::In);
        // The PDO before any sync manager and its entry are dropped.
        assert_eq!(sms[0].pdos.len(), 1);
        assert_eq!(sms[0].pdos[0].index, 0x1a01);
        assert_eq!(sms[0].pdos[0].entries.len(), 1);
        assert!(
            sms.iter()
                .flat_map(|sm| &sm.pdos)
                .flat_map(|p| &p.entries)
                .all(|e| e.pin_name != "orphan" && e.pin_name != "no-pdo-yet")
        );
        assert_eq!(sms[0].pdos[0].label, None);
        assert_eq!(sms[0].pdos[0].entries[0].pin_name, "pin-6000-03");
        assert_eq!(sms[0].pdos[0].entries[0].pin_type, PinType::Blank);
    }
}
