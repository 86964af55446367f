// crates/lcec-configgen/src/topology.rs

//! Parses the bus listing produced by `ethercat -v slaves`.

use crate::error::ConfigGenError;
use crate::introspect::BusIntrospector;
use crate::scan::{LineRule, group, parse_hex_u32, scan_lines};
use crate::types::Slave;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SLAVE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^=== Master ([0-9]+), Slave ([0-9]+) ===$").expect("valid slave header regex")
});
static VENDOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^  Vendor Id: +(0x[0-9a-fA-F]+)").expect("valid vendor regex")
});
static PRODUCT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^  Product code: +(0x[0-9a-fA-F]+)").expect("valid product regex")
});
static REVISION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^  Revision number: +(0x[0-9a-fA-F]+)").expect("valid revision regex")
});
static DEVICE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^  Device name: (.*)").expect("valid device name regex"));

/// Scanner state: the slaves closed so far and the one being filled in.
#[derive(Default)]
struct TopologyScan {
    slaves: Vec<Slave>,
    current: Option<Slave>,
}

impl TopologyScan {
    fn close_current(&mut self) {
        if let Some(slave) = self.current.take() {
            info!(
                "[Topology] Found slave {}:{} (vendor 0x{:08x}, product 0x{:08x})",
                slave.master, slave.position, slave.vendor_id, slave.product_id
            );
            self.slaves.push(slave);
        }
    }
}

static TOPOLOGY_RULES: [LineRule<TopologyScan>; 5] = [
    LineRule {
        pattern: &SLAVE_HEADER_RE,
        handler: on_slave_header,
    },
    LineRule {
        pattern: &VENDOR_RE,
        handler: on_vendor,
    },
    LineRule {
        pattern: &PRODUCT_RE,
        handler: on_product,
    },
    LineRule {
        pattern: &REVISION_RE,
        handler: on_revision,
    },
    LineRule {
        pattern: &DEVICE_NAME_RE,
        handler: on_device_name,
    },
];

fn on_slave_header(scan: &mut TopologyScan, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    if scan.current.is_some() {
        // The previous slave never reported a device name.
        debug!("[Topology] Slave closed without a device name");
        scan.close_current();
    }
    let master = group(caps, 1)
        .parse()
        .map_err(|_| ConfigGenError::invalid_number("master index", group(caps, 1)))?;
    let position = group(caps, 2)
        .parse()
        .map_err(|_| ConfigGenError::invalid_number("slave position", group(caps, 2)))?;
    scan.current = Some(Slave {
        master,
        position,
        ..Default::default()
    });
    Ok(())
}

fn on_vendor(scan: &mut TopologyScan, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    if let Some(slave) = scan.current.as_mut() {
        slave.vendor_id = parse_hex_u32(group(caps, 1))?;
    }
    Ok(())
}

fn on_product(scan: &mut TopologyScan, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    if let Some(slave) = scan.current.as_mut() {
        slave.product_id = parse_hex_u32(group(caps, 1))?;
    }
    Ok(())
}

fn on_revision(scan: &mut TopologyScan, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    if let Some(slave) = scan.current.as_mut() {
        slave.revision = parse_hex_u32(group(caps, 1))?;
    }
    Ok(())
}

fn on_device_name(scan: &mut TopologyScan, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    if let Some(slave) = scan.current.as_mut() {
        let name = group(caps, 1).trim_end();
        slave.device_name = (!name.is_empty()).then(|| name.to_string());
        scan.close_current();
    }
    Ok(())
}

/// Parses `ethercat -v slaves` output into slave identity records, in discovery order.
///
/// A slave is closed by its `Device name:` line. Slaves that never report a
/// name are closed by the next `=== Master m, Slave s ===` header or by the end
/// of the input.
pub fn parse_slaves(text: &str) -> Result<Vec<Slave>, ConfigGenError> {
    let mut scan = TopologyScan::default();
    scan_lines(text, &TOPOLOGY_RULES, &mut scan)?;
    scan.close_current();
    Ok(scan.slaves)
}

/// Fetches and parses the bus topology. Any failure to obtain it aborts the run.
pub fn read_slaves<B: BusIntrospector + ?Sized>(bus: &B) -> Result<Vec<Slave>, ConfigGenError> {
    let text = bus.slaves()?;
    parse_slaves(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SLAVES: &str = "\
=== Master 0, Slave 0 ===
Device: Main
State: PREOP
Flag: +
Identity:
  Vendor Id:       0x00000002
  Product code:    0x03f03052
  Revision number: 0x00120000
  Serial number:   0x00000000
DL information:
  FMMU bit operation: no
General:
  Group: DigIn
  Image name:
  Order number: EL1008
  Device name: EL1008 8K. Dig. Eingang 24V, 3ms
=== Master 0, Slave 1 ===
Identity:
  Vendor Id:       0x0000066f
  Product code:    0x60380004
  Revision number: 0x00010000
General:
  Device name: MADHT1505BA1
";

    #[test]
    fn test_parse_two_slaves() {
        let slaves = parse_slaves(TWO_SLAVES).unwrap();
        assert_eq!(slaves.len(), 2);

        assert_eq!(slaves[0].master, 0);
        assert_eq!(slaves[0].position, 0);
        assert_eq!(slaves[0].vendor_id, 0x2);
        assert_eq!(slaves[0].product_id, 0x03f03052);
        assert_eq!(slaves[0].revision, 0x00120000);
        assert_eq!(
            slaves[0].device_name.as_deref(),
            Some("EL1008 8K. Dig. Eingang 24V, 3ms")
        );

        assert_eq!(slaves[1].position, 1);
        assert_eq!(slaves[1].vendor_id, 0x66f);
        assert_eq!(slaves[1].device_name.as_deref(), Some("MADHT1505BA1"));
    }

    #[test]
    fn test_slave_without_device_name_is_closed_by_next_header() {
        let text = "\
=== Master 0, Slave 0 ===
  Vendor Id:       0x00000abc
  Product code:    0x00000001
=== Master 0, Slave 1 ===
  Vendor Id:       0x00000002
  Product code:    0x03f03052
  Device name: EL1008
";
        let slaves = parse_slaves(text).unwrap();
        assert_eq!(slaves.len(), 2);
        assert_eq!(slaves[0].vendor_id, 0xabc);
        assert_eq!(slaves[0].device_name, None);
        assert_eq!(slaves[1].device_name.as_deref(), Some("EL1008"));
    }

    #[test]
    fn test_trailing_slave_without_device_name_is_kept() {
        let text = "\
=== Master 1, Slave 4 ===
  Vendor Id:       0x00000abc
";
        let slaves = parse_slaves(text).unwrap();
        assert_eq!(slaves.len(), 1);
        assert_eq!(slaves[0].master, 1);
        assert_eq!(slaves[0].position, 4);
    }

    #[test]
    fn test_lines_before_first_header_are_ignored() {
        let text = "  Vendor Id:       0x00000abc\n  Device name: stray\n";
        assert!(parse_slaves(text).unwrap().is_empty());
    }
}
