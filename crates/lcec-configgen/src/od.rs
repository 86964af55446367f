// crates/lcec-configgen/src/od.rs

//! Object dictionary probing (`ethercat sdos`) and CiA 402 detection.

use crate::error::ConfigGenError;
use crate::introspect::BusIntrospector;
use crate::scan::{LineRule, group, parse_hex_u8, parse_hex_u16, scan_lines};
use crate::types::Slave;
use core::fmt;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// CiA 402 controlword.
pub const CIA402_CONTROL_WORD: ObjectKey = ObjectKey::new(0x6040, 0);
/// CiA 402 statusword.
pub const CIA402_STATUS_WORD: ObjectKey = ObjectKey::new(0x6041, 0);
/// CiA 402 "supported drive modes" of channel 0.
pub const CIA402_SUPPORTED_MODES: ObjectKey = ObjectKey::new(0x6502, 0);

/// First object of the channel-0 CiA 402 profile area.
pub const CIA402_BASE_INDEX: u16 = 0x6000;
/// Address distance between consecutive CiA 402 channels (axes).
pub const CIA402_CHANNEL_STRIDE: u16 = 0x800;
/// A multi-axis device can expose at most this many CiA 402 channels.
pub const CIA402_MAX_CHANNELS: usize = 8;
/// Offset of "supported drive modes" from a channel's base index.
pub const CIA402_SUPPORTED_MODES_OFFSET: u16 = 0x502;

/// Returns the base object index of CiA 402 channel `channel` (0-based).
pub fn cia402_channel_base(channel: usize) -> u16 {
    CIA402_BASE_INDEX + CIA402_CHANNEL_STRIDE * channel as u16
}

/// An object dictionary address (`index:subindex`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKey {
    pub index: u16,
    pub sub_index: u8,
}

impl ObjectKey {
    pub const fn new(index: u16, sub_index: u8) -> Self {
        Self { index, sub_index }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}:{:02x}", self.index, self.sub_index)
    }
}

/// The objects a slave reports, mapped to their declared data type name
/// (e.g. `uint16`, `int32`, `float`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDictionary {
    entries: BTreeMap<ObjectKey, String>,
}

impl ObjectDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ObjectKey, data_type: impl Into<String>) {
        self.entries.insert(key, data_type.into());
    }

    /// Returns the declared type name of `key`, if the slave has it.
    pub fn data_type(&self, key: ObjectKey) -> Option<&str> {
        self.entries
            .get(&key)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.data_type(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static SDO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^  0x([0-9a-fA-F]{4}):([0-9a-fA-F]{2}), [rw-]+, ([^,]+),")
        .expect("valid sdo entry regex")
});

static SDO_RULES: [LineRule<ObjectDictionary>; 1] = [LineRule {
    pattern: &SDO_RE,
    handler: on_sdo_entry,
}];

fn on_sdo_entry(od: &mut ObjectDictionary, caps: &Captures<'_>) -> Result<(), ConfigGenError> {
    let key = ObjectKey::new(parse_hex_u16(group(caps, 1))?, parse_hex_u8(group(caps, 2))?);
    od.insert(key, group(caps, 3));
    Ok(())
}

/// Parses `ethercat sdos` output into an [`ObjectDictionary`].
///
/// Only entry lines (`  0x6041:00, r-r-r-, uint16, 16 bit, "Statusword"`)
/// are used; the `SDO 0x....` object headers are skipped.
pub fn parse_sdos(text: &str) -> Result<ObjectDictionary, ConfigGenError> {
    let mut od = ObjectDictionary::new();
    scan_lines(text, &SDO_RULES, &mut od)?;
    Ok(od)
}

/// Fetches the slave's object dictionary and stores it on the slave.
pub fn probe<B: BusIntrospector + ?Sized>(
    bus: &B,
    slave: &mut Slave,
) -> Result<(), ConfigGenError> {
    let text = bus.sdos(slave.master, slave.position)?;
    slave.dictionary = parse_sdos(&text)?;
    debug!(
        "[OD] Slave {}:{} reports {} dictionary entries",
        slave.master,
        slave.position,
        slave.dictionary.len()
    );
    Ok(())
}

/// A slave is treated as CiA 402 when the three objects the profile makes
/// mandatory (controlword, statusword, supported drive modes) all exist.
pub fn is_cia402(slave: &Slave) -> bool {
    [
        CIA402_CONTROL_WORD,
        CIA402_STATUS_WORD,
        CIA402_SUPPORTED_MODES,
    ]
    .into_iter()
    .all(|key| slave.dictionary.contains(key))
}

/// Counts the CiA 402 channels (axes) of a slave.
///
/// Walks "supported drive modes" from channel 0 upwards and stops at the
/// first channel that lacks it; channels after a gap are not counted.
pub fn cia402_channel_count(slave: &Slave) -> usize {
    (0..CIA402_MAX_CHANNELS)
        .take_while(|&channel| {
            let key = ObjectKey::new(
                cia402_channel_base(channel) + CIA402_SUPPORTED_MODES_OFFSET,
                0,
            );
            slave.dictionary.contains(key)
        })
        .count()
}
