// crates/lcec-configgen/src/drivers.rs

//! The static table of device-specific drivers known to LinuxCNC-EtherCAT.

mod builtin;

use crate::error::ConfigGenError;
use crate::scan::parse_hex_u32;
use log::debug;

/// A row of the compiled-in table.
#[derive(Debug)]
pub(crate) struct BuiltinDriver {
    vendor_id: u32,
    product_id: u32,
    type_name: &'static str,
}

/// A `(vendor id, product id) -> driver type` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverEntry {
    pub vendor_id: u32,
    pub product_id: u32,
    pub type_name: String,
}

/// Ordered, read-only lookup table of device-specific drivers.
///
/// The table may hold several rows for the same `(vendor, product)` pair
/// (e.g. `EL7041` and its variants); [`DriverTable::lookup`] returns the first
/// in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverTable {
    entries: Vec<DriverEntry>,
}

impl DriverTable {
    /// The table compiled into this crate.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::BUILTIN_DRIVERS
                .iter()
                .map(|d| DriverEntry {
                    vendor_id: d.vendor_id,
                    product_id: d.product_id,
                    type_name: d.type_name.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_entries(entries: Vec<DriverEntry>) -> Self {
        Self { entries }
    }

    /// Parses the listing printed by the `lcec_devices` tool.
    ///
    /// Each line is tab separated: `name, vendor id, product id, source file,
    /// modparam snippets`. Lines with fewer than three fields are skipped.
    pub fn from_device_list(text: &str) -> Result<Self, ConfigGenError> {
        let mut entries = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                continue;
            }
            let vendor_id = parse_hex_u32(fields[1].trim()).map_err(|_| {
                ConfigGenError::DeviceListFormat {
                    line: n + 1,
                    reason: "invalid vendor id",
                }
            })?;
            let product_id = parse_hex_u32(fields[2].trim()).map_err(|_| {
                ConfigGenError::DeviceListFormat {
                    line: n + 1,
                    reason: "invalid product id",
                }
            })?;
            let type_name = fields[0].trim();
            if type_name.is_empty() {
                return Err(ConfigGenError::DeviceListFormat {
                    line: n + 1,
                    reason: "empty driver name",
                });
            }
            entries.push(DriverEntry {
                vendor_id,
                product_id,
                type_name: type_name.to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// Returns the driver type of the first row matching `(vendor_id, product_id)`.
    pub fn lookup(&self, vendor_id: u32, product_id: u32) -> Option<&str> {
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.vendor_id == vendor_id && e.product_id == product_id);
        let first = matches.next()?;
        let others: Vec<&str> = matches.map(|e| e.type_name.as_str()).collect();
        if !others.is_empty() {
            debug!(
                "[Resolver] 0x{:08x}:0x{:08x} matches {} and also {:?}; using the first",
                vendor_id, product_id, first.type_name, others
            );
        }
        Some(&first.type_name)
    }

    pub fn entries(&self) -> &[DriverEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
