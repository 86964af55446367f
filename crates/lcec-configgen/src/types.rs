// crates/lcec-configgen/src/types.rs

//! Public data types shared by the inference stages.

use crate::od::ObjectDictionary;
use core::fmt;

/// One EtherCAT slave as discovered on the bus.
///
/// Built once during probing and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slave {
    /// Index of the master the slave is attached to.
    pub master: u32,
    /// Ring position of the slave on its master.
    pub position: u16,
    pub vendor_id: u32,
    pub product_id: u32,
    pub revision: u32,
    /// `None` for devices that do not report a name.
    pub device_name: Option<String>,
    /// The slave's object dictionary (empty until probed).
    pub dictionary: ObjectDictionary,
}

/// A `<modParam>` name/value pair attached to a slave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModParam {
    pub name: String,
    pub value: String,
}

impl ModParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Data direction of a sync manager, seen from the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Slave to master (TxPDOs).
    In,
    /// Master to slave (RxPDOs).
    Out,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sync manager and the PDOs assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncManager {
    pub index: u8,
    pub direction: Direction,
    pub pdos: Vec<Pdo>,
}

/// A process data object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdo {
    pub index: u16,
    pub label: Option<String>,
    pub entries: Vec<PdoEntry>,
}

/// A single mapped object inside a PDO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdoEntry {
    pub index: u16,
    pub sub_index: u8,
    pub bit_len: u32,
    /// HAL pin name inferred for this entry.
    pub pin_name: String,
    /// HAL pin type inferred for this entry.
    pub pin_type: PinType,
    /// Label left over after pin naming. Always `None` when the label produced the pin name.
    pub label: Option<String>,
}

/// HAL pin type assigned to a PDO entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinType {
    Bit,
    U32,
    S32,
    U64,
    S64,
    FloatIeee,
    FloatDoubleIeee,
    /// The object dictionary did not declare a type for this entry.
    Blank,
    /// The declared type has no HAL equivalent and needs manual review.
    Unmappable(String),
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinType::Bit => f.write_str("bit"),
            PinType::U32 => f.write_str("u32"),
            PinType::S32 => f.write_str("s32"),
            PinType::U64 => f.write_str("u64"),
            PinType::S64 => f.write_str("s64"),
            PinType::FloatIeee => f.write_str("float-ieee"),
            PinType::FloatDoubleIeee => f.write_str("float-double-ieee"),
            PinType::Blank => f.write_str("BLANK"),
            PinType::Unmappable(declared) => write!(f, "unmappable:{}", declared),
        }
    }
}

/// The driver a slave is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverType {
    /// A device-specific driver from the driver table (e.g. `EL1008`).
    Named(String),
    /// The generic CiA 402 driver, configured through `<modParam>`s.
    BasicCia402,
    /// The generic driver, configured through explicit PDOs.
    Generic,
}

impl DriverType {
    pub fn as_str(&self) -> &str {
        match self {
            DriverType::Named(name) => name,
            DriverType::BasicCia402 => "basic_cia402",
            DriverType::Generic => "generic",
        }
    }

    /// Generic profiles carry vendor/product ids in the config; named drivers do not.
    pub fn is_generic_profile(&self) -> bool {
        matches!(self, DriverType::BasicCia402 | DriverType::Generic)
    }
}

impl fmt::Display for DriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_type_tags() {
        assert_eq!(PinType::Bit.to_string(), "bit");
        assert_eq!(PinType::FloatIeee.to_string(), "float-ieee");
        assert_eq!(PinType::FloatDoubleIeee.to_string(), "float-double-ieee");
        assert_eq!(PinType::Blank.to_string(), "BLANK");
        assert_eq!(
            PinType::Unmappable("visible_string".into()).to_string(),
            "unmappable:visible_string"
        );
    }

    #[test]
    fn test_driver_type_names() {
        assert_eq!(DriverType::Named("EL1008".into()).as_str(), "EL1008");
        assert_eq!(DriverType::BasicCia402.as_str(), "basic_cia402");
        assert_eq!(DriverType::Generic.as_str(), "generic");
        assert!(DriverType::Generic.is_generic_profile());
        assert!(!DriverType::Named("EL1008".into()).is_generic_profile());
    }
}
