// crates/lcec-configgen/src/model.rs

//! The configuration tree handed to the serializer.
//!
//! It mirrors the `<masters>` document: masters own slaves in discovery
//! order, slaves own their sync managers and `<modParam>`s.

use crate::types::{DriverType, ModParam, SyncManager};

/// Root of a generated configuration (`<masters>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRoot {
    /// Sorted by master index.
    pub masters: Vec<MasterConfig>,
}

impl ConfigRoot {
    /// Iterates over every slave of every master, in output order.
    pub fn slaves(&self) -> impl Iterator<Item = &SlaveConfig> {
        self.masters.iter().flat_map(|m| &m.slaves)
    }
}

/// One `<master>` and the slaves attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterConfig {
    pub index: u32,
    pub app_time_period: Option<u32>,
    pub ref_clock_sync_cycles: Option<i32>,
    pub slaves: Vec<SlaveConfig>,
}

/// One `<slave>` as it will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaveConfig {
    /// Ring position of the slave.
    pub index: u16,
    pub driver_type: DriverType,
    /// Only set for the generic profiles.
    pub vendor_id: Option<u32>,
    /// Only set for the generic profiles.
    pub product_id: Option<u32>,
    /// HAL component name (`D1`, `D2`, ...).
    pub name: String,
    /// Device name, written as a comment.
    pub comment: Option<String>,
    pub sync_managers: Vec<SyncManager>,
    pub mod_params: Vec<ModParam>,
}
