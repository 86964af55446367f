// crates/lcec-configgen/src/resolver.rs

//! Chooses the driver a slave is configured with.

use crate::drivers::DriverTable;
use crate::od;
use crate::types::{DriverType, Slave};
use log::debug;

/// Resolves the driver type of `slave`.
///
/// Precedence: an exact `(vendor, product)` row of `table` (only when
/// `use_table` is set), then `basic_cia402` for slaves that look like CiA 402
/// drives, then `generic`.
pub fn resolve_driver_type(slave: &Slave, table: &DriverTable, use_table: bool) -> DriverType {
    if use_table {
        if let Some(name) = table.lookup(slave.vendor_id, slave.product_id) {
            debug!(
                "[Resolver] Slave {}:{} uses driver {} from the driver table",
                slave.master, slave.position, name
            );
            return DriverType::Named(name.to_string());
        }
    }

    let driver = if od::is_cia402(slave) {
        DriverType::BasicCia402
    } else {
        DriverType::Generic
    };
    debug!(
        "[Resolver] Slave {}:{} has no table entry, falling back to {}",
        slave.master, slave.position, driver
    );
    driver
}
