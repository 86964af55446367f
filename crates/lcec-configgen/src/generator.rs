// crates/lcec-configgen/src/generator.rs

//! Runs the inference pipeline over every slave of the bus.

use crate::builder::save_config_to_string;
use crate::cia402;
use crate::context::BuildContext;
use crate::drivers::DriverTable;
use crate::error::ConfigGenError;
use crate::introspect::BusIntrospector;
use crate::model::{ConfigRoot, SlaveConfig};
use crate::od;
use crate::pdo;
use crate::pins;
use crate::resolver::resolve_driver_type;
use crate::topology;
use crate::types::{DriverType, Slave};
use log::{debug, info};

/// Switches controlling what the generator infers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Resolve slaves against the driver table before falling back to the
    /// generic profiles.
    pub use_driver_table: bool,
    /// Also synthesize CiA 402 `<modParam>`s for CiA 402 slaves that resolved
    /// to a table driver or to `generic`.
    pub extra_cia_modparams: bool,
    /// Build the sync manager / PDO tree for `generic` slaves.
    pub generic_pdos: bool,
    /// `appTimePeriod` of every `<master>`, in ns.
    pub app_time_period: Option<u32>,
    /// `refClockSyncCycles` of every `<master>`.
    pub ref_clock_sync_cycles: Option<i32>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            use_driver_table: true,
            extra_cia_modparams: false,
            generic_pdos: true,
            app_time_period: None,
            ref_clock_sync_cycles: None,
        }
    }
}

/// Probes one slave and turns it into its `<slave>` configuration.
fn configure_slave<B: BusIntrospector + ?Sized>(
    bus: &B,
    table: &DriverTable,
    ctx: &mut BuildContext,
    mut slave: Slave,
) -> Result<SlaveConfig, ConfigGenError> {
    od::probe(bus, &mut slave)?;
    let options = ctx.options().clone();
    let driver_type = resolve_driver_type(&slave, table, options.use_driver_table);

    let mod_params = if driver_type == DriverType::BasicCia402
        || (options.extra_cia_modparams && od::is_cia402(&slave))
    {
        cia402::synthesize_mod_params(bus, &slave)?
    } else {
        Vec::new()
    };

    let mut sync_managers = if driver_type == DriverType::Generic && options.generic_pdos {
        pdo::build_pdos(bus, &slave)?
    } else {
        Vec::new()
    };
    pins::deduplicate_pin_names(&mut sync_managers);

    let generic_profile = driver_type.is_generic_profile();
    let config = SlaveConfig {
        index: slave.position,
        vendor_id: generic_profile.then_some(slave.vendor_id),
        product_id: generic_profile.then_some(slave.product_id),
        comment: if generic_profile {
            slave.device_name.clone()
        } else {
            None
        },
        name: ctx.next_name(),
        driver_type,
        sync_managers,
        mod_params,
    };
    debug!(
        "[Config] Slave {}:{} configured as {} ({})",
        slave.master, slave.position, config.name, config.driver_type
    );
    Ok(config)
}

/// Probes the whole bus and builds the configuration tree.
///
/// Slaves are processed one at a time in discovery order. The first failing
/// introspection call aborts the run.
pub fn build_config<B: BusIntrospector + ?Sized>(
    bus: &B,
    table: &DriverTable,
    options: &GeneratorOptions,
) -> Result<ConfigRoot, ConfigGenError> {
    let slaves = topology::read_slaves(bus)?;
    info!("[Config] Configuring {} slave(s)", slaves.len());

    let mut ctx = BuildContext::new(options.clone());
    for slave in slaves {
        let master = slave.master;
        let config = configure_slave(bus, table, &mut ctx, slave)?;
        ctx.push(master, config);
    }
    Ok(ctx.finish())
}

/// Probes the bus and returns the serialized XML configuration.
pub fn generate_config<B: BusIntrospector + ?Sized>(
    bus: &B,
    table: &DriverTable,
    options: &GeneratorOptions,
) -> Result<String, ConfigGenError> {
    let config = build_config(bus, table, options)?;
    save_config_to_string(&config)
}
