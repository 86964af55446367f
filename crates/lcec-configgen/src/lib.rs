// src/lib.rs

#![doc = "Generates LinuxCNC-EtherCAT (`lcec`) XML configurations from a live bus."]
#![doc = ""]
#![doc = "The generator reads the text output of the IgH `ethercat` tool through a"]
#![doc = "[`BusIntrospector`], infers a driver type for every slave and, depending on"]
#![doc = "that type, CiA 402 `<modParam>`s or an explicit sync manager / PDO tree with"]
#![doc = "typed HAL pins. The result is a `<masters>` document for the `lcec` driver."]
#![doc = ""]
#![doc = "- `generate_config`: Probe the bus and return the serialized document."]
#![doc = "- `build_config`: Probe the bus and return the configuration tree."]
#![doc = "- `save_config_to_string`: Serialize a configuration tree."]

// --- Crate Modules ---

mod builder;
mod cia402;
mod context;
mod drivers;
mod error;
mod generator;
mod introspect;
mod model;
mod od;
mod pdo;
mod pins;
mod resolver;
mod scan;
mod topology;
mod types;

// --- Public API Re-exports ---

pub use builder::save_config_to_string;
pub use cia402::{parse_upload_value, supported_mode_switches, synthesize_mod_params};
pub use context::BuildContext;
pub use drivers::{DriverEntry, DriverTable};
pub use error::ConfigGenError;
pub use generator::{GeneratorOptions, build_config, generate_config};
pub use introspect::{BusIntrospector, DumpDirectory, EthercatTool};
pub use model::{ConfigRoot, MasterConfig, SlaveConfig};
pub use od::{ObjectDictionary, ObjectKey, cia402_channel_count, is_cia402, parse_sdos};
pub use pdo::{build_pdos, infer_pin_name, infer_pin_type, parse_pdos};
pub use pins::{deduplicate_pin_names, normalize_pin_name};
pub use resolver::resolve_driver_type;
pub use topology::{parse_slaves, read_slaves};
pub use types::{Direction, DriverType, ModParam, Pdo, PdoEntry, PinType, Slave, SyncManager};
