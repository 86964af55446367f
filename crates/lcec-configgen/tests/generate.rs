// crates/lcec-configgen/tests/generate.rs

//! End-to-end generation from recorded `ethercat` tool output.

use lcec_configgen::{
    BusIntrospector, ConfigGenError, DriverTable, DumpDirectory, GeneratorOptions,
    build_config, generate_config,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct MastersNode {
    #[serde(rename = "master", default)]
    masters: Vec<MasterNode>,
}

#[derive(Debug, Deserialize)]
struct MasterNode {
    #[serde(rename = "@idx")]
    idx: u32,
    #[serde(rename = "@appTimePeriod")]
    app_time_period: Option<u32>,
    #[serde(rename = "slave", default)]
    slaves: Vec<SlaveNode>,
}

#[derive(Debug, Deserialize)]
struct SlaveNode {
    #[serde(rename = "@idx")]
    idx: u16,
    #[serde(rename = "@type")]
    driver_type: String,
    #[serde(rename = "@vid")]
    vid: Option<String>,
    #[serde(rename = "@pid")]
    pid: Option<String>,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "syncManager", default)]
    sync_managers: Vec<SyncManagerNode>,
    #[serde(rename = "modParam", default)]
    mod_params: Vec<ModParamNode>,
}

#[derive(Debug, Deserialize)]
struct SyncManagerNode {
    #[serde(rename = "@idx")]
    idx: u8,
    #[serde(rename = "@dir")]
    dir: String,
    #[serde(rename = "pdo", default)]
    pdos: Vec<PdoNode>,
}

#[derive(Debug, Deserialize)]
struct PdoNode {
    #[serde(rename = "@idx")]
    idx: String,
    #[serde(rename = "pdoEntry", default)]
    entries: Vec<PdoEntryNode>,
}

#[derive(Debug, Deserialize)]
struct PdoEntryNode {
    #[serde(rename = "@idx")]
    idx: String,
    #[serde(rename = "@halPin")]
    hal_pin: String,
    #[serde(rename = "@halType")]
    hal_type: String,
}

#[derive(Debug, Deserialize)]
struct ModParamNode {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value")]
    value: String,
}

fn test_data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let path = test_data_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn recorded_bus() -> DumpDirectory {
    DumpDirectory::new(test_data_path("bus"))
}

fn generate_default() -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    generate_config(
        &recorded_bus(),
        &DriverTable::builtin(),
        &GeneratorOptions::default(),
    )
    .expect("generation from the recorded bus should succeed")
}

#[test]
fn test_recorded_bus_matches_expected_document() {
    assert_eq!(generate_default(), load_test_file("expected.xml"));
}

#[test]
fn test_recorded_bus_parses_back() {
    let xml = generate_default();

    // Parse back to verify integrity
    let doc: MastersNode = quick_xml::de::from_str(&xml).expect("Generated XML should be valid");
    assert_eq!(
        doc.masters.iter().map(|m| m.idx).collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert!(doc.masters.iter().all(|m| m.app_time_period.is_none()));

    let slaves = &doc.masters[0].slaves;
    assert_eq!(slaves.len(), 4);

    // Table-matched slaves carry no identity attributes.
    assert_eq!(slaves[1].driver_type, "EL1008");
    assert_eq!(slaves[1].vid, None);
    assert_eq!(slaves[1].pid, None);
    assert!(slaves[1].mod_params.is_empty());

    let drive = &slaves[2];
    assert_eq!(drive.idx, 2);
    assert_eq!(drive.driver_type, "basic_cia402");
    assert_eq!(drive.vid.as_deref(), Some("0x0000066f"));
    assert_eq!(drive.pid.as_deref(), Some("0x60380004"));
    assert_eq!(drive.name, "D3");
    assert!(drive.sync_managers.is_empty());
    let modes: Vec<&str> = drive
        .mod_params
        .iter()
        .filter(|p| p.value == "true")
        .map(|p| p.name.as_str())
        .take(8)
        .collect();
    assert_eq!(
        modes,
        vec![
            "enablePP",
            "enablePV",
            "enableTQ",
            "enableHM",
            "enableIP",
            "enableCSP",
            "enableCSV",
            "enableCST"
        ]
    );

    let io = &slaves[3];
    assert_eq!(io.driver_type, "generic");
    assert_eq!(io.sync_managers.len(), 4);
    assert_eq!(io.sync_managers[2].idx, 2);
    assert_eq!(io.sync_managers[2].dir, "out");
    assert_eq!(io.sync_managers[3].pdos[1].idx, "1a01");

    let entries: Vec<&PdoEntryNode> = io
        .sync_managers
        .iter()
        .flat_map(|sm| &sm.pdos)
        .flat_map(|pdo| &pdo.entries)
        .collect();
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| e.idx != "0000"));
    let mut pins: Vec<&str> = entries.iter().map(|e| e.hal_pin.as_str()).collect();
    pins.sort_unstable();
    pins.dedup();
    assert_eq!(pins.len(), 5, "pin names must be unique within a slave");
    assert_eq!(entries[1].hal_type, "bit");
    assert_eq!(entries[2].hal_type, "s32");

    assert_eq!(doc.masters[1].slaves[0].name, "D5");
}

#[test]
fn test_device_list_replaces_builtin_table() {
    let table = DriverTable::from_device_list(&load_test_file("devices.txt"))
        .expect("device list should parse");
    assert_eq!(table.len(), 4);

    let root = build_config(&recorded_bus(), &table, &GeneratorOptions::default()).unwrap();
    let types: Vec<String> = root
        .slaves()
        .map(|s| s.driver_type.to_string())
        .collect();
    assert_eq!(
        types,
        vec!["EK1100", "EL1008", "basic_cia402", "ENC2", "EK1100"]
    );
    let enc = root.slaves().nth(3).unwrap();
    assert!(enc.sync_managers.is_empty());
    assert_eq!(enc.vendor_id, None);
}

#[test]
fn test_master_attributes_from_options() {
    let options = GeneratorOptions {
        app_time_period: Some(1_000_000),
        ref_clock_sync_cycles: Some(5),
        ..Default::default()
    };
    let xml = generate_config(&recorded_bus(), &DriverTable::builtin(), &options).unwrap();
    assert!(xml.contains(r#"<master idx="0" appTimePeriod="1000000" refClockSyncCycles="5">"#));
    let doc: MastersNode = quick_xml::de::from_str(&xml).unwrap();
    assert_eq!(doc.masters[1].app_time_period, Some(1_000_000));
}

#[test]
fn test_missing_recording_aborts_run() {
    // Without the table the couplers become generic and need PDO listings,
    // which were never recorded.
    let options = GeneratorOptions {
        use_driver_table: false,
        ..Default::default()
    };
    let err = generate_config(&recorded_bus(), &DriverTable::builtin(), &options).unwrap_err();
    assert!(matches!(err, ConfigGenError::Io(_)));
}

/// A bus whose topology request fails outright.
struct DeadBus;

impl BusIntrospector for DeadBus {
    fn slaves(&self) -> Result<String, ConfigGenError> {
        Err(ConfigGenError::CommandFailed {
            command: "ethercat -v slaves".into(),
            status: Some(1),
            stderr: "Failed to open master device /dev/EtherCAT0".into(),
        })
    }
    fn sdos(&self, _: u32, _: u16) -> Result<String, ConfigGenError> {
        unreachable!("no slaves were listed")
    }
    fn upload(&self, _: u32, _: u16, _: u16, _: u8) -> Result<String, ConfigGenError> {
        unreachable!("no slaves were listed")
    }
    fn pdos(&self, _: u32, _: u16) -> Result<String, ConfigGenError> {
        unreachable!("no slaves were listed")
    }
}

#[test]
fn test_topology_failure_is_fatal() {
    let err = generate_config(&DeadBus, &DriverTable::builtin(), &GeneratorOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("/dev/EtherCAT0"));
}
