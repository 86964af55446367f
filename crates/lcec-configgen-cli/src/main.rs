//! `lcec-configgen` command-line tool.
//!
//! Probes the EtherCAT bus through the IgH `ethercat` tool and prints a
//! LinuxCNC-EtherCAT XML configuration for it on standard output.
//!
//! # Usage
//!
//! ```bash
//! # Probe the live bus
//! lcec-configgen > ethercat-conf.xml
//!
//! # Skip PDO generation for unknown devices and log what happens
//! lcec-configgen --generic-pdos false -vv
//!
//! # Generate from recorded tool output with a driver list from `lcec_devices`
//! lcec-configgen --from-dir ./dump --device-list devices.txt
//! ```

use clap::{ArgAction, Parser};
use lcec_configgen::{
    ConfigGenError, DriverTable, DumpDirectory, EthercatTool, GeneratorOptions, generate_config,
};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Generate a LinuxCNC-EtherCAT configuration for the attached bus
#[derive(Parser, Debug)]
#[command(name = "lcec-configgen")]
#[command(version)]
#[command(about = "Generate a LinuxCNC-EtherCAT XML configuration from the live EtherCAT bus", long_about = None)]
struct Args {
    /// Resolve devices against the driver table
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    typedb: bool,

    /// Add CiA 402 modParams to every CiA 402 device, not only to basic_cia402 ones
    #[arg(long, default_value_t = false, action = ArgAction::Set, value_name = "BOOL")]
    extra_cia_modparams: bool,

    /// Generate sync manager and PDO entries for generic devices
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    generic_pdos: bool,

    /// `appTimePeriod` of every master, in ns
    #[arg(long, value_name = "NS")]
    app_time_period: Option<u32>,

    /// `refClockSyncCycles` of every master
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    ref_clock_sync_cycles: Option<i32>,

    /// The EtherCAT master's command-line tool
    #[arg(long, value_name = "PATH", default_value = "ethercat")]
    ethercat: PathBuf,

    /// Read recorded tool output from this directory instead of the bus
    #[arg(long, value_name = "DIR")]
    from_dir: Option<PathBuf>,

    /// Use the listing printed by `lcec_devices` instead of the built-in driver table
    #[arg(long, value_name = "FILE")]
    device_list: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            use_driver_table: self.typedb,
            extra_cia_modparams: self.extra_cia_modparams,
            generic_pdos: self.generic_pdos,
            app_time_period: self.app_time_period,
            ref_clock_sync_cycles: self.ref_clock_sync_cycles,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn load_driver_table(args: &Args) -> Result<DriverTable, ConfigGenError> {
    let table = match &args.device_list {
        Some(path) => DriverTable::from_device_list(&fs::read_to_string(path)?)?,
        None => DriverTable::builtin(),
    };
    info!("[Config] Driver table has {} entries", table.len());
    Ok(table)
}

fn run(args: &Args) -> Result<(), ConfigGenError> {
    let table = load_driver_table(args)?;
    let options = args.options();

    let xml = match &args.from_dir {
        Some(dir) => {
            info!("[Bus] Replaying recorded output from {}", dir.display());
            generate_config(&DumpDirectory::new(dir), &table, &options)?
        }
        None => generate_config(&EthercatTool::new(args.ethercat.clone()), &table, &options)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(xml.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_defaults() {
        let args = Args::parse_from(["lcec-configgen"]);
        assert_eq!(args.options(), GeneratorOptions::default());
        assert_eq!(args.ethercat, PathBuf::from("ethercat"));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_boolean_switches_take_values() {
        let args = Args::parse_from([
            "lcec-configgen",
            "--typedb",
            "false",
            "--extra-cia-modparams",
            "true",
            "--generic-pdos",
            "false",
            "--ref-clock-sync-cycles",
            "-1",
            "-vv",
        ]);
        let options = args.options();
        assert!(!options.use_driver_table);
        assert!(options.extra_cia_modparams);
        assert!(!options.generic_pdos);
        assert_eq!(options.ref_clock_sync_cycles, Some(-1));
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
