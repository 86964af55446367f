// crates/lcec-configgen/src/introspect.rs

//! The seam between the inference engine and the EtherCAT master.
//!
//! The engine never talks to the bus itself. It asks a [`BusIntrospector`]
//! for the text the IgH `ethercat` command-line tool would print, and parses
//! that. [`EthercatTool`] runs the real tool; [`DumpDirectory`] replays output
//! recorded earlier, which is handy for offline generation and for tests.

use crate::error::ConfigGenError;
use log::{debug, trace};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of bus introspection text.
///
/// Every call is synchronous. An `Err` aborts the whole run.
pub trait BusIntrospector {
    /// Output of `ethercat -v slaves`.
    fn slaves(&self) -> Result<String, ConfigGenError>;

    /// Output of `ethercat -m <master> sdos -p <position>`.
    fn sdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError>;

    /// Output of `ethercat -m <master> upload -p <position> <index> <sub_index>`.
    fn upload(
        &self,
        master: u32,
        position: u16,
        index: u16,
        sub_index: u8,
    ) -> Result<String, ConfigGenError>;

    /// Output of `ethercat -m <master> pdos -p <position>`.
    fn pdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError>;
}

/// Runs the IgH EtherCAT master's `ethercat` tool.
#[derive(Debug, Clone)]
pub struct EthercatTool {
    program: OsString,
}

impl Default for EthercatTool {
    fn default() -> Self {
        Self::new("ethercat")
    }
}

impl EthercatTool {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the tool with `args` and returns its standard output.
    fn run(&self, args: &[String]) -> Result<String, ConfigGenError> {
        let command_line = format!("{} {}", self.program.to_string_lossy(), args.join(" "));
        debug!("[Bus] Running `{}`", command_line);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| ConfigGenError::CommandSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConfigGenError::CommandFailed {
                command: command_line,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        trace!("[Bus] `{}` returned {} bytes", command_line, output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl BusIntrospector for EthercatTool {
    fn slaves(&self) -> Result<String, ConfigGenError> {
        self.run(&["-v".into(), "slaves".into()])
    }

    fn sdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError> {
        self.run(&[
            "-m".into(),
            master.to_string(),
            "sdos".into(),
            "-p".into(),
            position.to_string(),
        ])
    }

    fn upload(
        &self,
        master: u32,
        position: u16,
        index: u16,
        sub_index: u8,
    ) -> Result<String, ConfigGenError> {
        self.run(&[
            "-m".into(),
            master.to_string(),
            "upload".into(),
            "-p".into(),
            position.to_string(),
            format!("0x{:04x}", index),
            sub_index.to_string(),
        ])
    }

    fn pdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError> {
        self.run(&[
            "-m".into(),
            master.to_string(),
            "pdos".into(),
            "-p".into(),
            position.to_string(),
        ])
    }
}

/// Replays tool output recorded into a directory.
///
/// Expected file names:
/// - `slaves.txt`
/// - `sdos-<master>-<position>.txt`
/// - `pdos-<master>-<position>.txt`
/// - `upload-<master>-<position>-<index>-<sub_index>.txt`, with index and
///   sub-index as lower-case hex (`upload-0-1-6502-00.txt`).
#[derive(Debug, Clone)]
pub struct DumpDirectory {
    root: PathBuf,
}

impl DumpDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: String) -> Result<String, ConfigGenError> {
        let path = self.root.join(name);
        debug!("[Bus] Reading recorded output {}", path.display());
        Ok(fs::read_to_string(path)?)
    }
}

impl BusIntrospector for DumpDirectory {
    fn slaves(&self) -> Result<String, ConfigGenError> {
        self.read("slaves.txt".into())
    }

    fn sdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError> {
        self.read(format!("sdos-{}-{}.txt", master, position))
    }

    fn upload(
        &self,
        master: u32,
        position: u16,
        index: u16,
        sub_index: u8,
    ) -> Result<String, ConfigGenError> {
        self.read(format!(
            "upload-{}-{}-{:04x}-{:02x}.txt",
            master, position, index, sub_index
        ))
    }

    fn pdos(&self, master: u32, position: u16) -> Result<String, ConfigGenError> {
        self.read(format!("pdos-{}-{}.txt", master, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let tool = EthercatTool::new("/nonexistent/ethercat-tool-for-tests");
        let err = tool.slaves().unwrap_err();
        match err {
            ConfigGenError::CommandSpawn { command, .. } => {
                assert_eq!(command, "/nonexistent/ethercat-tool-for-tests -v slaves");
            }
            other => panic!("Expected CommandSpawn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dump_file_is_an_io_error() {
        let dump = DumpDirectory::new("/nonexistent/dump-dir");
        assert!(matches!(dump.sdos(0, 3), Err(ConfigGenError::Io(_))));
        assert_eq!(dump.root(), Path::new("/nonexistent/dump-dir"));
    }
}
