// crates/lcec-configgen/src/error.rs

use std::fmt;
use std::io;

/// Errors that can occur while probing the bus or generating the configuration.
///
/// Every variant is fatal for a run: the generator never emits a partial document.
#[derive(Debug)]
pub enum ConfigGenError {
    /// The introspection program could not be started at all.
    CommandSpawn { command: String, source: io::Error },

    /// The introspection program ran but exited unsuccessfully.
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// An I/O error (reading a recorded dump, writing the document).
    Io(io::Error),

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(quick_xml::Error),

    /// A numeric field in the tool output could not be parsed.
    InvalidNumber { field: &'static str, value: String },

    /// A register upload returned no value token.
    EmptyUpload { index: u16, sub_index: u8 },

    /// A line of an `lcec_devices` listing was malformed.
    DeviceListFormat { line: usize, reason: &'static str },
}

impl ConfigGenError {
    /// Helper for the common "could not parse this number" case.
    pub(crate) fn invalid_number(field: &'static str, value: &str) -> Self {
        ConfigGenError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }
}

impl From<io::Error> for ConfigGenError {
    fn from(e: io::Error) -> Self {
        ConfigGenError::Io(e)
    }
}

impl From<quick_xml::Error> for ConfigGenError {
    fn from(e: quick_xml::Error) -> Self {
        ConfigGenError::XmlWriting(e)
    }
}

impl fmt::Display for ConfigGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigGenError::CommandSpawn { command, source } => {
                write!(f, "Unable to run `{}`: {}", command, source)
            }
            ConfigGenError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "`{}` exited with status {}", command, code)?,
                    None => write!(f, "`{}` was terminated by a signal", command)?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            ConfigGenError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigGenError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            ConfigGenError::InvalidNumber { field, value } => {
                write!(f, "Invalid {}: {:?}", field, value)
            }
            ConfigGenError::EmptyUpload { index, sub_index } => write!(
                f,
                "Upload of 0x{:04x}:{:02x} returned no value",
                index, sub_index
            ),
            ConfigGenError::DeviceListFormat { line, reason } => {
                write!(f, "Device list line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for ConfigGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigGenError::CommandSpawn { source, .. } => Some(source),
            ConfigGenError::Io(e) => Some(e),
            ConfigGenError::XmlWriting(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigGenError;
    use std::io;

    #[test]
    fn test_from_io_error() {
        let err: ConfigGenError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ConfigGenError::Io(_)));
    }

    #[test]
    fn test_command_failed_display_includes_stderr() {
        let err = ConfigGenError::CommandFailed {
            command: "ethercat -v slaves".to_string(),
            status: Some(1),
            stderr: "Failed to open master device\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`ethercat -v slaves` exited with status 1: Failed to open master device"
        );
    }

    #[test]
    fn test_empty_upload_display() {
        let err = ConfigGenError::EmptyUpload {
            index: 0x6502,
            sub_index: 0,
        };
        assert_eq!(err.to_string(), "Upload of 0x6502:00 returned no value");
    }
}
