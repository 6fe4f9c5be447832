use super::traits::SystemFile;
use crate::core::models::system::{System, SystemError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed system document: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize system: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Inconsistent system: {0}")]
    Inconsistent(#[from] SystemError),
}

/// TOML encoding of a [`System`].
///
/// Reading validates the decoded system, so a document whose force terms reference
/// particles outside the system is rejected at load time.
pub struct TomlFile;

impl SystemFile for TomlFile {
    type Error = IoError;

    fn read_from(reader: &mut impl BufRead) -> Result<System, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let system: System = toml::from_str(&content)?;
        system.validate()?;
        Ok(system)
    }

    fn write_to(system: &System, writer: &mut impl Write) -> Result<(), Self::Error> {
        let content = toml::to_string(system)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
