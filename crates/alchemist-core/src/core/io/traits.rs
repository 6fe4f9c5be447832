use crate::core::models::system::System;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Common interface for persisted system formats.
pub trait SystemFile {
    /// The error type for I/O and format failures.
    type Error: Error + From<io::Error>;

    /// Reads a system from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid system.
    fn read_from(reader: &mut impl BufRead) -> Result<System, Self::Error>;

    /// Writes a system to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(system: &System, writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<System, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(system: &System, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(system, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
