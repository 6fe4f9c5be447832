//! Reading and writing force-field systems.
//!
//! Systems are persisted as TOML documents mirroring the serde layout of
//! [`System`](crate::core::models::system::System). The library itself never touches
//! the filesystem while building intermediates; these helpers serve drivers such as
//! the command-line shell.

pub mod toml_file;
pub mod traits;

pub use toml_file::{IoError, TomlFile};
pub use traits::SystemFile;
