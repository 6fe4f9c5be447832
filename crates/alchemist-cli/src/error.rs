use alchemist::core::io::IoError;
use alchemist::engine::config::ConfigError;
use alchemist::engine::error::AlchemyError;
use alchemist::engine::protocol::ProtocolError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Alchemy(#[from] AlchemyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid protocol: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    FileWriting {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
