use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::system::SystemError;

#[derive(Debug, Error)]
pub enum AlchemyError {
    #[error("Ligand atom {index} is outside the system ({num_particles} particles)")]
    LigandIndexOutOfRange { index: usize, num_particles: usize },

    #[error("Force {index} of kind '{kind}' has no alchemical treatment")]
    UnhandledForce { index: usize, kind: String },

    #[error("Reference system is inconsistent: {0}")]
    InvalidSystem(#[from] SystemError),

    #[error("Invalid factory configuration: {0}")]
    Config(#[from] ConfigError),
}
