pub mod build;
pub mod protocol;
