//! # Core Module
//!
//! Stateless building blocks shared by the alchemical engine: the force-field system
//! model, its reference energy evaluation, file I/O and geometric helpers.
//!
//! ## Architecture
//!
//! - **System Representation** ([`models`]) - Particles, constraints, box vectors and force terms
//! - **Energy Evaluation** ([`forcefield`]) - Reference potentials and a whole-system evaluator
//! - **File I/O** ([`io`]) - TOML serialization of systems
//! - **Geometry** ([`utils`]) - Distances under periodic boundaries, angles and dihedrals

pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
