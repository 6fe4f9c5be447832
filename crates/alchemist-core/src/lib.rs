//! # Alchemist Core Library
//!
//! Construction of alchemically perturbed force-field systems for free energy
//! calculations. Given a reference system and a ligand atom selection, the library
//! builds the intermediate systems of a lambda protocol in which the ligand's torsions,
//! electrostatics and Lennard-Jones interactions are progressively switched off.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Plain-value system and force models, a reference
//!   energy evaluator used to validate transformations, TOML I/O and geometry.
//!
//! - **[`engine`]: The Logic Core.** Alchemical states and protocols, the softcore
//!   Lennard-Jones and generalized Born builders, and the factory that dispatches over
//!   every force kind to produce perturbed systems.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures, such as building every
//!   intermediate of a protocol with progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_systems;
