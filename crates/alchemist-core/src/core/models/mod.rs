//! # Models Module
//!
//! Plain-value data structures describing a force-field system: particles, constraints,
//! periodic box vectors and a closed set of force-term kinds.
//!
//! ## Key Types
//!
//! - [`system::System`] - The complete description handed to and produced by the factory
//! - [`force::Force`] - Tagged variant over every supported force-term kind
//! - [`nonbonded::NonbondedForce`] - Charges, Lennard-Jones parameters and pair exceptions
//! - [`gbsa::GbsaObcForce`] - Generalized Born implicit solvent
//! - [`custom::CustomExternalForce`], [`custom::CustomBondForce`] - Expression-defined terms
//! - [`softcore`] - Softcore replacement terms synthesized for alchemical intermediates

pub mod custom;
pub mod force;
pub mod gbsa;
pub mod nonbonded;
pub mod softcore;
pub mod system;
