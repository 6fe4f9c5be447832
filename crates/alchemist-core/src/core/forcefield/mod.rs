//! # Force Field Module
//!
//! Reference evaluation of the supported force-term kinds in double precision.
//!
//! ## Overview
//!
//! The functions in [`potentials`] implement the closed-form energy of every term the
//! alchemical factory produces or preserves, including the softcore Lennard-Jones and
//! lambda-weighted generalized Born replacements. [`energy::EnergyCalculator`] sums them
//! over a [`System`](crate::core::models::system::System) at fixed coordinates.
//!
//! The evaluator is an independent check on the factory: it is used to confirm that a
//! perturbed system at full coupling reproduces the reference energy. It is never called
//! while building systems.
//!
//! ## Key Components
//!
//! - [`energy`] - Pairwise evaluator over an entire system
//! - [`potentials`] - Analytical potential functions
//! - [`term`] - Energy breakdown by interaction class
//!
//! ## Usage
//!
//! ```ignore
//! use alchemist::core::forcefield::energy::EnergyCalculator;
//!
//! let calculator = EnergyCalculator::new(&system, &positions)?;
//! let energy = calculator.potential_energy()?;
//! println!("{:.3} kJ/mol", energy.total());
//! ```

pub mod energy;
pub mod potentials;
pub mod term;
