//! # Engine Module
//!
//! Construction of alchemical intermediates from a captured reference system.
//!
//! ## Overview
//!
//! [`factory::AlchemicalFactory`] owns an immutable snapshot of a reference system and
//! a ligand selection. For each [`state::AlchemicalState`] it produces a new system in
//! which ligand torsions, charges and Lennard-Jones interactions are scaled, replacing
//! the terms that would otherwise become singular with softcore forms. Protocol presets
//! in [`protocol`] supply the canonical state sequences.
//!
//! ## Architecture
//!
//! - **Factory** ([`factory`]) - Per-force-kind dispatch and parallel protocol builds
//! - **States** ([`state`]) - Validated, immutable points on the alchemical path
//! - **Protocols** ([`protocol`]) - Named schedules and ordering checks
//! - **Configuration** ([`config`]) - Softcore constants, GB settings, pass-through kinds
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for drivers
//! - **Error Handling** ([`error`]) - Construction failures

pub mod config;
pub mod error;
pub mod factory;
pub mod progress;
pub mod protocol;
pub(crate) mod softcore;
pub mod state;
