//! # Workflows Module
//!
//! High-level entry points that tie the engine together for drivers.
//!
//! - **Perturbation Workflow** ([`perturb`]) - Captures a reference system and builds the
//!   intermediates of a full protocol, reporting progress per phase.

pub mod perturb;
