//! Construction of the softcore replacement terms.
//!
//! Both builders take the ligand as a per-particle membership mask, indexed by
//! particle, and return freshly owned forces. Neither touches the reference system.

pub(crate) mod gb;
pub(crate) mod lennard_jones;
