use super::force::Force;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SystemError {
    #[error("{owner} references particle {index}, but the system has {num_particles} particles")]
    ParticleIndexOutOfRange {
        owner: String,
        index: usize,
        num_particles: usize,
    },

    #[error("force {force_index} defines {found} particles, but the system has {expected}")]
    ParticleCountMismatch {
        force_index: usize,
        expected: usize,
        found: usize,
    },
}

/// A distance constraint between two particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub i: usize,
    pub j: usize,
    /// Constrained distance in nm.
    pub distance: f64,
}

impl Constraint {
    pub fn new(i: usize, j: usize, distance: f64) -> Self {
        Self { i, j, distance }
    }
}

fn default_box_vectors() -> [Vector3<f64>; 3] {
    [
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        Vector3::new(0.0, 0.0, 2.0),
    ]
}

/// A force-field description of a molecular system: particle masses, constraints,
/// default periodic box vectors and an ordered list of force terms.
///
/// A `System` is a plain value. Cloning it produces a fully independent copy, which
/// is how the alchemical factory captures its reference snapshot and how every
/// perturbed system is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Particle masses in daltons, one per particle.
    pub masses: Vec<f64>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Default periodic box vectors in nm.
    #[serde(default = "default_box_vectors")]
    pub box_vectors: [Vector3<f64>; 3],
    #[serde(default)]
    pub forces: Vec<Force>,
}

impl Default for System {
    fn default() -> Self {
        Self {
            masses: Vec::new(),
            constraints: Vec::new(),
            box_vectors: default_box_vectors(),
            forces: Vec::new(),
        }
    }
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a particle and returns its index.
    pub fn add_particle(&mut self, mass: f64) -> usize {
        self.masses.push(mass);
        self.masses.len() - 1
    }

    pub fn add_constraint(&mut self, i: usize, j: usize, distance: f64) -> usize {
        self.constraints.push(Constraint::new(i, j, distance));
        self.constraints.len() - 1
    }

    /// Appends a force term and returns its index.
    pub fn add_force(&mut self, force: impl Into<Force>) -> usize {
        self.forces.push(force.into());
        self.forces.len() - 1
    }

    #[inline]
    pub fn num_particles(&self) -> usize {
        self.masses.len()
    }

    pub fn set_box_vectors(&mut self, a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) {
        self.box_vectors = [a, b, c];
    }

    /// Checks that every particle index referenced by a constraint or a force term
    /// lies inside the system, and that per-particle forces cover every particle.
    pub fn validate(&self) -> Result<(), SystemError> {
        let num_particles = self.num_particles();
        let check = |owner: &dyn Fn() -> String, index: usize| {
            if index >= num_particles {
                Err(SystemError::ParticleIndexOutOfRange {
                    owner: owner(),
                    index,
                    num_particles,
                })
            } else {
                Ok(())
            }
        };

        for (c_idx, constraint) in self.constraints.iter().enumerate() {
            let owner = || format!("constraint {c_idx}");
            check(&owner, constraint.i)?;
            check(&owner, constraint.j)?;
        }

        for (force_index, force) in self.forces.iter().enumerate() {
            if let Some(found) = force.num_particle_entries() {
                if found != num_particles {
                    return Err(SystemError::ParticleCountMismatch {
                        force_index,
                        expected: num_particles,
                        found,
                    });
                }
            }
            let owner = || format!("force {force_index} ({})", force.kind_name());
            for index in force.referenced_particles() {
                check(&owner, index)?;
            }
        }

        Ok(())
    }
}
