//! Forces defined by an engine-side algebraic energy expression.
//!
//! These are carried as data only: the expression text, its global parameters with
//! default values, and per-entity parameter vectors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalParameter {
    pub name: String,
    pub default_value: f64,
}

impl GlobalParameter {
    pub fn new(name: impl Into<String>, default_value: f64) -> Self {
        Self {
            name: name.into(),
            default_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalParticle {
    pub index: usize,
    pub parameters: Vec<f64>,
}

/// A per-particle potential depending on absolute position, e.g. a positional restraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomExternalForce {
    pub energy_function: String,
    #[serde(default)]
    pub global_parameters: Vec<GlobalParameter>,
    #[serde(default)]
    pub per_particle_parameters: Vec<String>,
    #[serde(default)]
    pub particles: Vec<ExternalParticle>,
}

impl CustomExternalForce {
    pub fn new(energy_function: impl Into<String>) -> Self {
        Self {
            energy_function: energy_function.into(),
            ..Self::default()
        }
    }

    pub fn add_global_parameter(&mut self, name: impl Into<String>, default_value: f64) {
        self.global_parameters
            .push(GlobalParameter::new(name, default_value));
    }

    pub fn add_per_particle_parameter(&mut self, name: impl Into<String>) {
        self.per_particle_parameters.push(name.into());
    }

    pub fn add_particle(&mut self, index: usize, parameters: Vec<f64>) -> usize {
        self.particles.push(ExternalParticle { index, parameters });
        self.particles.len() - 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBond {
    pub i: usize,
    pub j: usize,
    pub parameters: Vec<f64>,
}

/// A pair potential evaluated between explicitly listed particle pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomBondForce {
    pub energy_function: String,
    #[serde(default)]
    pub global_parameters: Vec<GlobalParameter>,
    #[serde(default)]
    pub per_bond_parameters: Vec<String>,
    #[serde(default)]
    pub bonds: Vec<CustomBond>,
}

impl CustomBondForce {
    pub fn new(energy_function: impl Into<String>) -> Self {
        Self {
            energy_function: energy_function.into(),
            ..Self::default()
        }
    }

    pub fn add_global_parameter(&mut self, name: impl Into<String>, default_value: f64) {
        self.global_parameters
            .push(GlobalParameter::new(name, default_value));
    }

    pub fn add_per_bond_parameter(&mut self, name: impl Into<String>) {
        self.per_bond_parameters.push(name.into());
    }

    pub fn add_bond(&mut self, i: usize, j: usize, parameters: Vec<f64>) -> usize {
        self.bonds.push(CustomBond { i, j, parameters });
        self.bonds.len() - 1
    }
}
