use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use crate::core::models::softcore::CouplingMode;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("{name} must be a finite value in [0, 1], got {value}")]
    FactorOutOfRange { name: &'static str, value: f64 },
}

/// One point on an alchemical path.
///
/// Each factor is the fraction of the corresponding interaction that is present:
/// `1.0` leaves the reference untouched and `0.0` removes it. Values are validated on
/// construction and the state is immutable afterwards.
///
/// By default ligand electrostatics are annihilated (ligand-internal charge pairs are
/// scaled too) and ligand Lennard-Jones interactions are decoupled (ligand-internal
/// pairs stay at full strength).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct AlchemicalState {
    relative_restraints: f64,
    ligand_electrostatics: f64,
    ligand_lennard_jones: f64,
    ligand_torsions: f64,
    annihilate_electrostatics: bool,
    annihilate_lennard_jones: bool,
}

impl AlchemicalState {
    /// Creates a state with the default coupling modes.
    pub fn new(
        relative_restraints: f64,
        ligand_electrostatics: f64,
        ligand_lennard_jones: f64,
        ligand_torsions: f64,
    ) -> Result<Self, StateError> {
        AlchemicalStateBuilder::new()
            .relative_restraints(relative_restraints)
            .ligand_electrostatics(ligand_electrostatics)
            .ligand_lennard_jones(ligand_lennard_jones)
            .ligand_torsions(ligand_torsions)
            .build()
    }

    pub fn builder() -> AlchemicalStateBuilder {
        AlchemicalStateBuilder::new()
    }

    /// The state `(0, 1, 1, 1)`: every interaction at full strength.
    pub fn fully_interacting() -> Self {
        Self {
            relative_restraints: 0.0,
            ligand_electrostatics: 1.0,
            ligand_lennard_jones: 1.0,
            ligand_torsions: 1.0,
            annihilate_electrostatics: true,
            annihilate_lennard_jones: false,
        }
    }

    /// A default-mode state with no restraints and full torsions, for preset grids
    /// whose values are known to lie in `[0, 1]`.
    pub(crate) fn preset(ligand_electrostatics: f64, ligand_lennard_jones: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&ligand_electrostatics));
        debug_assert!((0.0..=1.0).contains(&ligand_lennard_jones));
        Self {
            ligand_electrostatics,
            ligand_lennard_jones,
            ..Self::fully_interacting()
        }
    }

    #[inline]
    pub fn relative_restraints(&self) -> f64 {
        self.relative_restraints
    }

    #[inline]
    pub fn ligand_electrostatics(&self) -> f64 {
        self.ligand_electrostatics
    }

    #[inline]
    pub fn ligand_lennard_jones(&self) -> f64 {
        self.ligand_lennard_jones
    }

    #[inline]
    pub fn ligand_torsions(&self) -> f64 {
        self.ligand_torsions
    }

    #[inline]
    pub fn annihilate_electrostatics(&self) -> bool {
        self.annihilate_electrostatics
    }

    #[inline]
    pub fn annihilate_lennard_jones(&self) -> bool {
        self.annihilate_lennard_jones
    }

    pub fn electrostatics_mode(&self) -> CouplingMode {
        CouplingMode::from_annihilate(self.annihilate_electrostatics)
    }

    pub fn lennard_jones_mode(&self) -> CouplingMode {
        CouplingMode::from_annihilate(self.annihilate_lennard_jones)
    }

    /// A builder preloaded with this state's values.
    pub fn to_builder(&self) -> AlchemicalStateBuilder {
        AlchemicalStateBuilder {
            relative_restraints: self.relative_restraints,
            ligand_electrostatics: self.ligand_electrostatics,
            ligand_lennard_jones: self.ligand_lennard_jones,
            ligand_torsions: self.ligand_torsions,
            annihilate_electrostatics: self.annihilate_electrostatics,
            annihilate_lennard_jones: self.annihilate_lennard_jones,
        }
    }
}

impl Default for AlchemicalState {
    fn default() -> Self {
        Self::fully_interacting()
    }
}

impl fmt::Display for AlchemicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "restraints={:.4} electrostatics={:.4} lennard-jones={:.4} torsions={:.4}",
            self.relative_restraints,
            self.ligand_electrostatics,
            self.ligand_lennard_jones,
            self.ligand_torsions
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlchemicalStateBuilder {
    relative_restraints: f64,
    ligand_electrostatics: f64,
    ligand_lennard_jones: f64,
    ligand_torsions: f64,
    annihilate_electrostatics: bool,
    annihilate_lennard_jones: bool,
}

impl Default for AlchemicalStateBuilder {
    fn default() -> Self {
        AlchemicalState::fully_interacting().to_builder()
    }
}

impl AlchemicalStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relative_restraints(mut self, value: f64) -> Self {
        self.relative_restraints = value;
        self
    }
    pub fn ligand_electrostatics(mut self, value: f64) -> Self {
        self.ligand_electrostatics = value;
        self
    }
    pub fn ligand_lennard_jones(mut self, value: f64) -> Self {
        self.ligand_lennard_jones = value;
        self
    }
    pub fn ligand_torsions(mut self, value: f64) -> Self {
        self.ligand_torsions = value;
        self
    }
    pub fn annihilate_electrostatics(mut self, annihilate: bool) -> Self {
        self.annihilate_electrostatics = annihilate;
        self
    }
    pub fn annihilate_lennard_jones(mut self, annihilate: bool) -> Self {
        self.annihilate_lennard_jones = annihilate;
        self
    }

    pub fn build(self) -> Result<AlchemicalState, StateError> {
        Ok(AlchemicalState {
            relative_restraints: check_factor("relative_restraints", self.relative_restraints)?,
            ligand_electrostatics: check_factor(
                "ligand_electrostatics",
                self.ligand_electrostatics,
            )?,
            ligand_lennard_jones: check_factor("ligand_lennard_jones", self.ligand_lennard_jones)?,
            ligand_torsions: check_factor("ligand_torsions", self.ligand_torsions)?,
            annihilate_electrostatics: self.annihilate_electrostatics,
            annihilate_lennard_jones: self.annihilate_lennard_jones,
        })
    }
}

fn check_factor(name: &'static str, value: f64) -> Result<f64, StateError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(StateError::FactorOutOfRange { name, value })
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

/// Serialized form of [`AlchemicalState`]; decoding goes through the builder.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct StateRecord {
    #[serde(default)]
    relative_restraints: f64,
    ligand_electrostatics: f64,
    ligand_lennard_jones: f64,
    #[serde(default = "default_one")]
    ligand_torsions: f64,
    #[serde(default = "default_true")]
    annihilate_electrostatics: bool,
    #[serde(default)]
    annihilate_lennard_jones: bool,
}

impl TryFrom<StateRecord> for AlchemicalState {
    type Error = StateError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        AlchemicalStateBuilder::new()
            .relative_restraints(record.relative_restraints)
            .ligand_electrostatics(record.ligand_electrostatics)
            .ligand_lennard_jones(record.ligand_lennard_jones)
            .ligand_torsions(record.ligand_torsions)
            .annihilate_electrostatics(record.annihilate_electrostatics)
            .annihilate_lennard_jones(record.annihilate_lennard_jones)
            .build()
    }
}

impl From<AlchemicalState> for StateRecord {
    fn from(state: AlchemicalState) -> Self {
        Self {
            relative_restraints: state.relative_restraints,
            ligand_electrostatics: state.ligand_electrostatics,
            ligand_lennard_jones: state.ligand_lennard_jones,
            ligand_torsions: state.ligand_torsions,
            annihilate_electrostatics: state.annihilate_electrostatics,
            annihilate_lennard_jones: state.annihilate_lennard_jones,
        }
    }
}
