//! Canonical lambda schedules.
//!
//! Every preset starts from the fully interacting state, discharges the ligand with
//! Lennard-Jones at full strength, then removes Lennard-Jones. Implicit-solvent presets
//! place extra Lennard-Jones points near both ends of the schedule, where free energy
//! estimates have the highest variance.

use super::state::AlchemicalState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const IMPLICIT_LENNARD_JONES: [f64; 23] = [
    1.0, 0.975, 0.95, 0.90, 0.85, 0.80, 0.75, 0.70, 0.65, 0.60, 0.55, 0.50, 0.45, 0.40, 0.35,
    0.30, 0.25, 0.20, 0.15, 0.10, 0.05, 0.025, 0.0,
];

const EXPLICIT_LENNARD_JONES: [f64; 12] = [
    1.0, 0.95, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0,
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("Unknown protocol preset '{0}' (expected one of: {presets})", presets = ProtocolPreset::names())]
    UnknownPreset(String),

    #[error("Protocol contains no states")]
    Empty,

    #[error("Protocol must start from the fully interacting state, found {0}")]
    NotFullyInteractingStart(AlchemicalState),

    #[error("State {index}: {factor} increases from {previous} to {current}")]
    NonMonotonic {
        index: usize,
        factor: &'static str,
        previous: f64,
        current: f64,
    },

    #[error("State {index}: Lennard-Jones is scaled before electrostatics reaches zero")]
    LennardJonesBeforeDischarge { index: usize },
}

/// Named default schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolPreset {
    ComplexImplicit,
    ComplexExplicit,
    SolventImplicit,
    SolventExplicit,
    Vacuum,
}

impl ProtocolPreset {
    pub const ALL: [ProtocolPreset; 5] = [
        ProtocolPreset::ComplexImplicit,
        ProtocolPreset::ComplexExplicit,
        ProtocolPreset::SolventImplicit,
        ProtocolPreset::SolventExplicit,
        ProtocolPreset::Vacuum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProtocolPreset::ComplexImplicit => "complex-implicit",
            ProtocolPreset::ComplexExplicit => "complex-explicit",
            ProtocolPreset::SolventImplicit => "solvent-implicit",
            ProtocolPreset::SolventExplicit => "solvent-explicit",
            ProtocolPreset::Vacuum => "vacuum",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProtocolPreset::ComplexImplicit => "ligand in a receptor complex, implicit solvent",
            ProtocolPreset::ComplexExplicit => "ligand in a receptor complex, explicit solvent",
            ProtocolPreset::SolventImplicit => "ligand alone in implicit solvent",
            ProtocolPreset::SolventExplicit => "ligand alone in explicit solvent",
            ProtocolPreset::Vacuum => "ligand in vacuum",
        }
    }

    fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// The preset's states, fully interacting first.
    pub fn states(self) -> Vec<AlchemicalState> {
        match self {
            ProtocolPreset::ComplexImplicit => {
                discharge_then_decouple(&[1.0, 0.75, 0.5, 0.25, 0.0], &IMPLICIT_LENNARD_JONES)
            }
            ProtocolPreset::SolventImplicit => {
                discharge_then_decouple(&[1.0, 0.5, 0.0], &IMPLICIT_LENNARD_JONES)
            }
            ProtocolPreset::ComplexExplicit | ProtocolPreset::SolventExplicit => {
                discharge_then_decouple(&[1.0, 0.0], &EXPLICIT_LENNARD_JONES)
            }
            ProtocolPreset::Vacuum => discharge_then_decouple(&[1.0, 0.0], &[1.0, 0.0]),
        }
    }
}

impl fmt::Display for ProtocolPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProtocolPreset {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProtocolError::UnknownPreset(s.to_string()))
    }
}

/// Ramps electrostatics through `electrostatics` at full Lennard-Jones, then ramps
/// Lennard-Jones through `lennard_jones` with the ligand discharged.
///
/// Both grids start at 1 and end at 0; the shared discharged state is emitted once.
fn discharge_then_decouple(electrostatics: &[f64], lennard_jones: &[f64]) -> Vec<AlchemicalState> {
    let discharge = electrostatics
        .iter()
        .map(|&e| AlchemicalState::preset(e, 1.0));
    let decouple = lennard_jones
        .iter()
        .skip(1)
        .map(|&lj| AlchemicalState::preset(0.0, lj));
    discharge.chain(decouple).collect()
}

/// A serializable list of states, as written next to the built systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Protocol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<ProtocolPreset>,
    pub states: Vec<AlchemicalState>,
}

impl Protocol {
    pub fn from_preset(preset: ProtocolPreset) -> Self {
        Self {
            preset: Some(preset),
            states: preset.states(),
        }
    }

    pub fn custom(states: Vec<AlchemicalState>) -> Result<Self, ProtocolError> {
        check_ordering(&states)?;
        Ok(Self {
            preset: None,
            states,
        })
    }
}

/// Checks that a schedule starts fully interacting, discharges before it removes
/// Lennard-Jones, and never turns either factor back up.
pub fn check_ordering(states: &[AlchemicalState]) -> Result<(), ProtocolError> {
    let first = states.first().ok_or(ProtocolError::Empty)?;
    let reference = AlchemicalState::fully_interacting();
    if first.relative_restraints() != reference.relative_restraints()
        || first.ligand_electrostatics() != reference.ligand_electrostatics()
        || first.ligand_lennard_jones() != reference.ligand_lennard_jones()
        || first.ligand_torsions() != reference.ligand_torsions()
    {
        return Err(ProtocolError::NotFullyInteractingStart(*first));
    }

    for (index, pair) in states.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let index = index + 1;
        for (factor, before, after) in [
            (
                "electrostatics",
                previous.ligand_electrostatics(),
                current.ligand_electrostatics(),
            ),
            (
                "lennard-jones",
                previous.ligand_lennard_jones(),
                current.ligand_lennard_jones(),
            ),
        ] {
            if after > before {
                return Err(ProtocolError::NonMonotonic {
                    index,
                    factor,
                    previous: before,
                    current: after,
                });
            }
        }
        if current.ligand_lennard_jones() < 1.0 && current.ligand_electrostatics() > 0.0 {
            return Err(ProtocolError::LennardJonesBeforeDischarge { index });
        }
    }
    Ok(())
}
