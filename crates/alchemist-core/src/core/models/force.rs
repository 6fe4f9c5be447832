use super::custom::{CustomBondForce, CustomExternalForce};
use super::gbsa::GbsaObcForce;
use super::nonbonded::NonbondedForce;
use super::softcore::{SoftcoreExceptionForce, SoftcoreGbsaObcForce, SoftcoreLennardJonesForce};
use serde::{Deserialize, Serialize};

/// One force term of a [`System`](super::system::System).
///
/// The set of kinds is closed. Code that rewrites systems matches on every variant,
/// so adding a kind forces each consumer to decide how to treat it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Force {
    HarmonicBond(HarmonicBondForce),
    HarmonicAngle(HarmonicAngleForce),
    PeriodicTorsion(PeriodicTorsionForce),
    Nonbonded(NonbondedForce),
    GbsaObc(GbsaObcForce),
    CustomExternal(CustomExternalForce),
    CustomBond(CustomBondForce),
    CenterOfMassMotionRemover(CenterOfMassMotionRemover),
    Opaque(OpaqueForce),
    SoftcoreLennardJones(SoftcoreLennardJonesForce),
    SoftcoreLennardJonesExceptions(SoftcoreExceptionForce),
    SoftcoreGbsaObc(SoftcoreGbsaObcForce),
}

impl Force {
    /// Human-readable kind name, used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Force::HarmonicBond(_) => "HarmonicBondForce",
            Force::HarmonicAngle(_) => "HarmonicAngleForce",
            Force::PeriodicTorsion(_) => "PeriodicTorsionForce",
            Force::Nonbonded(_) => "NonbondedForce",
            Force::GbsaObc(_) => "GBSAOBCForce",
            Force::CustomExternal(_) => "CustomExternalForce",
            Force::CustomBond(_) => "CustomBondForce",
            Force::CenterOfMassMotionRemover(_) => "CMMotionRemover",
            Force::Opaque(force) => &force.name,
            Force::SoftcoreLennardJones(_) => "SoftcoreLennardJonesForce",
            Force::SoftcoreLennardJonesExceptions(_) => "SoftcoreLennardJonesExceptionForce",
            Force::SoftcoreGbsaObc(_) => "SoftcoreGBSAOBCForce",
        }
    }

    /// Number of per-particle entries for forces that must cover every particle.
    pub fn num_particle_entries(&self) -> Option<usize> {
        match self {
            Force::Nonbonded(f) => Some(f.particles.len()),
            Force::GbsaObc(f) => Some(f.particles.len()),
            Force::SoftcoreLennardJones(f) => Some(f.particles.len()),
            Force::SoftcoreGbsaObc(f) => Some(f.particles.len()),
            _ => None,
        }
    }

    /// Every particle index referenced by a bonded entry, exception or exclusion.
    pub fn referenced_particles(&self) -> Vec<usize> {
        match self {
            Force::HarmonicBond(f) => f.bonds.iter().flat_map(|b| [b.i, b.j]).collect(),
            Force::HarmonicAngle(f) => f.angles.iter().flat_map(|a| [a.i, a.j, a.k]).collect(),
            Force::PeriodicTorsion(f) => f.torsions.iter().flat_map(|t| t.particles).collect(),
            Force::Nonbonded(f) => f.exceptions.iter().flat_map(|e| [e.i, e.j]).collect(),
            Force::CustomExternal(f) => f.particles.iter().map(|p| p.index).collect(),
            Force::CustomBond(f) => f.bonds.iter().flat_map(|b| [b.i, b.j]).collect(),
            Force::SoftcoreLennardJones(f) => {
                f.exclusions.iter().flat_map(|&(i, j)| [i, j]).collect()
            }
            Force::SoftcoreLennardJonesExceptions(f) => {
                f.bonds.iter().flat_map(|b| [b.i, b.j]).collect()
            }
            Force::GbsaObc(_)
            | Force::SoftcoreGbsaObc(_)
            | Force::CenterOfMassMotionRemover(_)
            | Force::Opaque(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicBond {
    pub i: usize,
    pub j: usize,
    /// Equilibrium length in nm.
    pub length: f64,
    /// Force constant in kJ/mol/nm^2.
    pub k: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarmonicBondForce {
    pub bonds: Vec<HarmonicBond>,
}

impl HarmonicBondForce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bond(&mut self, i: usize, j: usize, length: f64, k: f64) -> usize {
        self.bonds.push(HarmonicBond { i, j, length, k });
        self.bonds.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicAngle {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    /// Equilibrium angle in radians.
    pub angle: f64,
    /// Force constant in kJ/mol/rad^2.
    pub force_constant: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarmonicAngleForce {
    pub angles: Vec<HarmonicAngle>,
}

impl HarmonicAngleForce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_angle(&mut self, i: usize, j: usize, k: usize, angle: f64, force_constant: f64) {
        self.angles.push(HarmonicAngle {
            i,
            j,
            k,
            angle,
            force_constant,
        });
    }
}

/// A periodic torsion `k * (1 + cos(periodicity * theta - phase))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torsion {
    pub particles: [usize; 4],
    pub periodicity: u32,
    /// Phase in radians.
    pub phase: f64,
    /// Barrier height in kJ/mol.
    pub k: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodicTorsionForce {
    pub torsions: Vec<Torsion>,
}

impl PeriodicTorsionForce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_torsion(
        &mut self,
        particles: [usize; 4],
        periodicity: u32,
        phase: f64,
        k: f64,
    ) -> usize {
        self.torsions.push(Torsion {
            particles,
            periodicity,
            phase,
            k,
        });
        self.torsions.len() - 1
    }
}

/// Removes center-of-mass motion every `frequency` steps. Contributes no energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMassMotionRemover {
    pub frequency: u32,
}

impl Default for CenterOfMassMotionRemover {
    fn default() -> Self {
        Self { frequency: 1 }
    }
}

/// A force this model does not interpret, identified by its engine-side name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueForce {
    pub name: String,
    #[serde(default)]
    pub settings: toml::Table,
}

impl OpaqueForce {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: toml::Table::new(),
        }
    }
}

macro_rules! impl_into_force {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Force {
                fn from(force: $ty) -> Self {
                    Force::$variant(force)
                }
            }
        )*
    };
}

impl_into_force! {
    HarmonicBondForce => HarmonicBond,
    HarmonicAngleForce => HarmonicAngle,
    PeriodicTorsionForce => PeriodicTorsion,
    NonbondedForce => Nonbonded,
    GbsaObcForce => GbsaObc,
    CustomExternalForce => CustomExternal,
    CustomBondForce => CustomBond,
    CenterOfMassMotionRemover => CenterOfMassMotionRemover,
    OpaqueForce => Opaque,
    SoftcoreLennardJonesForce => SoftcoreLennardJones,
    SoftcoreExceptionForce => SoftcoreLennardJonesExceptions,
    SoftcoreGbsaObcForce => SoftcoreGbsaObc,
}
