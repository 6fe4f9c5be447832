use super::potentials;
use super::term::EnergyTerm;
use crate::core::models::force::{
    Force, HarmonicAngleForce, HarmonicBondForce, PeriodicTorsionForce,
};
use crate::core::models::gbsa::{GbMethod, GbsaObcForce};
use crate::core::models::nonbonded::NonbondedForce;
use crate::core::models::softcore::{
    SasaModel, SoftcoreExceptionForce, SoftcoreGbsaObcForce, SoftcoreLennardJonesForce,
};
use crate::core::models::system::System;
use crate::core::utils::geometry;
use itertools::Itertools;
use nalgebra::Point3;
use std::collections::HashSet;
use std::f64::consts::PI;
use thiserror::Error;

/// Radius offset of the reference OBC model, in nm.
const OBC_OFFSET: f64 = 0.009;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnergyError {
    #[error("expected one coordinate per particle ({expected}), got {found}")]
    CoordinateCountMismatch { expected: usize, found: usize },

    #[error("force {force_index} ({kind}) cannot be evaluated: {reason}")]
    Unsupported {
        force_index: usize,
        kind: String,
        reason: &'static str,
    },
}

/// Reference evaluator for the potential energy of a [`System`] at fixed coordinates.
///
/// This is a plain double-precision implementation used to check that alchemical
/// systems reproduce their reference. It evaluates every pair directly and rejects
/// force kinds or methods it cannot reproduce exactly.
pub struct EnergyCalculator<'a> {
    system: &'a System,
    positions: &'a [Point3<f64>],
}

/// Per-particle inputs to an OBC evaluation.
struct ObcParticle {
    charge: f64,
    radius: f64,
    scale: f64,
    lambda: f64,
}

struct ObcSettings {
    offset: f64,
    solute_dielectric: f64,
    solvent_dielectric: f64,
    surface_area_factor: Option<f64>,
}

impl<'a> EnergyCalculator<'a> {
    pub fn new(system: &'a System, positions: &'a [Point3<f64>]) -> Result<Self, EnergyError> {
        if positions.len() != system.num_particles() {
            return Err(EnergyError::CoordinateCountMismatch {
                expected: system.num_particles(),
                found: positions.len(),
            });
        }
        Ok(Self { system, positions })
    }

    /// Total potential energy summed over every force term.
    pub fn potential_energy(&self) -> Result<EnergyTerm, EnergyError> {
        (0..self.system.forces.len())
            .map(|index| self.force_energy(index))
            .sum()
    }

    /// Energy contributed by the force at `force_index` alone.
    ///
    /// # Panics
    ///
    /// Panics if `force_index` is out of range.
    pub fn force_energy(&self, force_index: usize) -> Result<EnergyTerm, EnergyError> {
        let force = &self.system.forces[force_index];
        let unsupported = |reason| EnergyError::Unsupported {
            force_index,
            kind: force.kind_name().to_string(),
            reason,
        };

        match force {
            Force::HarmonicBond(f) => Ok(self.harmonic_bonds(f)),
            Force::HarmonicAngle(f) => Ok(self.harmonic_angles(f)),
            Force::PeriodicTorsion(f) => Ok(self.torsions(f)),
            Force::Nonbonded(f) => {
                if f.method.is_reciprocal_space() {
                    return Err(unsupported("reciprocal-space electrostatics"));
                }
                if f.use_dispersion_correction && f.method.is_periodic() {
                    return Err(unsupported("long-range dispersion correction"));
                }
                Ok(self.nonbonded(f))
            }
            Force::GbsaObc(f) => {
                if f.method != GbMethod::NoCutoff {
                    return Err(unsupported("generalized Born with a cutoff"));
                }
                Ok(self.gbsa_obc(f))
            }
            Force::SoftcoreGbsaObc(f) => {
                if f.method != GbMethod::NoCutoff {
                    return Err(unsupported("generalized Born with a cutoff"));
                }
                Ok(self.softcore_gbsa_obc(f))
            }
            Force::SoftcoreLennardJones(f) => Ok(self.softcore_lennard_jones(f)),
            Force::SoftcoreLennardJonesExceptions(f) => Ok(self.softcore_exceptions(f)),
            Force::CenterOfMassMotionRemover(_) => Ok(EnergyTerm::default()),
            Force::CustomExternal(_) | Force::CustomBond(_) => {
                Err(unsupported("expression-defined energy"))
            }
            Force::Opaque(_) => Err(unsupported("force kind is opaque to this model")),
        }
    }

    fn distance(&self, i: usize, j: usize, periodic: bool) -> f64 {
        let (p1, p2) = (&self.positions[i], &self.positions[j]);
        if periodic {
            geometry::minimum_image(p1, p2, &self.system.box_vectors).norm()
        } else {
            (p2 - p1).norm()
        }
    }

    fn harmonic_bonds(&self, force: &HarmonicBondForce) -> EnergyTerm {
        let bonded = force
            .bonds
            .iter()
            .map(|b| potentials::harmonic(self.distance(b.i, b.j, false), b.length, b.k))
            .sum();
        EnergyTerm {
            bonded,
            ..EnergyTerm::default()
        }
    }

    fn harmonic_angles(&self, force: &HarmonicAngleForce) -> EnergyTerm {
        let bonded = force
            .angles
            .iter()
            .map(|a| {
                let theta = geometry::bond_angle(
                    &self.positions[a.i],
                    &self.positions[a.j],
                    &self.positions[a.k],
                );
                potentials::harmonic(theta, a.angle, a.force_constant)
            })
            .sum();
        EnergyTerm {
            bonded,
            ..EnergyTerm::default()
        }
    }

    fn torsions(&self, force: &PeriodicTorsionForce) -> EnergyTerm {
        let torsion = force
            .torsions
            .iter()
            .map(|t| {
                let [p1, p2, p3, p4] = t.particles.map(|index| &self.positions[index]);
                let theta = geometry::dihedral_angle(p1, p2, p3, p4);
                potentials::periodic_torsion(theta, t.periodicity, t.phase, t.k)
            })
            .sum();
        EnergyTerm {
            torsion,
            ..EnergyTerm::default()
        }
    }

    fn nonbonded(&self, force: &NonbondedForce) -> EnergyTerm {
        let periodic = force.method.is_periodic();
        let cutoff = force.method.uses_cutoff().then_some(force.cutoff);
        let excluded: HashSet<(usize, usize)> = force
            .exceptions
            .iter()
            .map(|e| ordered_pair(e.i, e.j))
            .collect();

        let mut energy = EnergyTerm::default();
        for (i, j) in (0..force.particles.len()).tuple_combinations() {
            if excluded.contains(&(i, j)) {
                continue;
            }
            let dist = self.distance(i, j, periodic);
            if cutoff.is_some_and(|c| dist > c) {
                continue;
            }
            let (p1, p2) = (&force.particles[i], &force.particles[j]);
            let charge_product = p1.charge * p2.charge;
            if charge_product != 0.0 {
                energy.electrostatic += match cutoff {
                    Some(c) => potentials::reaction_field_coulomb(
                        dist,
                        charge_product,
                        c,
                        force.reaction_field_dielectric,
                    ),
                    None => potentials::coulomb(dist, charge_product),
                };
            }
            energy.lennard_jones += potentials::lennard_jones(
                dist,
                0.5 * (p1.sigma + p2.sigma),
                (p1.epsilon * p2.epsilon).sqrt(),
            );
        }

        for exception in &force.exceptions {
            let dist = self.distance(exception.i, exception.j, false);
            if exception.charge_product != 0.0 {
                energy.electrostatic += potentials::coulomb(dist, exception.charge_product);
            }
            energy.lennard_jones +=
                potentials::lennard_jones(dist, exception.sigma, exception.epsilon);
        }
        energy
    }

    fn softcore_lennard_jones(&self, force: &SoftcoreLennardJonesForce) -> EnergyTerm {
        let periodic = force.method.is_periodic();
        let cutoff = force.method.uses_cutoff().then_some(force.cutoff);
        let excluded: HashSet<(usize, usize)> = force
            .exclusions
            .iter()
            .map(|&(i, j)| ordered_pair(i, j))
            .collect();

        let mut lennard_jones = 0.0;
        for (i, j) in (0..force.particles.len()).tuple_combinations() {
            if excluded.contains(&(i, j)) {
                continue;
            }
            let (p1, p2) = (&force.particles[i], &force.particles[j]);
            let epsilon = (p1.epsilon * p2.epsilon).sqrt();
            if epsilon == 0.0 {
                continue;
            }
            let dist = self.distance(i, j, periodic);
            if cutoff.is_some_and(|c| dist > c) {
                continue;
            }
            lennard_jones += potentials::softcore_lennard_jones(
                dist,
                0.5 * (p1.sigma + p2.sigma),
                epsilon,
                force.pair_lambda(i, j),
                &force.parameters,
            );
        }
        EnergyTerm {
            lennard_jones,
            ..EnergyTerm::default()
        }
    }

    fn softcore_exceptions(&self, force: &SoftcoreExceptionForce) -> EnergyTerm {
        let lennard_jones = force
            .bonds
            .iter()
            .filter(|b| b.epsilon != 0.0)
            .map(|b| {
                potentials::softcore_lennard_jones(
                    self.distance(b.i, b.j, false),
                    b.sigma,
                    b.epsilon,
                    force.lambda,
                    &force.parameters,
                )
            })
            .sum();
        EnergyTerm {
            lennard_jones,
            ..EnergyTerm::default()
        }
    }

    fn gbsa_obc(&self, force: &GbsaObcForce) -> EnergyTerm {
        let particles: Vec<ObcParticle> = force
            .particles
            .iter()
            .map(|p| ObcParticle {
                charge: p.charge,
                radius: p.radius,
                scale: p.scaling_factor,
                lambda: 1.0,
            })
            .collect();
        let settings = ObcSettings {
            offset: OBC_OFFSET,
            solute_dielectric: force.solute_dielectric,
            solvent_dielectric: force.solvent_dielectric,
            surface_area_factor: Some(4.0 * PI * force.surface_area_energy),
        };
        self.obc(&particles, &settings)
    }

    fn softcore_gbsa_obc(&self, force: &SoftcoreGbsaObcForce) -> EnergyTerm {
        let particles: Vec<ObcParticle> = force
            .particles
            .iter()
            .map(|p| ObcParticle {
                charge: p.charge,
                radius: p.radius,
                scale: p.scale,
                lambda: p.lambda,
            })
            .collect();
        let settings = ObcSettings {
            offset: force.offset,
            solute_dielectric: force.solute_dielectric,
            solvent_dielectric: force.solvent_dielectric,
            surface_area_factor: match force.sasa_model {
                SasaModel::Ace => Some(force.surface_area_factor),
                SasaModel::None => None,
            },
        };
        self.obc(&particles, &settings)
    }

    fn obc(&self, particles: &[ObcParticle], settings: &ObcSettings) -> EnergyTerm {
        let n = particles.len();
        let offset_radius = |p: &ObcParticle| p.radius - settings.offset;

        let born_radii: Vec<f64> = (0..n)
            .map(|i| {
                let descreening: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| {
                        let pj = &particles[j];
                        particles[j].lambda
                            * potentials::obc_descreening(
                                self.distance(i, j, false),
                                offset_radius(&particles[i]),
                                pj.scale * offset_radius(pj),
                            )
                    })
                    .sum();
                potentials::obc_born_radius(descreening, particles[i].radius, settings.offset)
            })
            .collect();

        let mut solvation = 0.0;
        for (p, &born) in particles.iter().zip(&born_radii) {
            solvation += potentials::gb_self_energy(
                p.charge,
                born,
                settings.solute_dielectric,
                settings.solvent_dielectric,
            );
            if let Some(factor) = settings.surface_area_factor {
                solvation += p.lambda * potentials::ace_surface_energy(p.radius, born, factor);
            }
        }
        for (i, j) in (0..n).tuple_combinations() {
            solvation += potentials::gb_pair_energy(
                self.distance(i, j, false),
                (particles[i].charge, particles[j].charge),
                (born_radii[i], born_radii[j]),
                settings.solute_dielectric,
                settings.solvent_dielectric,
            );
        }
        EnergyTerm {
            solvation,
            ..EnergyTerm::default()
        }
    }
}

#[inline]
fn ordered_pair(i: usize, j: usize) -> (usize, usize) {
    if i < j { (i, j) } else { (j, i) }
}
