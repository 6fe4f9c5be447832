use super::config::FactoryConfig;
use super::error::AlchemyError;
use super::progress::{Progress, ProgressReporter};
use super::softcore::{gb, lennard_jones};
use super::state::AlchemicalState;
use crate::core::models::force::{Force, PeriodicTorsionForce};
use crate::core::models::nonbonded::NonbondedForce;
use crate::core::models::system::System;
use std::time::Instant;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds alchemically perturbed copies of a reference system.
///
/// The reference and the ligand selection are captured once, by value, and never
/// change afterwards. Every call to [`build`](Self::build) returns a new, independently
/// owned [`System`], so a factory can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct AlchemicalFactory {
    reference: System,
    ligand_atoms: Vec<usize>,
    ligand_mask: Vec<bool>,
    config: FactoryConfig,
}

impl AlchemicalFactory {
    pub fn new(reference: &System, ligand_atoms: &[usize]) -> Result<Self, AlchemyError> {
        Self::with_config(reference, ligand_atoms, FactoryConfig::default())
    }

    /// Captures `reference` and `ligand_atoms` after validating both.
    ///
    /// # Errors
    ///
    /// - [`AlchemyError::Config`] if `config` is invalid.
    /// - [`AlchemyError::InvalidSystem`] if the reference is internally inconsistent.
    /// - [`AlchemyError::LigandIndexOutOfRange`] for a ligand index outside the system.
    /// - [`AlchemyError::UnhandledForce`] if a force term has no alchemical treatment.
    #[instrument(skip_all, name = "alchemical_factory", fields(num_particles = reference.num_particles()))]
    pub fn with_config(
        reference: &System,
        ligand_atoms: &[usize],
        config: FactoryConfig,
    ) -> Result<Self, AlchemyError> {
        config.validate()?;
        reference.validate()?;

        let num_particles = reference.num_particles();
        let mut ligand_mask = vec![false; num_particles];
        for &index in ligand_atoms {
            let slot = ligand_mask
                .get_mut(index)
                .ok_or(AlchemyError::LigandIndexOutOfRange {
                    index,
                    num_particles,
                })?;
            *slot = true;
        }
        let ligand_atoms: Vec<usize> = (0..num_particles).filter(|&i| ligand_mask[i]).collect();

        let factory = Self {
            reference: reference.clone(),
            ligand_atoms,
            ligand_mask,
            config,
        };
        for (index, force) in factory.reference.forces.iter().enumerate() {
            factory.check_handled(index, force)?;
        }
        factory.log_boundary_exceptions();

        info!(
            num_ligand_atoms = factory.ligand_atoms.len(),
            num_forces = factory.reference.forces.len(),
            "Captured reference system."
        );
        Ok(factory)
    }

    pub fn reference_system(&self) -> &System {
        &self.reference
    }

    /// Ligand particle indices, sorted and without duplicates.
    pub fn ligand_atoms(&self) -> &[usize] {
        &self.ligand_atoms
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    #[inline]
    fn is_ligand(&self, index: usize) -> bool {
        self.ligand_mask.get(index).copied().unwrap_or(false)
    }

    /// Whether a valence term over `atoms` spans the ligand/environment boundary.
    pub fn is_restraint(&self, atoms: &[usize]) -> bool {
        let ligand = atoms.iter().filter(|&&i| self.is_ligand(i)).count();
        ligand > 0 && ligand < atoms.len()
    }

    /// Builds the perturbed system for one state.
    #[instrument(skip_all, fields(state = %state))]
    pub fn build(&self, state: &AlchemicalState) -> Result<System, AlchemyError> {
        let start = Instant::now();

        let mut system = System {
            masses: self.reference.masses.clone(),
            constraints: self.reference.constraints.clone(),
            box_vectors: self.reference.box_vectors,
            forces: Vec::with_capacity(self.reference.forces.len() + 2),
        };

        for (index, force) in self.reference.forces.iter().enumerate() {
            self.perturb_force(index, force, state, &mut system.forces)?;
        }

        debug!(
            num_forces = system.forces.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Built alchemical intermediate."
        );
        Ok(system)
    }

    /// Builds one system per state, in order. Stops at the first failure.
    #[instrument(skip_all, name = "build_protocol", fields(num_states = states.len()))]
    pub fn build_all(
        &self,
        states: &[AlchemicalState],
        reporter: &ProgressReporter,
    ) -> Result<Vec<System>, AlchemyError> {
        info!("Building {} alchemical intermediates.", states.len());
        let start = Instant::now();
        reporter.report(Progress::TaskStart {
            total_steps: states.len() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = states.iter();

        #[cfg(feature = "parallel")]
        let iterator = states.par_iter();

        let results: Vec<Result<System, AlchemyError>> = iterator
            .map(|state| {
                let result = self.build(state);
                reporter.report(Progress::TaskIncrement);
                result
            })
            .collect();

        reporter.report(Progress::TaskFinish);
        let systems = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        info!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Built {} systems.",
            systems.len()
        );
        Ok(systems)
    }

    fn check_handled(&self, index: usize, force: &Force) -> Result<(), AlchemyError> {
        let unhandled = || AlchemyError::UnhandledForce {
            index,
            kind: force.kind_name().to_string(),
        };
        match force {
            Force::Opaque(opaque) if self.config.passes_through(&opaque.name) => Ok(()),
            Force::Opaque(_)
            | Force::SoftcoreLennardJones(_)
            | Force::SoftcoreLennardJonesExceptions(_)
            | Force::SoftcoreGbsaObc(_) => Err(unhandled()),
            Force::HarmonicBond(_)
            | Force::HarmonicAngle(_)
            | Force::PeriodicTorsion(_)
            | Force::Nonbonded(_)
            | Force::GbsaObc(_)
            | Force::CustomExternal(_)
            | Force::CustomBond(_)
            | Force::CenterOfMassMotionRemover(_) => Ok(()),
        }
    }

    fn perturb_force(
        &self,
        index: usize,
        force: &Force,
        state: &AlchemicalState,
        out: &mut Vec<Force>,
    ) -> Result<(), AlchemyError> {
        match force {
            Force::PeriodicTorsion(torsions) => {
                out.push(self.perturb_torsions(torsions, state).into());
            }
            Force::Nonbonded(nonbonded) => self.perturb_nonbonded(nonbonded, state, out),
            Force::GbsaObc(reference) if state.ligand_electrostatics() != 1.0 => {
                out.push(
                    gb::build(
                        reference,
                        &self.ligand_mask,
                        state.ligand_electrostatics(),
                        &self.config.gb,
                    )
                    .into(),
                );
            }
            Force::GbsaObc(_) => out.push(force.clone()),
            // Restraints and biasing potentials are outside ligand decoupling.
            Force::CustomExternal(_) | Force::CustomBond(_) => out.push(force.clone()),
            Force::HarmonicBond(_)
            | Force::HarmonicAngle(_)
            | Force::CenterOfMassMotionRemover(_) => out.push(force.clone()),
            Force::Opaque(_)
            | Force::SoftcoreLennardJones(_)
            | Force::SoftcoreLennardJonesExceptions(_)
            | Force::SoftcoreGbsaObc(_) => {
                self.check_handled(index, force)?;
                out.push(force.clone());
            }
        }
        Ok(())
    }

    fn perturb_torsions(
        &self,
        reference: &PeriodicTorsionForce,
        state: &AlchemicalState,
    ) -> PeriodicTorsionForce {
        let mut torsions = reference.clone();
        let factor = state.ligand_torsions();
        if factor != 1.0 {
            for torsion in &mut torsions.torsions {
                if torsion.particles.iter().all(|&i| self.is_ligand(i)) {
                    torsion.k *= factor;
                }
            }
        }
        torsions
    }

    fn perturb_nonbonded(
        &self,
        reference: &NonbondedForce,
        state: &AlchemicalState,
        out: &mut Vec<Force>,
    ) {
        let mut nonbonded = reference.clone();

        let electrostatics = state.ligand_electrostatics();
        if electrostatics != 1.0 {
            for &i in &self.ligand_atoms {
                nonbonded.particles[i].charge *= electrostatics;
            }
            // Exceptions with a single ligand atom keep their reference charge product.
            if state.annihilate_electrostatics() {
                for exception in &mut nonbonded.exceptions {
                    if self.is_ligand(exception.i) && self.is_ligand(exception.j) {
                        exception.charge_product *= electrostatics * electrostatics;
                    }
                }
            }
        }

        let lambda = state.ligand_lennard_jones();
        if lambda == 1.0 {
            out.push(nonbonded.into());
            return;
        }

        let softcore = lennard_jones::build(
            &mut nonbonded,
            &self.ligand_mask,
            lambda,
            state.lennard_jones_mode(),
            self.config.softcore,
        );
        out.push(nonbonded.into());
        out.push(softcore.pairwise.into());
        if let Some(exceptions) = softcore.exceptions {
            out.push(exceptions.into());
        }
    }

    fn log_boundary_exceptions(&self) {
        for force in &self.reference.forces {
            if let Force::Nonbonded(nonbonded) = force {
                let boundary = nonbonded
                    .exceptions
                    .iter()
                    .filter(|e| self.is_ligand(e.i) != self.is_ligand(e.j))
                    .filter(|e| e.charge_product != 0.0)
                    .count();
                if boundary > 0 {
                    debug!(
                        boundary,
                        "Charged exceptions across the ligand boundary keep their reference charge product."
                    );
                }
            }
        }
    }
}
