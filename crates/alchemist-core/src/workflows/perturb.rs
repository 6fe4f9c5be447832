use crate::core::models::system::System;
use crate::engine::config::FactoryConfig;
use crate::engine::error::AlchemyError;
use crate::engine::factory::AlchemicalFactory;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::AlchemicalState;
use tracing::{info, instrument, warn};

/// Intermediates of one protocol, index-aligned with their states.
#[derive(Debug, Clone)]
pub struct PerturbationResult {
    pub states: Vec<AlchemicalState>,
    pub systems: Vec<System>,
}

impl PerturbationResult {
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AlchemicalState, &System)> {
        self.states.iter().zip(&self.systems)
    }
}

#[instrument(skip_all, name = "perturbation_workflow")]
pub fn run(
    reference: &System,
    ligand_atoms: &[usize],
    states: &[AlchemicalState],
    config: FactoryConfig,
    reporter: &ProgressReporter,
) -> Result<PerturbationResult, AlchemyError> {
    // === Phase 1: Capture and validate the reference ===
    let factory = reporter.phase("Preparation", || {
        info!(
            num_particles = reference.num_particles(),
            num_ligand_atoms = ligand_atoms.len(),
            "Capturing reference system."
        );
        AlchemicalFactory::with_config(reference, ligand_atoms, config)
    })?;

    if states.is_empty() {
        warn!("Protocol contains no states. Nothing to build.");
        return Ok(PerturbationResult {
            states: Vec::new(),
            systems: Vec::new(),
        });
    }

    // === Phase 2: Build every intermediate ===
    let systems = reporter.phase("Building Alchemical Intermediates", || {
        factory.build_all(states, reporter)
    })?;

    reporter.report(Progress::Message(format!(
        "Built {} alchemical intermediates.",
        systems.len()
    )));
    info!("Workflow complete. Returning {} system(s).", systems.len());

    Ok(PerturbationResult {
        states: states.to_vec(),
        systems,
    })
}
