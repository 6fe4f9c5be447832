use crate::core::models::nonbonded::{NonbondedForce, NonbondedMethod};
use crate::core::models::softcore::{
    CouplingMode, CustomNonbondedMethod, SoftcoreExceptionForce, SoftcoreLennardJonesForce,
    SoftcoreParameters,
};
use tracing::debug;

/// Forces that take over the ligand's Lennard-Jones interactions.
#[derive(Debug)]
pub(crate) struct SoftcoreLennardJones {
    pub pairwise: SoftcoreLennardJonesForce,
    /// Ligand-internal exceptions, present only when annihilating.
    pub exceptions: Option<SoftcoreExceptionForce>,
}

/// Moves ligand Lennard-Jones out of `nonbonded` and into softcore forces.
///
/// `nonbonded` is the perturbed copy and is edited in place: ligand particle epsilons
/// are zeroed, and so are the epsilons of ligand-internal exceptions when those move
/// to the softcore exception force. Every exception becomes an exclusion of the
/// pairwise softcore force, since exceptions already carry their own parameters.
pub(crate) fn build(
    nonbonded: &mut NonbondedForce,
    ligand: &[bool],
    lambda: f64,
    mode: CouplingMode,
    parameters: SoftcoreParameters,
) -> SoftcoreLennardJones {
    let method = match nonbonded.method {
        NonbondedMethod::NoCutoff => CustomNonbondedMethod::NoCutoff,
        NonbondedMethod::CutoffNonPeriodic => CustomNonbondedMethod::CutoffNonPeriodic,
        NonbondedMethod::CutoffPeriodic | NonbondedMethod::Ewald | NonbondedMethod::Pme => {
            CustomNonbondedMethod::CutoffPeriodic
        }
    };
    if nonbonded.method.is_reciprocal_space() {
        debug!(
            method = %nonbonded.method,
            "Softcore Lennard-Jones falls back to a periodic cutoff."
        );
    }

    let mut pairwise = SoftcoreLennardJonesForce {
        parameters,
        lambda,
        mode,
        method,
        cutoff: nonbonded.cutoff,
        particles: Vec::with_capacity(nonbonded.particles.len()),
        exclusions: Vec::with_capacity(nonbonded.exceptions.len()),
    };

    for (particle, &alchemical) in nonbonded.particles.iter_mut().zip(ligand) {
        pairwise.add_particle(particle.sigma, particle.epsilon, alchemical);
        if alchemical {
            particle.epsilon = 0.0;
        }
    }

    let mut exceptions = mode
        .is_annihilate()
        .then(|| SoftcoreExceptionForce::new(parameters, lambda));

    for exception in nonbonded.exceptions.iter_mut() {
        pairwise.add_exclusion(exception.i, exception.j);
        if let Some(force) = exceptions.as_mut() {
            if ligand[exception.i] && ligand[exception.j] {
                force.add_bond(exception.i, exception.j, exception.sigma, exception.epsilon);
                exception.epsilon = 0.0;
            }
        }
    }

    debug!(
        particles = pairwise.particles.len(),
        exclusions = pairwise.exclusions.len(),
        softcore_exceptions = exceptions.as_ref().map_or(0, |f| f.bonds.len()),
        "Built softcore Lennard-Jones terms."
    );

    SoftcoreLennardJones {
        pairwise,
        exceptions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ligand_pair_in_solvent() -> (NonbondedForce, Vec<bool>) {
        let mut force = NonbondedForce::new().with_method(NonbondedMethod::Pme, 0.9);
        force.add_particle(0.2, 0.30, 0.40);
        force.add_particle(-0.2, 0.32, 0.50);
        force.add_particle(0.4, 0.31, 0.60);
        force.add_particle(-0.4, 0.33, 0.70);
        force.add_exception(0, 1, 0.0, 0.31, 0.45);
        force.add_exception(1, 2, 0.0, 0.31, 0.55);
        force.add_exception(2, 3, 0.0, 0.32, 0.65);
        (force, vec![true, true, false, false])
    }

    #[test]
    fn ligand_epsilons_move_into_the_softcore_force() {
        let (mut force, ligand) = ligand_pair_in_solvent();
        let built = build(
            &mut force,
            &ligand,
            0.5,
            CouplingMode::Decouple,
            SoftcoreParameters::default(),
        );

        assert_eq!(force.particles[0].epsilon, 0.0);
        assert_eq!(force.particles[1].epsilon, 0.0);
        assert_eq!(force.particles[2].epsilon, 0.60);
        assert_eq!(built.pairwise.particles[1].epsilon, 0.50);
        assert!(built.pairwise.particles[0].alchemical);
        assert!(!built.pairwise.particles[3].alchemical);
    }

    #[test]
    fn every_exception_becomes_an_exclusion() {
        let (mut force, ligand) = ligand_pair_in_solvent();
        let built = build(
            &mut force,
            &ligand,
            0.5,
            CouplingMode::Decouple,
            SoftcoreParameters::default(),
        );
        assert_eq!(built.pairwise.exclusions, vec![(0, 1), (1, 2), (2, 3)]);
        assert!(built.exceptions.is_none());
        assert!(force.exceptions.iter().all(|e| e.epsilon != 0.0));
    }

    #[test]
    fn annihilation_moves_only_ligand_internal_exceptions() {
        let (mut force, ligand) = ligand_pair_in_solvent();
        let built = build(
            &mut force,
            &ligand,
            0.25,
            CouplingMode::Annihilate,
            SoftcoreParameters::default(),
        );

        let exceptions = built.exceptions.unwrap();
        assert_eq!(exceptions.lambda, 0.25);
        assert_eq!(exceptions.bonds.len(), 1);
        assert_eq!((exceptions.bonds[0].i, exceptions.bonds[0].j), (0, 1));
        assert_eq!(exceptions.bonds[0].epsilon, 0.45);

        assert_eq!(force.exceptions[0].epsilon, 0.0);
        assert_eq!(force.exceptions[1].epsilon, 0.55);
        assert_eq!(force.exceptions[2].epsilon, 0.65);
    }

    #[test]
    fn reciprocal_space_methods_become_periodic_cutoff() {
        let (mut force, ligand) = ligand_pair_in_solvent();
        let built = build(
            &mut force,
            &ligand,
            0.5,
            CouplingMode::Decouple,
            SoftcoreParameters::default(),
        );
        assert_eq!(built.pairwise.method, CustomNonbondedMethod::CutoffPeriodic);
        assert_eq!(built.pairwise.cutoff, 0.9);
        assert_eq!(force.method, NonbondedMethod::Pme);
    }
}
