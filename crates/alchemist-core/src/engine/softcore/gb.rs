use crate::core::models::gbsa::GbsaObcForce;
use crate::core::models::softcore::{SoftcoreGbParticle, SoftcoreGbsaObcForce};
use crate::engine::config::GbConfig;
use std::f64::consts::PI;

/// Builds the lambda-weighted OBC replacement for `reference`.
///
/// Ligand particles get `lambda = electrostatics`, all others `lambda = 1`. Charges are
/// pre-multiplied by their particle's lambda.
pub(crate) fn build(
    reference: &GbsaObcForce,
    ligand: &[bool],
    electrostatics: f64,
    config: &GbConfig,
) -> SoftcoreGbsaObcForce {
    let particles = reference
        .particles
        .iter()
        .zip(ligand)
        .map(|(particle, &alchemical)| {
            let lambda = if alchemical { electrostatics } else { 1.0 };
            SoftcoreGbParticle {
                charge: particle.charge * lambda,
                radius: particle.radius,
                scale: particle.scaling_factor,
                lambda,
            }
        })
        .collect();

    SoftcoreGbsaObcForce {
        method: reference.method,
        cutoff: reference.cutoff,
        solute_dielectric: reference.solute_dielectric,
        solvent_dielectric: reference.solvent_dielectric,
        offset: config.offset,
        sasa_model: config.sasa_model,
        surface_area_factor: 4.0 * PI * reference.surface_area_energy,
        particles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::softcore::SasaModel;

    #[test]
    fn ligand_particles_carry_the_electrostatics_lambda() {
        let mut reference = GbsaObcForce::new();
        reference.add_particle(0.5, 0.15, 0.8);
        reference.add_particle(-0.5, 0.17, 0.85);
        let force = build(&reference, &[true, false], 0.25, &GbConfig::default());

        assert_eq!(force.particles[0].lambda, 0.25);
        assert_eq!(force.particles[0].charge, 0.125);
        assert_eq!(force.particles[1].lambda, 1.0);
        assert_eq!(force.particles[1].charge, -0.5);
        assert_eq!(force.particles[1].scale, 0.85);
        assert_eq!(force.solvent_dielectric, 78.3);
    }

    #[test]
    fn surface_model_and_offset_come_from_config() {
        let mut reference = GbsaObcForce::new();
        reference.add_particle(0.0, 0.15, 0.8);
        let config = GbConfig {
            sasa_model: SasaModel::None,
            offset: 0.01,
        };
        let force = build(&reference, &[true], 0.0, &config);
        assert_eq!(force.sasa_model, SasaModel::None);
        assert_eq!(force.offset, 0.01);
        assert!((force.surface_area_factor - 4.0 * PI * 2.25936).abs() < 1e-12);
    }
}
