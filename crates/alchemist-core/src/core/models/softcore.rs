//! Softcore replacement terms synthesized for alchemical intermediates.
//!
//! Each force carries its typed parameters and can render the algebraic energy
//! expression an engine would compile for it. The expressions use the same
//! parameter names as the struct fields.

use super::gbsa::GbMethod;
use serde::{Deserialize, Serialize};

/// Whether ligand-internal interactions are scaled along with ligand-environment ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouplingMode {
    /// Scale every interaction touching at least one ligand particle.
    Annihilate,
    /// Scale only ligand-environment interactions; ligand-internal ones stay at full strength.
    Decouple,
}

impl CouplingMode {
    pub fn from_annihilate(annihilate: bool) -> Self {
        if annihilate {
            CouplingMode::Annihilate
        } else {
            CouplingMode::Decouple
        }
    }

    pub fn is_annihilate(self) -> bool {
        self == CouplingMode::Annihilate
    }
}

/// Constants of the softcore Lennard-Jones form
/// `4 eps lambda^a x (x - 1)`, `x = 1 / (alpha (1 - lambda)^b + (r / sigma)^c)^(6 / c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoftcoreParameters {
    pub alpha: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for SoftcoreParameters {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            a: 1.0,
            b: 1.0,
            c: 1.0,
        }
    }
}

impl SoftcoreParameters {
    fn constant_definitions(&self) -> String {
        format!(
            "alpha = {}; a = {}; b = {}; c = {};",
            self.alpha, self.a, self.b, self.c
        )
    }
}

const SOFTCORE_CORE_EXPRESSION: &str = "4*epsilon*(lambda^a)*x*(x-1.0);\
                                        x = (1.0/(alpha*(1.0-lambda)^b + (r/sigma)^c))^(6/c);";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomNonbondedMethod {
    #[default]
    NoCutoff,
    CutoffNonPeriodic,
    CutoffPeriodic,
}

impl CustomNonbondedMethod {
    pub fn is_periodic(self) -> bool {
        self == CustomNonbondedMethod::CutoffPeriodic
    }

    pub fn uses_cutoff(self) -> bool {
        self != CustomNonbondedMethod::NoCutoff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreParticle {
    pub sigma: f64,
    pub epsilon: f64,
    pub alchemical: bool,
}

/// Softcore Lennard-Jones over all particle pairs, minus the listed exclusions.
///
/// Per-pair lambda is `lambda * (a1 (1 - a2) + a2 (1 - a1) + a1 a2)` when annihilating
/// and `lambda * (a1 (1 - a2) + a2 (1 - a1)) + a1 a2` when decoupling, where `a` is the
/// alchemical flag. Environment-environment pairs therefore always get lambda 0 and
/// contribute nothing; those are left to the original nonbonded force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreLennardJonesForce {
    pub parameters: SoftcoreParameters,
    /// Global `lennard_jones_lambda`.
    pub lambda: f64,
    pub mode: CouplingMode,
    pub method: CustomNonbondedMethod,
    pub cutoff: f64,
    pub particles: Vec<SoftcoreParticle>,
    #[serde(default)]
    pub exclusions: Vec<(usize, usize)>,
}

impl SoftcoreLennardJonesForce {
    pub fn add_particle(&mut self, sigma: f64, epsilon: f64, alchemical: bool) -> usize {
        self.particles.push(SoftcoreParticle {
            sigma,
            epsilon,
            alchemical,
        });
        self.particles.len() - 1
    }

    pub fn add_exclusion(&mut self, i: usize, j: usize) {
        self.exclusions.push((i, j));
    }

    /// Effective lambda for the pair `(i, j)`.
    pub fn pair_lambda(&self, i: usize, j: usize) -> f64 {
        let a1 = if self.particles[i].alchemical { 1.0 } else { 0.0 };
        let a2 = if self.particles[j].alchemical { 1.0 } else { 0.0 };
        let cross = a1 * (1.0 - a2) + a2 * (1.0 - a1);
        match self.mode {
            CouplingMode::Annihilate => self.lambda * (cross + a1 * a2),
            CouplingMode::Decouple => self.lambda * cross + a1 * a2,
        }
    }

    pub fn energy_expression(&self) -> String {
        let lambda_rule = match self.mode {
            CouplingMode::Annihilate => {
                "lambda = lennard_jones_lambda*(alchemical1*(1-alchemical2) + alchemical2*(1-alchemical1) + alchemical1*alchemical2);"
            }
            CouplingMode::Decouple => {
                "lambda = lennard_jones_lambda*(alchemical1*(1-alchemical2) + alchemical2*(1-alchemical1)) + alchemical1*alchemical2;"
            }
        };
        format!(
            "{SOFTCORE_CORE_EXPRESSION}\
             epsilon = sqrt(epsilon1*epsilon2);\
             sigma = 0.5*(sigma1 + sigma2);\
             {lambda_rule}\
             {}",
            self.parameters.constant_definitions()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreExceptionBond {
    pub i: usize,
    pub j: usize,
    pub sigma: f64,
    pub epsilon: f64,
}

/// Softcore Lennard-Jones for ligand-ligand exception pairs, which are excluded from
/// [`SoftcoreLennardJonesForce`] and would otherwise never soften.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreExceptionForce {
    pub parameters: SoftcoreParameters,
    pub lambda: f64,
    #[serde(default)]
    pub bonds: Vec<SoftcoreExceptionBond>,
}

impl SoftcoreExceptionForce {
    pub fn new(parameters: SoftcoreParameters, lambda: f64) -> Self {
        Self {
            parameters,
            lambda,
            bonds: Vec::new(),
        }
    }

    pub fn add_bond(&mut self, i: usize, j: usize, sigma: f64, epsilon: f64) -> usize {
        self.bonds.push(SoftcoreExceptionBond {
            i,
            j,
            sigma,
            epsilon,
        });
        self.bonds.len() - 1
    }

    pub fn energy_expression(&self) -> String {
        format!(
            "{SOFTCORE_CORE_EXPRESSION}{}lambda = lennard_jones_lambda;",
            self.parameters.constant_definitions()
        )
    }
}

/// Nonpolar surface-area model attached to the softcore GB term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SasaModel {
    #[default]
    Ace,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreGbParticle {
    /// Charge already multiplied by `lambda`.
    pub charge: f64,
    pub radius: f64,
    pub scale: f64,
    pub lambda: f64,
}

/// OBC generalized Born with a per-particle lambda.
///
/// Descreening by particle `j` is weighted by `lambda_j`, the surface term by the
/// particle's own lambda, and polar terms through the pre-scaled charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftcoreGbsaObcForce {
    pub method: GbMethod,
    pub cutoff: f64,
    pub solute_dielectric: f64,
    pub solvent_dielectric: f64,
    /// Radius offset in nm.
    pub offset: f64,
    pub sasa_model: SasaModel,
    /// `4 pi gamma`, in kJ/mol/nm^2.
    pub surface_area_factor: f64,
    pub particles: Vec<SoftcoreGbParticle>,
}

impl SoftcoreGbsaObcForce {
    pub fn descreening_expression(&self) -> String {
        "lambda2*step(r+sr2-or1)*0.5*(1/L-1/U+0.25*(r-sr2^2/r)*(1/(U^2)-1/(L^2))+0.5*log(L/U)/r);\
         U=r+sr2;\
         L=max(or1, D);\
         D=abs(r-sr2);\
         sr2 = scale2*or2;\
         or1 = radius1-offset; or2 = radius2-offset"
            .to_string()
    }

    pub fn born_radius_expression(&self) -> String {
        "1/(1/or-tanh(psi-0.8*psi^2+4.85*psi^3)/radius);psi=I*or; or=radius-offset".to_string()
    }

    /// Energy terms in evaluation order: self energy, optional surface term, pair term.
    pub fn energy_expressions(&self) -> Vec<String> {
        let mut terms = vec![
            "-0.5*138.935485*(1/soluteDielectric-1/solventDielectric)*q^2/B".to_string(),
        ];
        if self.sasa_model == SasaModel::Ace {
            terms.push(format!(
                "lambda*{}*(radius+0.14)^2*(radius/B)^6",
                self.surface_area_factor
            ));
        }
        terms.push(
            "-138.935485*(1/soluteDielectric-1/solventDielectric)*q1*q2/f;\
             f=sqrt(r^2+B1*B2*exp(-r^2/(4*B1*B2)))"
                .to_string(),
        );
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force_with(mode: CouplingMode, lambda: f64) -> SoftcoreLennardJonesForce {
        let mut force = SoftcoreLennardJonesForce {
            parameters: SoftcoreParameters::default(),
            lambda,
            mode,
            method: CustomNonbondedMethod::NoCutoff,
            cutoff: 1.0,
            particles: Vec::new(),
            exclusions: Vec::new(),
        };
        force.add_particle(0.3, 0.5, true);
        force.add_particle(0.3, 0.5, true);
        force.add_particle(0.3, 0.5, false);
        force.add_particle(0.3, 0.5, false);
        force
    }

    #[test]
    fn annihilate_scales_ligand_internal_pairs() {
        let force = force_with(CouplingMode::Annihilate, 0.25);
        assert_eq!(force.pair_lambda(0, 1), 0.25);
        assert_eq!(force.pair_lambda(0, 2), 0.25);
        assert_eq!(force.pair_lambda(2, 3), 0.0);
    }

    #[test]
    fn decouple_keeps_ligand_internal_pairs_at_full_strength() {
        let force = force_with(CouplingMode::Decouple, 0.25);
        assert_eq!(force.pair_lambda(0, 1), 1.0);
        assert_eq!(force.pair_lambda(1, 3), 0.25);
        assert_eq!(force.pair_lambda(2, 3), 0.0);
    }

    #[test]
    fn energy_expression_embeds_mode_and_constants() {
        let annihilate = force_with(CouplingMode::Annihilate, 0.5).energy_expression();
        assert!(annihilate.contains("+ alchemical1*alchemical2);"));
        assert!(annihilate.contains("alpha = 0.5;"));
        let decouple = force_with(CouplingMode::Decouple, 0.5).energy_expression();
        assert!(decouple.contains(")) + alchemical1*alchemical2;"));
    }

    #[test]
    fn exception_expression_uses_the_global_lambda() {
        let mut force = SoftcoreExceptionForce::new(SoftcoreParameters::default(), 0.3);
        force.add_bond(0, 1, 0.3, 0.5);
        let expression = force.energy_expression();
        assert!(expression.starts_with("4*epsilon*(lambda^a)*x*(x-1.0);"));
        assert!(expression.contains("alpha = 0.5; a = 1; b = 1; c = 1;"));
        assert!(expression.ends_with("lambda = lennard_jones_lambda;"));
        assert!(!expression.contains("alchemical1"));
    }

    #[test]
    fn gb_radius_expressions_weight_descreening_by_lambda() {
        let force = SoftcoreGbsaObcForce {
            method: GbMethod::NoCutoff,
            cutoff: 1.0,
            solute_dielectric: 1.0,
            solvent_dielectric: 78.3,
            offset: 0.009,
            sasa_model: SasaModel::Ace,
            surface_area_factor: 28.3919551,
            particles: Vec::new(),
        };
        let descreening = force.descreening_expression();
        assert!(descreening.starts_with("lambda2*step(r+sr2-or1)"));
        assert!(descreening.contains("or1 = radius1-offset"));
        let born = force.born_radius_expression();
        assert!(born.contains("tanh(psi-0.8*psi^2+4.85*psi^3)"));
        assert!(born.ends_with("or=radius-offset"));
    }

    #[test]
    fn gb_surface_term_is_omitted_without_ace() {
        let mut force = SoftcoreGbsaObcForce {
            method: GbMethod::NoCutoff,
            cutoff: 1.0,
            solute_dielectric: 1.0,
            solvent_dielectric: 78.3,
            offset: 0.009,
            sasa_model: SasaModel::Ace,
            surface_area_factor: 28.3919551,
            particles: Vec::new(),
        };
        assert_eq!(force.energy_expressions().len(), 3);
        force.sasa_model = SasaModel::None;
        assert_eq!(force.energy_expressions().len(), 2);
    }
}
