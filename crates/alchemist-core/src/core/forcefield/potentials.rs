use crate::core::models::softcore::SoftcoreParameters;

/// Coulomb constant in kJ·nm/(mol·e²).
pub const ONE_4PI_EPS0: f64 = 138.935456;
/// Coulomb constant used by the generalized Born expressions.
pub const GB_ONE_4PI_EPS0: f64 = 138.935485;
/// Probe radius of the ACE surface term, in nm.
pub const ACE_PROBE_RADIUS: f64 = 0.14;

#[inline]
pub fn lennard_jones(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    if epsilon == 0.0 {
        return 0.0;
    }
    let sr6 = (sigma / dist).powi(6);
    4.0 * epsilon * (sr6 * sr6 - sr6)
}

/// Softcore Lennard-Jones. Reduces to [`lennard_jones`] at `lambda = 1` and stays
/// finite at `dist = 0` for `lambda < 1`.
#[inline]
pub fn softcore_lennard_jones(
    dist: f64,
    sigma: f64,
    epsilon: f64,
    lambda: f64,
    params: &SoftcoreParameters,
) -> f64 {
    let SoftcoreParameters { alpha, a, b, c } = *params;
    let denominator = alpha * (1.0 - lambda).powf(b) + (dist / sigma).powf(c);
    let x = (1.0 / denominator).powf(6.0 / c);
    4.0 * epsilon * lambda.powf(a) * x * (x - 1.0)
}

#[inline]
pub fn coulomb(dist: f64, charge_product: f64) -> f64 {
    ONE_4PI_EPS0 * charge_product / dist
}

/// Coulomb with a reaction-field correction beyond `cutoff`, shifted to zero at the cutoff.
#[inline]
pub fn reaction_field_coulomb(
    dist: f64,
    charge_product: f64,
    cutoff: f64,
    dielectric: f64,
) -> f64 {
    let k_rf = (dielectric - 1.0) / ((2.0 * dielectric + 1.0) * cutoff.powi(3));
    let c_rf = 3.0 * dielectric / ((2.0 * dielectric + 1.0) * cutoff);
    ONE_4PI_EPS0 * charge_product * (1.0 / dist + k_rf * dist * dist - c_rf)
}

#[inline]
pub fn harmonic(value: f64, equilibrium: f64, k: f64) -> f64 {
    let delta = value - equilibrium;
    0.5 * k * delta * delta
}

#[inline]
pub fn periodic_torsion(theta: f64, periodicity: u32, phase: f64, k: f64) -> f64 {
    k * (1.0 + (periodicity as f64 * theta - phase).cos())
}

/// OBC pairwise descreening integral of particle 2 on particle 1 (before any lambda weight).
///
/// `offset_radius1` is the offset intrinsic radius of particle 1 and
/// `scaled_radius2` the scaled offset radius of particle 2.
#[inline]
pub fn obc_descreening(dist: f64, offset_radius1: f64, scaled_radius2: f64) -> f64 {
    if dist + scaled_radius2 - offset_radius1 < 0.0 {
        return 0.0;
    }
    let upper = dist + scaled_radius2;
    let lower = offset_radius1.max((dist - scaled_radius2).abs());
    0.5 * (1.0 / lower - 1.0 / upper
        + 0.25 * (dist - scaled_radius2 * scaled_radius2 / dist)
            * (1.0 / (upper * upper) - 1.0 / (lower * lower))
        + 0.5 * (lower / upper).ln() / dist)
}

/// Effective Born radius from the accumulated descreening integral (OBC II constants).
#[inline]
pub fn obc_born_radius(descreening: f64, radius: f64, offset: f64) -> f64 {
    let offset_radius = radius - offset;
    let psi = descreening * offset_radius;
    let tanh_term = (psi - 0.8 * psi * psi + 4.85 * psi.powi(3)).tanh();
    1.0 / (1.0 / offset_radius - tanh_term / radius)
}

#[inline]
fn dielectric_prefactor(solute_dielectric: f64, solvent_dielectric: f64) -> f64 {
    1.0 / solute_dielectric - 1.0 / solvent_dielectric
}

#[inline]
pub fn gb_self_energy(
    charge: f64,
    born_radius: f64,
    solute_dielectric: f64,
    solvent_dielectric: f64,
) -> f64 {
    -0.5 * GB_ONE_4PI_EPS0 * dielectric_prefactor(solute_dielectric, solvent_dielectric) * charge
        * charge
        / born_radius
}

#[inline]
pub fn gb_pair_energy(
    dist: f64,
    charges: (f64, f64),
    born_radii: (f64, f64),
    solute_dielectric: f64,
    solvent_dielectric: f64,
) -> f64 {
    let (q1, q2) = charges;
    let (b1, b2) = born_radii;
    let b_product = b1 * b2;
    let f = (dist * dist + b_product * (-dist * dist / (4.0 * b_product)).exp()).sqrt();
    -GB_ONE_4PI_EPS0 * dielectric_prefactor(solute_dielectric, solvent_dielectric) * q1 * q2 / f
}

/// ACE nonpolar surface term. `surface_area_factor` is `4 pi gamma`.
#[inline]
pub fn ace_surface_energy(radius: f64, born_radius: f64, surface_area_factor: f64) -> f64 {
    surface_area_factor * (radius + ACE_PROBE_RADIUS).powi(2) * (radius / born_radius).powi(6)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_at_minimum_returns_negative_well_depth() {
        let sigma = 0.3;
        let r_min = 2f64.powf(1.0 / 6.0) * sigma;
        assert!(f64_approx_equal(lennard_jones(r_min, sigma, 0.5), -0.5));
    }

    #[test]
    fn lennard_jones_is_zero_at_sigma() {
        assert!(f64_approx_equal(lennard_jones(0.3, 0.3, 0.5), 0.0));
    }

    #[test]
    fn lennard_jones_diverges_at_zero_distance() {
        assert!(!lennard_jones(0.0, 0.3, 0.5).is_finite());
    }

    #[test]
    fn softcore_reduces_to_lennard_jones_at_full_coupling() {
        let params = SoftcoreParameters::default();
        for &dist in &[0.25, 0.3, 0.35, 0.5, 0.9] {
            let plain = lennard_jones(dist, 0.3, 0.5);
            let soft = softcore_lennard_jones(dist, 0.3, 0.5, 1.0, &params);
            assert!((plain - soft).abs() < 1e-9 * plain.abs().max(1.0));
        }
    }

    #[test]
    fn softcore_is_finite_at_zero_distance_below_full_coupling() {
        let params = SoftcoreParameters::default();
        for &lambda in &[0.0, 0.1, 0.5, 0.9, 0.999] {
            let energy = softcore_lennard_jones(0.0, 0.3, 0.5, lambda, &params);
            assert!(energy.is_finite(), "lambda = {lambda} gave {energy}");
        }
    }

    #[test]
    fn softcore_vanishes_at_zero_coupling() {
        let params = SoftcoreParameters::default();
        assert_eq!(softcore_lennard_jones(0.2, 0.3, 0.5, 0.0, &params), 0.0);
    }

    #[test]
    fn softcore_energy_at_contact_matches_closed_form() {
        // lambda = 0.5, r = 0: x = (1 / (0.5 * 0.5))^6 = 4^6.
        let params = SoftcoreParameters::default();
        let x = 4f64.powi(6);
        let expected = 4.0 * 0.5 * 0.5 * x * (x - 1.0);
        let energy = softcore_lennard_jones(0.0, 0.3, 0.5, 0.5, &params);
        assert!((energy - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn coulomb_sign_follows_charge_product() {
        assert!(coulomb(0.5, 1.0) > 0.0);
        assert!(coulomb(0.5, -1.0) < 0.0);
        assert!(f64_approx_equal(coulomb(1.0, 1.0), ONE_4PI_EPS0));
    }

    #[test]
    fn reaction_field_coulomb_vanishes_at_cutoff() {
        let energy = reaction_field_coulomb(1.0, 0.7, 1.0, 78.3);
        assert!(f64_approx_equal(energy, 0.0));
    }

    #[test]
    fn periodic_torsion_peaks_at_zero_phase() {
        assert!(f64_approx_equal(periodic_torsion(0.0, 3, 0.0, 2.0), 4.0));
        let trough = std::f64::consts::PI / 3.0;
        assert!(f64_approx_equal(periodic_torsion(trough, 3, 0.0, 2.0), 0.0));
    }

    #[test]
    fn harmonic_is_zero_at_equilibrium() {
        assert_eq!(harmonic(0.1, 0.1, 1000.0), 0.0);
        assert!(f64_approx_equal(harmonic(0.2, 0.1, 1000.0), 5.0));
    }

    #[test]
    fn born_radius_without_descreening_equals_offset_radius() {
        let born = obc_born_radius(0.0, 0.15, 0.009);
        assert!(f64_approx_equal(born, 0.141));
    }

    #[test]
    fn descreening_increases_born_radius() {
        let descreening = obc_descreening(0.2, 0.15 - 0.009, 0.8 * (0.15 - 0.009));
        assert!(descreening > 0.0);
        assert!(obc_born_radius(descreening, 0.15, 0.009) > 0.141);
    }

    #[test]
    fn descreening_is_zero_when_sphere_is_fully_inside() {
        assert_eq!(obc_descreening(0.01, 0.5, 0.1), 0.0);
    }

    #[test]
    fn gb_self_energy_is_negative_for_charged_particle() {
        assert!(gb_self_energy(1.0, 0.2, 1.0, 78.3) < 0.0);
        assert_eq!(gb_self_energy(0.0, 0.2, 1.0, 78.3), 0.0);
    }

    #[test]
    fn gb_pair_energy_approaches_screened_coulomb_at_long_range() {
        let dist = 50.0;
        let energy = gb_pair_energy(dist, (1.0, 1.0), (0.2, 0.2), 1.0, 78.3);
        let expected = -GB_ONE_4PI_EPS0 * (1.0 - 1.0 / 78.3) / dist;
        assert!((energy - expected).abs() < 1e-6);
    }

    #[test]
    fn ace_surface_energy_scales_with_radius_ratio() {
        let at_intrinsic = ace_surface_energy(0.15, 0.15, 28.3919551);
        let descreened = ace_surface_energy(0.15, 0.30, 28.3919551);
        assert!(f64_approx_equal(descreened * 64.0, at_intrinsic));
    }
}
