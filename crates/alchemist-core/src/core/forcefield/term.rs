use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Potential energy broken down by interaction class, in kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    /// Bonds and angles.
    pub bonded: f64,
    pub torsion: f64,
    pub electrostatic: f64,
    pub lennard_jones: f64,
    /// Implicit-solvent polar and nonpolar terms.
    pub solvation: f64,
}

impl EnergyTerm {
    #[inline]
    pub fn total(&self) -> f64 {
        self.bonded
            + self.torsion
            + self.electrostatic
            + self.lennard_jones
            + self.solvation
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bonded: self.bonded + rhs.bonded,
            torsion: self.torsion + rhs.torsion,
            electrostatic: self.electrostatic + rhs.electrostatic,
            lennard_jones: self.lennard_jones + rhs.lennard_jones,
            solvation: self.solvation + rhs.solvation,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for EnergyTerm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scale: f64) -> EnergyTerm {
        EnergyTerm {
            bonded: 1.0 * scale,
            torsion: 2.0 * scale,
            electrostatic: -3.0 * scale,
            lennard_jones: 4.0 * scale,
            solvation: -6.0 * scale,
        }
    }

    #[test]
    fn total_returns_sum_of_all_terms() {
        assert_eq!(sample(1.0).total(), -2.0);
    }

    #[test]
    fn add_sums_each_field_correctly() {
        assert_eq!(sample(1.0) + sample(2.0), sample(3.0));
    }

    #[test]
    fn add_assign_with_default_does_not_change_values() {
        let mut term = sample(1.0);
        term += EnergyTerm::default();
        assert_eq!(term, sample(1.0));
    }

    #[test]
    fn sum_of_iterator_accumulates_all_terms() {
        let total: EnergyTerm = [sample(1.0), sample(1.0), sample(2.0)].into_iter().sum();
        assert_eq!(total, sample(4.0));
    }

    #[test]
    fn default_initializes_all_fields_to_zero() {
        assert_eq!(EnergyTerm::default().total(), 0.0);
    }
}
