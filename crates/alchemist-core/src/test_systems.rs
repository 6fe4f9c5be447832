//! Small reference systems shared by unit tests.

use crate::core::models::force::{
    CenterOfMassMotionRemover, HarmonicAngleForce, HarmonicBondForce, PeriodicTorsionForce,
};
use crate::core::models::gbsa::GbsaObcForce;
use crate::core::models::nonbonded::{NonbondedForce, NonbondedMethod};
use crate::core::models::system::System;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

pub const CHARGED_LIGAND: [usize; 3] = [0, 1, 2];
pub const IMPLICIT_LIGAND: [usize; 2] = [0, 1];
pub const TORSION_CHAIN_LIGAND: [usize; 4] = [0, 1, 2, 3];
pub const DIMER_LIGAND: [usize; 2] = [0, 1];

fn points(coords: &[[f64; 3]]) -> Vec<Point3<f64>> {
    coords.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect()
}

/// A three-atom charged ligand among three solvent particles in a 2 nm periodic box,
/// with a 0.9 nm reaction-field cutoff. Exceptions cover the ligand's 1-2 and 1-3
/// pairs plus one ligand-solvent pair.
pub fn charged_ligand_in_solvent() -> (System, Vec<Point3<f64>>) {
    let mut system = System::new();
    for mass in [12.011, 15.999, 1.008, 39.948, 39.948, 22.99] {
        system.add_particle(mass);
    }
    system.set_box_vectors(
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        Vector3::new(0.0, 0.0, 2.0),
    );
    system.add_constraint(1, 2, 0.1487);

    let mut bonds = HarmonicBondForce::new();
    bonds.add_bond(0, 1, 0.15, 2.5e5);
    bonds.add_bond(1, 2, 0.148, 2.5e5);
    system.add_force(bonds);

    let mut angles = HarmonicAngleForce::new();
    angles.add_angle(0, 1, 2, 1.91, 400.0);
    system.add_force(angles);

    let mut nonbonded = NonbondedForce::new().with_method(NonbondedMethod::CutoffPeriodic, 0.9);
    nonbonded.add_particle(0.4, 0.32, 0.45);
    nonbonded.add_particle(-0.6, 0.30, 0.36);
    nonbonded.add_particle(0.2, 0.25, 0.12);
    nonbonded.add_particle(-0.5, 0.315, 0.63);
    nonbonded.add_particle(0.5, 0.315, 0.63);
    nonbonded.add_particle(0.0, 0.34, 0.99);
    nonbonded.add_exception(0, 1, 0.0, 0.31, 0.0);
    nonbonded.add_exception(1, 2, 0.0, 0.275, 0.0);
    nonbonded.add_exception(0, 2, 0.0667, 0.285, 0.116);
    nonbonded.add_exception(2, 3, -0.05, 0.28, 0.1);
    system.add_force(nonbonded);

    system.add_force(CenterOfMassMotionRemover::default());

    let positions = points(&[
        [0.50, 0.50, 0.50],
        [0.65, 0.50, 0.50],
        [0.70, 0.64, 0.50],
        [1.00, 0.80, 0.70],
        [0.30, 1.10, 0.40],
        [1.85, 0.55, 0.45],
    ]);
    (system, positions)
}

/// A two-atom ligand bound to a three-atom receptor in OBC implicit solvent.
pub fn implicit_solvent_complex() -> (System, Vec<Point3<f64>>) {
    let mut system = System::new();
    for mass in [12.011, 14.007, 12.011, 15.999, 32.06] {
        system.add_particle(mass);
    }

    let mut bonds = HarmonicBondForce::new();
    bonds.add_bond(0, 1, 0.14, 3.0e5);
    system.add_force(bonds);

    let charges = [0.5, -0.3, 0.4, -0.35, -0.25];
    let mut nonbonded = NonbondedForce::new();
    for (&charge, (sigma, epsilon)) in charges.iter().zip([
        (0.34, 0.36),
        (0.325, 0.71),
        (0.34, 0.36),
        (0.296, 0.88),
        (0.356, 1.05),
    ]) {
        nonbonded.add_particle(charge, sigma, epsilon);
    }
    nonbonded.add_exception(0, 1, 0.0, 0.33, 0.0);
    system.add_force(nonbonded);

    let mut gb = GbsaObcForce::new();
    for (&charge, (radius, scale)) in charges.iter().zip([
        (0.17, 0.72),
        (0.155, 0.79),
        (0.17, 0.72),
        (0.15, 0.85),
        (0.18, 0.96),
    ]) {
        gb.add_particle(charge, radius, scale);
    }
    system.add_force(gb);

    let positions = points(&[
        [0.0, 0.0, 0.0],
        [0.14, 0.0, 0.0],
        [0.45, 0.1, 0.0],
        [-0.2, 0.35, 0.1],
        [0.1, -0.3, 0.3],
    ]);
    (system, positions)
}

/// An eight-atom chain with one torsion inside the first four atoms, one spanning
/// atoms 2-5 and one over the last four atoms.
pub fn torsion_chain() -> (System, Vec<Point3<f64>>) {
    let mut system = System::new();
    for _ in 0..8 {
        system.add_particle(12.011);
    }

    let mut bonds = HarmonicBondForce::new();
    for i in 0..7 {
        bonds.add_bond(i, i + 1, 0.153, 2.2e5);
    }
    system.add_force(bonds);

    let mut torsions = PeriodicTorsionForce::new();
    torsions.add_torsion([0, 1, 2, 3], 3, 0.0, 1.2);
    torsions.add_torsion([2, 3, 4, 5], 2, PI, 2.0);
    torsions.add_torsion([4, 5, 6, 7], 1, 0.0, 0.8);
    system.add_force(torsions);

    let positions = points(&[
        [0.0, 0.0, 0.0],
        [0.15, 0.0, 0.0],
        [0.2, 0.14, 0.0],
        [0.35, 0.15, 0.05],
        [0.4, 0.28, 0.12],
        [0.55, 0.3, 0.1],
        [0.6, 0.42, 0.2],
        [0.75, 0.45, 0.18],
    ]);
    (system, positions)
}

/// Two uncharged ligand particles and one environment particle.
pub fn lennard_jones_dimer() -> (System, Vec<Point3<f64>>) {
    let mut system = System::new();
    for _ in 0..3 {
        system.add_particle(39.948);
    }
    let mut nonbonded = NonbondedForce::new();
    nonbonded.add_particle(0.0, 0.34, 0.996);
    nonbonded.add_particle(0.0, 0.34, 0.996);
    nonbonded.add_particle(0.0, 0.30, 0.5);
    system.add_force(nonbonded);

    let positions = points(&[[0.0, 0.0, 0.0], [0.38, 0.0, 0.0], [0.19, 0.45, 0.0]]);
    (system, positions)
}
