use nalgebra::{Point3, Vector3};

/// Displacement `p2 - p1`, wrapped to the nearest periodic image.
///
/// Box vectors must be in reduced form (`a` along x, `b` in the xy plane), which is
/// the convention for triclinic simulation cells.
pub fn minimum_image(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    box_vectors: &[Vector3<f64>; 3],
) -> Vector3<f64> {
    let [a, b, c] = box_vectors;
    let mut delta = p2 - p1;
    delta -= c * (delta.z / c.z).round();
    delta -= b * (delta.y / b.y).round();
    delta -= a * (delta.x / a.x).round();
    delta
}

/// Angle at `p2` formed by `p1-p2-p3`, in radians.
pub fn bond_angle(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> f64 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    v1.angle(&v2)
}

/// Signed dihedral angle of `p1-p2-p3-p4` in radians, in `(-pi, pi]`.
///
/// Follows the IUPAC sign convention: positive when, looking down `p2 -> p3`, the
/// far bond is rotated clockwise from the near one.
pub fn dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let x = n1.dot(&n2);
    let y = b2.norm() * b1.dot(&n2);
    y.atan2(x)
}
