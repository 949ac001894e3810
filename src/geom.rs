//! Linear-algebra helpers for the 3D cylindrical band construction.

use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

const EPS: f32 = 1e-6;

/// Returns a unit vector perpendicular to `dir`.
///
/// The choice among the infinite perpendicular family is fixed: the cross
/// product with (1, 1, 1), falling back to the x axis when `dir` is nearly
/// parallel to (1, 1, 1). Downstream only the rotational phase of the
/// sampling disc depends on this choice.
pub fn any_perpendicular(dir: &Vector3<f32>) -> Vector3<f32> {
    let cross = dir.cross(&Vector3::new(1.0, 1.0, 1.0));
    if cross.norm() > EPS {
        cross.normalize()
    } else {
        dir.cross(&Vector3::x()).normalize()
    }
}

/// Homogeneous matrix rotating by `angle` about the axis `dir` through `pivot`.
pub fn axis_rotation(angle: f32, dir: &Vector3<f32>, pivot: &Point3<f32>) -> Matrix4<f32> {
    let axis = Unit::new_normalize(*dir);
    let rot = Rotation3::from_axis_angle(&axis, angle).to_homogeneous();
    let to_origin = Matrix4::new_translation(&(-pivot.coords));
    let back = Matrix4::new_translation(&pivot.coords);
    back * rot * to_origin
}

/// Applies a homogeneous transform to a set of points.
pub fn transform_points(m: &Matrix4<f32>, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    points.iter().map(|p| m.transform_point(p)).collect()
}
