//! Backface rejection.

use crate::math::vec3::Vec3;

/// Returns true when the triangle faces away from a camera at the origin.
///
/// Takes the positioned (rotated and translated) vertices before projection.
/// The normal is `(v2 − v1) × (v3 − v1)`, unnormalized. The triangle is a
/// backface when that normal has a positive dot product with the ray from
/// the camera to `v1`. Edge-on triangles (dot exactly zero) are kept.
pub fn is_backface(v1: Vec3, v2: Vec3, v3: Vec3) -> bool {
    let normal = (v2 - v1).cross(v3 - v1);
    let view = v1 - Vec3::ORIGIN;
    view.dot(normal) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn culls_triangle_whose_normal_points_away() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(1.0, 0.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);
        // normal = +Z, view ray = +Z
        assert!(is_backface(a, b, c));
    }

    #[test]
    fn keeps_triangle_with_reversed_winding() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(1.0, 0.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);
        assert!(!is_backface(a, c, b));
    }

    #[test]
    fn keeps_edge_on_triangle() {
        // Plane contains the origin, so the dot product is exactly zero.
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(0.0, 0.0, 2.0);
        let c = Vec3::new(0.0, 1.0, 1.0);
        assert!(!is_backface(a, b, c));
    }
}
