// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::{MeshError, Result};

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Rotation about the z axis by `gamma` degrees
pub fn yaw_matrix(gamma: f64) -> Matrix3<f64> {
    let (s, c) = deg_to_rad(gamma).sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Rotation in the x/z plane by `alpha` degrees (x turns towards -z)
pub fn pitch_matrix(alpha: f64) -> Matrix3<f64> {
    let (s, c) = deg_to_rad(alpha).sin_cos();
    Matrix3::new(
        c, 0.0, -s, //
        0.0, 1.0, 0.0, //
        s, 0.0, c,
    )
}

/// Rotation about the x axis by `beta` degrees
pub fn roll_matrix(beta: f64) -> Matrix3<f64> {
    let (s, c) = deg_to_rad(beta).sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// XYZ Euler rotation from `(alpha, beta, gamma)` in degrees:
/// pitch first, then roll, then yaw.
pub fn rotation_xyz(angles: &Vector3<f64>) -> Matrix3<f64> {
    yaw_matrix(angles.z) * roll_matrix(angles.y) * pitch_matrix(angles.x)
}

/// Read a point from a slice that must hold exactly 3 components.
pub fn point_from_slice(coords: &[f64]) -> Result<Point3<f64>> {
    match coords {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(MeshError::InvalidCoordinate {
            components: coords.len(),
        }),
    }
}

/// Read a vector from a slice that must hold exactly 3 components.
pub fn vector_from_slice(coords: &[f64]) -> Result<Vector3<f64>> {
    point_from_slice(coords).map(|p| p.coords)
}

/// Read a polygon from a list of coordinate slices.
pub fn polygon_from_slices<S: AsRef<[f64]>>(coords: &[S]) -> Result<Vec<Point3<f64>>> {
    coords.iter().map(|c| point_from_slice(c.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_relative_eq!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_yaw_turns_x_into_y() {
        let v = yaw_matrix(90.0) * Vector3::x();
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_roll_turns_y_into_z() {
        let v = roll_matrix(90.0) * Vector3::y();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let m = rotation_xyz(&Vector3::zeros());
        assert_relative_eq!(m, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_order() {
        let angles = Vector3::new(30.0, 45.0, 60.0);
        let expected = yaw_matrix(60.0) * roll_matrix(45.0) * pitch_matrix(30.0);
        assert_relative_eq!(rotation_xyz(&angles), expected);
        // Orthonormal
        let m = rotation_xyz(&angles);
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_point_from_slice() {
        assert_eq!(
            point_from_slice(&[1.0, 2.0, 3.0]).unwrap(),
            Point3::new(1.0, 2.0, 3.0)
        );
        assert!(matches!(
            point_from_slice(&[1.0, 2.0]),
            Err(MeshError::InvalidCoordinate { components: 2 })
        ));
        assert!(vector_from_slice(&[0.0; 4]).is_err());
    }

    #[test]
    fn test_polygon_from_slices() {
        let polygon = polygon_from_slices(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap();
        assert_eq!(polygon.len(), 3);

        let ragged: Vec<Vec<f64>> = vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0]];
        assert!(polygon_from_slices(&ragged).is_err());
    }
}
