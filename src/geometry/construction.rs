// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Seed construction: double-faced polygons and extruded solids
//!
//! A double-faced polygon is a degenerate, zero-volume solid: a front face
//! and a back face over the same points, with every edge of one being the
//! opposite of an edge of the other. It is consistent under all half-edge
//! invariants and is the usual starting point for [`Polyhedron::extrude`].

use nalgebra::{Point3, Vector3};
use tracing::debug;

use super::halfedge::{HalfEdge, Polyhedron};
use super::index::{EdgeId, FaceId};
use crate::error::{MeshError, Result};

impl Polyhedron {
    /// Create a double face over a single point: two self-looped half-edges,
    /// opposite to each other, each bounding its own face.
    ///
    /// Returns `(front, back)`.
    pub fn make_double_face(&mut self, position: Point3<f64>) -> (FaceId, FaceId) {
        let point = self.add_point(position);
        let edge = EdgeId::new(self.num_edges());
        let mate = EdgeId::new(self.num_edges() + 1);
        let front = FaceId::new(self.num_faces());
        let back = FaceId::new(self.num_faces() + 1);

        self.add_half_edge(
            HalfEdge::new(point)
                .with_next(edge)
                .with_previous(edge)
                .with_opposite(mate)
                .with_face(front),
        );
        self.add_half_edge(
            HalfEdge::new(point)
                .with_next(mate)
                .with_previous(mate)
                .with_opposite(edge)
                .with_face(back),
        );
        self.add_face(edge);
        self.add_face(mate);

        (front, back)
    }

    /// Create a double-faced polygon from `polygon` (at least 3 points).
    ///
    /// The front face lists the points in the given order, the back face in
    /// reverse. Returns `(front, back)`.
    pub fn make_poly_double_face(&mut self, polygon: &[Point3<f64>]) -> Result<(FaceId, FaceId)> {
        if polygon.len() < 3 {
            return Err(MeshError::DegeneratePolygon {
                points: polygon.len(),
            });
        }

        let (front, back) = self.make_double_face(polygon[0]);
        let mut edge = self.start(front);
        for position in &polygon[1..] {
            edge = self.append_point(edge)?;
            let target = self.target(edge);
            *self.point_mut(target) = *position;
        }

        debug!(points = polygon.len(), ?front, ?back, "seeded double face");
        Ok((front, back))
    }

    /// Build a degenerate double-faced solid from a polygon.
    pub fn from_polygon(polygon: &[Point3<f64>]) -> Result<Self> {
        let mut mesh = Self::new();
        mesh.make_poly_double_face(polygon)?;
        Ok(mesh)
    }

    /// Build a prism by extruding a double-faced polygon along `vector`.
    ///
    /// Face 0 is the moved cap, face 1 the base; the side walls follow.
    pub fn from_extrude(polygon: &[Point3<f64>], vector: Vector3<f64>) -> Result<Self> {
        let mut mesh = Self::new();
        let (front, _) = mesh.make_poly_double_face(polygon)?;
        mesh.extrude(front, vector)?;
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointId;

    fn triangle() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_single_point_double_face() {
        let mut mesh = Polyhedron::new();
        let (front, back) = mesh.make_double_face(Point3::new(1.0, 2.0, 3.0));

        assert_eq!(mesh.num_points(), 1);
        assert_eq!(mesh.num_edges(), 2);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.face_points(front).unwrap(), vec![PointId::new(0)]);
        assert_eq!(mesh.face_points(back).unwrap(), vec![PointId::new(0)]);
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_triangle_seed_is_mirrored() {
        let mut mesh = Polyhedron::new();
        let (front, back) = mesh.make_poly_double_face(&triangle()).unwrap();

        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_edges(), 6);
        assert_eq!(mesh.num_faces(), 2);

        let mut front_points = mesh.face_points(front).unwrap();
        let back_points = mesh.face_points(back).unwrap();
        front_points.reverse();
        assert_eq!(front_points, back_points);

        for e in mesh.face_cycle(front).unwrap() {
            assert_eq!(mesh.face_of(mesh.opposite(e)), back);
        }
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_seed_coordinates() {
        let polygon = triangle();
        let mesh = Polyhedron::from_polygon(&polygon).unwrap();
        assert_eq!(mesh.points(), &polygon[..]);
    }

    #[test]
    fn test_degenerate_polygon() {
        let result = Polyhedron::from_polygon(&triangle()[..2]);
        assert!(matches!(
            result,
            Err(MeshError::DegeneratePolygon { points: 2 })
        ));
        assert!(Polyhedron::from_polygon(&[]).is_err());
    }

    #[test]
    fn test_second_seed_is_disjoint() {
        let mut mesh = Polyhedron::from_polygon(&triangle()).unwrap();
        let (front, back) = mesh.make_poly_double_face(&triangle()).unwrap();

        assert_eq!(front, FaceId::new(2));
        assert_eq!(back, FaceId::new(3));
        assert_eq!(mesh.num_points(), 6);
        assert_eq!(
            mesh.face_points(front).unwrap(),
            vec![PointId::new(3), PointId::new(4), PointId::new(5)]
        );
        assert!(mesh.check_consistency().is_ok());
    }
}
