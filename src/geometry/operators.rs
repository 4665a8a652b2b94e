// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive topology operators
//!
//! Every composite edit is built from these three. Each one allocates new
//! records at the end of the stores and rewires the neighbours of the
//! half-edge it is given; no record is ever removed.

use tracing::trace;

use super::halfedge::{HalfEdge, Polyhedron};
use super::index::EdgeId;
use crate::error::{Result, TopologyError};

impl Polyhedron {
    /// Open a zero-thickness face along the undirected edge of `edge`.
    ///
    /// A new face with two half-edges is inserted between `edge` and its
    /// former opposite: the returned half-edge runs parallel to `edge` and
    /// is the opposite of `edge`'s former opposite, while its partner in the
    /// new face becomes the opposite of `edge`. The new face starts at the
    /// returned half-edge.
    ///
    /// Adds 1 face and 2 half-edges.
    pub fn edge_to_face(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.check_linked_edge(edge)?;
        let opposite = self.opposite(edge);
        self.check_linked_edge(opposite)?;

        let face = self.add_face(EdgeId::invalid());
        let new_edge = self.add_half_edge(
            HalfEdge::new(self.target(edge))
                .with_opposite(opposite)
                .with_face(face),
        );
        let new_opposite = self.add_half_edge(
            HalfEdge::new(self.target(opposite))
                .with_previous(new_edge)
                .with_next(new_edge)
                .with_opposite(edge)
                .with_face(face),
        );
        self.relink(new_opposite);
        self.relink(new_edge);
        self.face_mut(face).start = new_edge;

        trace!(?edge, ?new_edge, ?face, "edge_to_face");
        Ok(new_edge)
    }

    /// Split the target point of `edge` into two points joined by a new edge.
    ///
    /// `edge` and the half-edge entering the same point from the face across
    /// `edge.next` are moved onto a copy of the point; the returned half-edge
    /// ends at the original point and lies in the face of `edge.next.opposite`.
    ///
    /// The target must have more than two incident face corners, otherwise
    /// the new edge would have nowhere to go and a [`TopologyError`] is
    /// returned before anything is changed.
    ///
    /// Adds 1 point and 2 half-edges.
    pub fn point_to_edge(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.check_splittable(edge)?;

        let opposite = self.opposite(edge);
        let next_opposite = self.opposite(self.next(edge));
        let point = self.target(edge);
        let new_point = self.duplicate_point(point)?;

        let new_edge = self.add_half_edge(
            HalfEdge::new(point)
                .with_previous(next_opposite)
                .with_next(self.next(next_opposite))
                .with_face(self.face_of(next_opposite)),
        );
        let new_opposite = self.add_half_edge(
            HalfEdge::new(new_point)
                .with_previous(self.previous(opposite))
                .with_next(opposite)
                .with_opposite(new_edge)
                .with_face(self.face_of(opposite)),
        );
        self.half_edge_mut(new_edge).opposite = new_opposite;
        self.half_edge_mut(edge).target = new_point;
        self.half_edge_mut(next_opposite).target = new_point;

        self.relink(new_edge);
        self.relink(new_opposite);

        trace!(?edge, ?new_edge, ?new_point, "point_to_edge");
        Ok(new_edge)
    }

    /// Insert a new point after `edge` in its face boundary.
    ///
    /// The new point is a copy of `edge.target`; callers usually move it
    /// afterwards. A matching half-edge is inserted before `edge.opposite`
    /// in the face across, so both boundaries stay mirror images.
    /// Returns the new half-edge, which ends at the new point.
    ///
    /// Adds 1 point and 2 half-edges.
    pub fn append_point(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.check_linked_edge(edge)?;
        let opposite = self.opposite(edge);
        self.check_linked_edge(opposite)?;
        let before_opposite = self.previous(opposite);
        self.check_linked_edge(before_opposite)?;
        self.check_linked_edge(self.next(edge))?;

        let point = self.target(edge);
        let new_point = self.duplicate_point(point)?;

        let new_edge = self.add_half_edge(
            HalfEdge::new(new_point)
                .with_previous(edge)
                .with_next(self.next(edge))
                .with_face(self.face_of(edge)),
        );
        let new_opposite = self.add_half_edge(
            HalfEdge::new(point)
                .with_previous(before_opposite)
                .with_next(opposite)
                .with_opposite(new_edge)
                .with_face(self.face_of(opposite)),
        );
        self.half_edge_mut(new_edge).opposite = new_opposite;
        self.half_edge_mut(before_opposite).target = new_point;

        self.relink(new_edge);
        self.relink(new_opposite);

        trace!(?edge, ?new_edge, ?new_point, "append_point");
        Ok(new_edge)
    }

    /// Structural precondition of [`point_to_edge`](Self::point_to_edge).
    fn check_splittable(&self, edge: EdgeId) -> Result<()> {
        self.check_linked_edge(edge)?;
        let next = self.next(edge);
        let opposite = self.opposite(edge);
        self.check_linked_edge(next)?;
        self.check_linked_edge(opposite)?;
        let next_opposite = self.opposite(next);
        let before_opposite = self.previous(opposite);
        self.check_linked_edge(next_opposite)?;
        self.check_linked_edge(before_opposite)?;

        if next == edge {
            return Err(TopologyError::SelfLoop { edge }.into());
        }
        if before_opposite == opposite {
            return Err(TopologyError::SelfLoop { edge: opposite }.into());
        }
        if next_opposite == edge {
            return Err(TopologyError::DanglingSpur { edge }.into());
        }
        if next_opposite == before_opposite {
            return Err(TopologyError::VertexDegree { edge, degree: 2 }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::geometry::{FaceId, PointId};
    use nalgebra::{Point3, Vector3};

    fn triangle() -> Polyhedron {
        Polyhedron::from_polygon(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    fn cube() -> Polyhedron {
        Polyhedron::from_extrude(
            &[
                Point3::new(-1.0, -1.0, 0.0),
                Point3::new(1.0, -1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(-1.0, 1.0, 0.0),
            ],
            Vector3::new(0.0, 0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_edge_to_face() {
        let mut mesh = triangle();
        let edge = mesh.start(FaceId::new(0));
        let old_opposite = mesh.opposite(edge);

        let new_edge = mesh.edge_to_face(edge).unwrap();
        let wall = mesh.face_of(new_edge);

        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_edges(), 8);
        assert_eq!(mesh.num_faces(), 3);
        assert_eq!(mesh.start(wall), new_edge);
        assert_eq!(mesh.face_len(wall).unwrap(), 2);
        assert_eq!(mesh.target(new_edge), mesh.target(edge));
        assert_eq!(mesh.opposite(new_edge), old_opposite);
        assert_eq!(mesh.opposite(old_opposite), new_edge);
        assert_eq!(mesh.face_of(mesh.opposite(edge)), wall);
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_append_point() {
        let mut mesh = triangle();
        let edge = mesh.start(FaceId::new(0));
        let new_edge = mesh.append_point(edge).unwrap();

        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.num_edges(), 8);
        assert_eq!(mesh.target(new_edge), PointId::new(3));
        assert_eq!(mesh.point(PointId::new(3)), mesh.point(mesh.target(edge)));
        assert_eq!(mesh.next(edge), new_edge);
        assert_eq!(
            mesh.face_points(FaceId::new(0)).unwrap(),
            vec![PointId::new(0), PointId::new(3), PointId::new(1), PointId::new(2)]
        );
        assert_eq!(
            mesh.face_points(FaceId::new(1)).unwrap(),
            vec![PointId::new(2), PointId::new(1), PointId::new(3), PointId::new(0)]
        );
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_point_to_edge_on_solid() {
        let mut mesh = cube();
        let cap = FaceId::new(0);
        let edge = mesh.start(cap);
        let point = mesh.target(edge);
        let faces = mesh.num_faces();

        let new_edge = mesh.point_to_edge(edge).unwrap();

        assert_eq!(mesh.num_points(), 9);
        assert_eq!(mesh.num_edges(), 26);
        assert_eq!(mesh.num_faces(), faces);
        assert_eq!(mesh.target(new_edge), point);
        assert_eq!(mesh.target(edge), PointId::new(8));
        assert_eq!(mesh.target(mesh.opposite(new_edge)), PointId::new(8));
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_point_to_edge_rejects_degree_two() {
        let mut mesh = triangle();
        let edge = mesh.start(FaceId::new(0));
        let result = mesh.point_to_edge(edge);

        assert!(matches!(
            result,
            Err(MeshError::Topology(TopologyError::VertexDegree { degree: 2, .. }))
        ));
        // Rejected before any allocation
        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_edges(), 6);
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_point_to_edge_rejects_self_loop() {
        let mut mesh = Polyhedron::new();
        let (front, _) = mesh.make_double_face(Point3::origin());
        let result = mesh.point_to_edge(mesh.start(front));
        assert!(matches!(
            result,
            Err(MeshError::Topology(TopologyError::SelfLoop { .. }))
        ));
    }

    #[test]
    fn test_point_to_edge_after_wall() {
        // Opening a wall next to the vertex gives it a third corner.
        let mut mesh = triangle();
        let edge = mesh.start(FaceId::new(0));
        mesh.edge_to_face(mesh.next(edge)).unwrap();
        mesh.point_to_edge(edge).unwrap();
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_unlinked_edge_rejected() {
        let mut mesh = Polyhedron::new();
        let p = mesh.add_point(Point3::origin());
        let e = mesh.add_half_edge(HalfEdge::new(p));
        assert!(matches!(mesh.edge_to_face(e), Err(MeshError::InvalidEdge(_))));
        assert!(matches!(
            mesh.append_point(EdgeId::new(5)),
            Err(MeshError::InvalidEdge(_))
        ));
        assert_eq!(mesh.num_faces(), 0);
    }
}
