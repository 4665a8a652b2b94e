// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Half-edge polyhedron: point, half-edge and face stores
//!
//! Every cross-reference is a typed index into one of the three stores owned
//! by [`Polyhedron`]. The stores only grow, so an id handed out once stays
//! valid for the lifetime of the mesh and link rewrites are O(1).

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, PointId};
use crate::config::MeshConfig;
use crate::error::{MeshError, Result};

/// Directed edge on the boundary of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    /// Point this half-edge points to
    pub target: PointId,
    /// Next half-edge along the same face boundary
    pub next: EdgeId,
    /// Previous half-edge along the same face boundary
    pub previous: EdgeId,
    /// Half-edge running the other way along the same undirected edge
    pub opposite: EdgeId,
    /// Face bounded by this half-edge
    pub face: FaceId,
}

impl HalfEdge {
    /// Create a half-edge with only its target set.
    pub fn new(target: PointId) -> Self {
        Self {
            target,
            next: EdgeId::invalid(),
            previous: EdgeId::invalid(),
            opposite: EdgeId::invalid(),
            face: FaceId::invalid(),
        }
    }

    pub fn with_next(mut self, next: EdgeId) -> Self {
        self.next = next;
        self
    }

    pub fn with_previous(mut self, previous: EdgeId) -> Self {
        self.previous = previous;
        self
    }

    pub fn with_opposite(mut self, opposite: EdgeId) -> Self {
        self.opposite = opposite;
        self
    }

    pub fn with_face(mut self, face: FaceId) -> Self {
        self.face = face;
        self
    }

    /// Whether every field has been filled in.
    pub fn is_linked(&self) -> bool {
        self.target.is_valid()
            && self.next.is_valid()
            && self.previous.is_valid()
            && self.opposite.is_valid()
            && self.face.is_valid()
    }
}

/// Face record; its boundary is the `next` cycle through `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub start: EdgeId,
}

impl Face {
    pub fn new(start: EdgeId) -> Self {
        Self { start }
    }
}

/// Polyhedral mesh in half-edge representation
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    pub(crate) points: Vec<Point3<f64>>,
    pub(crate) edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) config: MeshConfig,
}

impl Polyhedron {
    /// Create an empty mesh with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh, reserving store capacity from `config`.
    pub fn with_config(config: MeshConfig) -> Self {
        let hint = config.capacity;
        Self {
            points: Vec::with_capacity(hint.points),
            edges: Vec::with_capacity(hint.edges),
            faces: Vec::with_capacity(hint.faces),
            config,
        }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MeshConfig {
        &mut self.config
    }

    // ==================== Stores ====================

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Append a point and return its id.
    pub fn add_point(&mut self, position: Point3<f64>) -> PointId {
        let id = PointId::new(self.points.len());
        self.points.push(position);
        id
    }

    /// Append a half-edge record. Unset links may be filled in later
    /// through [`half_edge_mut`](Self::half_edge_mut), before first use.
    pub fn add_half_edge(&mut self, edge: HalfEdge) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        id
    }

    /// Append a face whose boundary starts at `start` (may be unset).
    pub fn add_face(&mut self, start: EdgeId) -> FaceId {
        let id = FaceId::new(self.faces.len());
        self.faces.push(Face::new(start));
        id
    }

    /// Copy the coordinate of `point` into a new, independent slot.
    pub fn duplicate_point(&mut self, point: PointId) -> Result<PointId> {
        self.check_point(point)?;
        let position = self.points[point.index()];
        Ok(self.add_point(position))
    }

    // ==================== Handle validation ====================

    pub fn check_point(&self, id: PointId) -> Result<()> {
        if id.is_valid() && id.index() < self.points.len() {
            Ok(())
        } else {
            Err(MeshError::InvalidPoint(id))
        }
    }

    pub fn check_edge(&self, id: EdgeId) -> Result<()> {
        if id.is_valid() && id.index() < self.edges.len() {
            Ok(())
        } else {
            Err(MeshError::InvalidEdge(id))
        }
    }

    pub fn check_face(&self, id: FaceId) -> Result<()> {
        if id.is_valid() && id.index() < self.faces.len() {
            Ok(())
        } else {
            Err(MeshError::InvalidFace(id))
        }
    }

    /// Check that `id` is in range and all of its links point into the stores.
    pub(crate) fn check_linked_edge(&self, id: EdgeId) -> Result<()> {
        self.check_edge(id)?;
        let he = self.edges[id.index()];
        self.check_point(he.target)?;
        self.check_edge(he.next)?;
        self.check_edge(he.previous)?;
        self.check_edge(he.opposite)?;
        self.check_face(he.face)?;
        Ok(())
    }

    // ==================== Accessors ====================
    //
    // These index the stores directly and panic on an out-of-range id; use
    // the `check_*` methods first for ids from untrusted sources.

    #[inline]
    pub fn point(&self, id: PointId) -> &Point3<f64> {
        &self.points[id.index()]
    }

    #[inline]
    pub fn point_mut(&mut self, id: PointId) -> &mut Point3<f64> {
        &mut self.points[id.index()]
    }

    #[inline]
    pub fn half_edge(&self, id: EdgeId) -> &HalfEdge {
        &self.edges[id.index()]
    }

    #[inline]
    pub fn half_edge_mut(&mut self, id: EdgeId) -> &mut HalfEdge {
        &mut self.edges[id.index()]
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.index()]
    }

    /// All point coordinates in id order.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    // ==================== Links ====================

    #[inline]
    pub fn next(&self, e: EdgeId) -> EdgeId {
        self.half_edge(e).next
    }

    #[inline]
    pub fn previous(&self, e: EdgeId) -> EdgeId {
        self.half_edge(e).previous
    }

    #[inline]
    pub fn opposite(&self, e: EdgeId) -> EdgeId {
        self.half_edge(e).opposite
    }

    #[inline]
    pub fn target(&self, e: EdgeId) -> PointId {
        self.half_edge(e).target
    }

    /// Point the half-edge starts from (`previous.target`).
    #[inline]
    pub fn source(&self, e: EdgeId) -> PointId {
        self.target(self.previous(e))
    }

    #[inline]
    pub fn face_of(&self, e: EdgeId) -> FaceId {
        self.half_edge(e).face
    }

    #[inline]
    pub fn start(&self, f: FaceId) -> EdgeId {
        self.face(f).start
    }

    /// Point `e`'s neighbours back at it: `next.previous`, `previous.next`
    /// and `opposite.opposite` all become `e`.
    pub(crate) fn relink(&mut self, e: EdgeId) {
        let HalfEdge {
            next,
            previous,
            opposite,
            ..
        } = *self.half_edge(e);
        self.half_edge_mut(next).previous = e;
        self.half_edge_mut(previous).next = e;
        self.half_edge_mut(opposite).opposite = e;
    }

    // ==================== Iteration ====================

    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len()).map(PointId::new)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// All half-edges with their ids.
    pub fn half_edges(&self) -> impl Iterator<Item = (EdgeId, &HalfEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, he)| (EdgeId::new(i), he))
    }

    /// `(source, target, face)` for every half-edge, in id order.
    ///
    /// Assumes every half-edge is fully linked.
    pub fn edge_triples(&self) -> impl Iterator<Item = (PointId, PointId, FaceId)> + '_ {
        self.edges
            .iter()
            .map(|he| (self.target(he.previous), he.target, he.face))
    }
}
