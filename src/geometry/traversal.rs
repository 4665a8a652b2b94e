// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Face boundary traversal

use super::halfedge::Polyhedron;
use super::index::{EdgeId, FaceId, PointId};
use crate::error::{MeshError, Result};

/// Iterator over the half-edges of a face boundary, starting at `face.start`.
///
/// Stops when `start` recurs. A corrupted cycle cannot loop forever: the walk
/// is capped at the number of half-edges in the mesh, and an out-of-range
/// link ends it early. In both cases [`is_broken`](Self::is_broken) reports
/// it afterwards.
pub struct FaceEdges<'a> {
    mesh: &'a Polyhedron,
    start: EdgeId,
    current: EdgeId,
    steps: usize,
    done: bool,
    broken: bool,
}

impl<'a> FaceEdges<'a> {
    fn new(mesh: &'a Polyhedron, face: FaceId) -> Self {
        let start = if face.is_valid() && face.index() < mesh.num_faces() {
            mesh.start(face)
        } else {
            EdgeId::invalid()
        };
        let in_range = mesh.check_edge(start).is_ok();
        Self {
            mesh,
            start,
            current: start,
            steps: 0,
            done: !in_range,
            broken: !in_range,
        }
    }

    /// Whether the walk stopped without returning to its start.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Number of half-edges yielded so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<'a> Iterator for FaceEdges<'a> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.steps >= self.mesh.num_edges() {
            self.done = true;
            self.broken = true;
            return None;
        }

        let result = self.current;
        self.steps += 1;
        self.current = self.mesh.next(result);

        if self.current == self.start {
            self.done = true;
        } else if self.mesh.check_edge(self.current).is_err() {
            self.done = true;
            self.broken = true;
        }

        Some(result)
    }
}

impl Polyhedron {
    /// Lazily walk the boundary of `face`.
    pub fn face_edges(&self, face: FaceId) -> FaceEdges<'_> {
        FaceEdges::new(self, face)
    }

    /// Boundary half-edges of `face` in cycle order.
    pub fn face_cycle(&self, face: FaceId) -> Result<Vec<EdgeId>> {
        self.check_face(face)?;
        let mut walk = self.face_edges(face);
        let cycle: Vec<EdgeId> = walk.by_ref().collect();
        if walk.is_broken() {
            return Err(MeshError::BrokenCycle {
                face,
                limit: self.num_edges(),
            });
        }
        Ok(cycle)
    }

    /// Target points of the boundary of `face` in cycle order.
    pub fn face_points(&self, face: FaceId) -> Result<Vec<PointId>> {
        Ok(self
            .face_cycle(face)?
            .into_iter()
            .map(|e| self.target(e))
            .collect())
    }

    /// Number of half-edges on the boundary of `face`.
    pub fn face_len(&self, face: FaceId) -> Result<usize> {
        Ok(self.face_cycle(face)?.len())
    }

    /// `[source, target]` of a half-edge.
    pub fn edge_points(&self, e: EdgeId) -> Result<[PointId; 2]> {
        self.check_linked_edge(e)?;
        let opposite = self.opposite(e);
        self.check_linked_edge(opposite)?;
        Ok([self.target(opposite), self.target(e)])
    }
}
