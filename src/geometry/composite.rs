// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Composite topology operators: face splitting, bevels, loop cuts and extrusion
//!
//! Each operator is a fixed sequence of [`edge_to_face`](Polyhedron::edge_to_face)
//! and [`point_to_edge`](Polyhedron::point_to_edge) calls. The face being
//! edited must be an intact cycle of at least three half-edges; this is checked
//! before anything is allocated.

use nalgebra::Vector3;
use tracing::{debug, warn};

use super::halfedge::Polyhedron;
use super::index::{EdgeId, FaceId};
use super::transform::PointSelection;
use crate::error::{Result, TopologyError};

impl Polyhedron {
    /// Cut the face of `edge` in two along a new edge.
    ///
    /// `edge` is promoted to a wall face, then both of its end points are
    /// split. Returns `edge`.
    ///
    /// Adds 2 points, 6 half-edges and 1 face.
    pub fn split_face(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.require_face_of(edge)?;

        self.edge_to_face(edge)?;
        self.point_to_edge(edge)?;
        self.point_to_edge(self.previous(edge))?;

        debug!(?edge, "split_face");
        self.verify_edit()?;
        Ok(edge)
    }

    /// Bevel the undirected edge of `edge`.
    ///
    /// Walls are opened along `edge` and its two neighbours, then both end
    /// points are split. Returns `edge`.
    ///
    /// Adds 2 points, 10 half-edges and 3 faces.
    pub fn edge_cut(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.require_face_of(edge)?;

        self.edge_to_face(edge)?;
        self.edge_to_face(self.previous(edge))?;
        self.edge_to_face(self.next(edge))?;
        self.point_to_edge(self.opposite(edge))?;
        self.point_to_edge(self.previous(self.opposite(edge)))?;

        debug!(?edge, "edge_cut");
        self.verify_edit()?;
        Ok(edge)
    }

    /// Bevel the target point of `edge`.
    ///
    /// Walls are opened along `edge` and `edge.next`, then the shared point
    /// is split. Returns `edge`.
    ///
    /// Adds 1 point, 6 half-edges and 2 faces.
    pub fn vertex_cut(&mut self, edge: EdgeId) -> Result<EdgeId> {
        self.require_face_of(edge)?;

        self.edge_to_face(edge)?;
        self.edge_to_face(self.next(edge))?;
        self.point_to_edge(self.opposite(self.next(edge)))?;

        debug!(?edge, "vertex_cut");
        self.verify_edit()?;
        Ok(edge)
    }

    /// Insert a ring of faces around the boundary of `face`.
    ///
    /// Every boundary edge is promoted to a wall, then every boundary point
    /// is split. `face` keeps its identity and its boundary half-edges, but
    /// they now run over the new points, one ring away from the old
    /// boundary. Returns the half-edge opposite `face.start`, which lies in
    /// the ring.
    ///
    /// For a boundary of `n` half-edges this adds `n` points, `4n`
    /// half-edges and `n` faces.
    pub fn loop_cut(&mut self, face: FaceId) -> Result<EdgeId> {
        let cycle = self.require_face(face)?;

        for &edge in &cycle {
            self.edge_to_face(edge)?;
        }
        for edge in self.face_cycle(face)? {
            self.point_to_edge(edge)?;
        }

        debug!(?face, ring = cycle.len(), "loop_cut");
        self.verify_edit()?;
        Ok(self.opposite(self.start(face)))
    }

    /// Loop-cut `face` and move its (new) boundary points by `vector`.
    ///
    /// Returns the handle from [`loop_cut`](Self::loop_cut).
    pub fn extrude(&mut self, face: FaceId, vector: Vector3<f64>) -> Result<EdgeId> {
        let handle = self.loop_cut(face)?;
        let cap = self.face_points(face)?;
        self.translate(vector, PointSelection::from(cap))?;

        debug!(?face, ?vector, "extrude");
        Ok(handle)
    }

    /// Boundary of `face`, provided it is an intact cycle of at least 3 half-edges.
    fn require_face(&self, face: FaceId) -> Result<Vec<EdgeId>> {
        let cycle = self.face_cycle(face)?;
        if cycle.len() < 3 {
            return Err(TopologyError::FaceTooSmall {
                face,
                edges: cycle.len(),
            }
            .into());
        }
        Ok(cycle)
    }

    fn require_face_of(&self, edge: EdgeId) -> Result<()> {
        self.check_linked_edge(edge)?;
        self.require_face(self.face_of(edge)).map(|_| ())
    }

    fn verify_edit(&self) -> Result<()> {
        if !self.config.verify_edits {
            return Ok(());
        }
        self.check_consistency().map_err(|err| {
            warn!(%err, "edit left the mesh inconsistent");
            err
        })
    }
}
