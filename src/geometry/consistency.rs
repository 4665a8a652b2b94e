// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Consistency checker for the half-edge invariants
//!
//! This is a diagnostic oracle, O(half-edges + faces), meant for tests and
//! for [`MeshConfig::verify_edits`](crate::config::MeshConfig::verify_edits).
//! It never repairs anything.

use tracing::warn;

use super::halfedge::Polyhedron;
use super::index::{EdgeId, FaceId};
use crate::error::{ConsistencyError, Invariant, Result};

impl Polyhedron {
    /// Verify every half-edge and face invariant, stopping at the first violation.
    pub fn check_consistency(&self) -> Result<()> {
        let result = self
            .edge_ids()
            .try_for_each(|e| self.check_edge_invariants(e))
            .and_then(|_| self.face_ids().try_for_each(|f| self.check_face_invariants(f)));

        if let Err(err) = result {
            warn!(%err, "mesh is inconsistent");
            return Err(err.into());
        }
        Ok(())
    }

    /// Whether [`check_consistency`](Self::check_consistency) passes.
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    fn check_edge_invariants(&self, e: EdgeId) -> std::result::Result<(), ConsistencyError> {
        let fail = |invariant| Err(ConsistencyError::edge(e, invariant));

        if self.check_linked_edge(e).is_err() {
            return fail(Invariant::DanglingLink);
        }
        let he = *self.half_edge(e);
        for neighbour in [he.next, he.previous, he.opposite] {
            if self.check_linked_edge(neighbour).is_err() {
                return fail(Invariant::DanglingLink);
            }
        }
        let opposite_previous = self.previous(he.opposite);

        if self.previous(he.next) != e {
            return fail(Invariant::NextPrevious);
        }
        if self.next(he.previous) != e {
            return fail(Invariant::PreviousNext);
        }
        if self.opposite(he.opposite) != e {
            return fail(Invariant::OppositeInvolution);
        }
        if self.face_of(he.previous) != he.face {
            return fail(Invariant::PreviousFace);
        }
        if self.face_of(he.next) != he.face {
            return fail(Invariant::NextFace);
        }
        if he.target != self.target(opposite_previous) {
            return fail(Invariant::OppositeTarget);
        }
        if self.target(he.previous) != self.target(he.opposite) {
            return fail(Invariant::PreviousOppositeTarget);
        }
        Ok(())
    }

    fn check_face_invariants(&self, f: FaceId) -> std::result::Result<(), ConsistencyError> {
        let start = self.start(f);
        if self.check_edge(start).is_err() {
            return Err(ConsistencyError::face(f, Invariant::DanglingLink));
        }
        if self.face_of(start) != f {
            return Err(ConsistencyError::face(f, Invariant::FaceStart));
        }
        Ok(())
    }
}
