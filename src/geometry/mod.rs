// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - half-edge polyhedron and topology editing operators

mod analytics;
mod composite;
mod consistency;
mod construction;
mod halfedge;
mod index;
mod operators;
mod transform;
mod traversal;

pub use analytics::{analyze, MeshStats};
pub use halfedge::{Face, HalfEdge, Polyhedron};
pub use index::{EdgeId, FaceId, PointId};
pub use transform::PointSelection;
pub use traversal::FaceEdges;
