// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - read-only exporters and debug listings
//!
//! Exporters see a mesh only through its point list, the boundary point
//! sequence of each face, and the `(source, target, face)` triple of each
//! half-edge.

mod export_dot;
mod export_obj;
mod listing;

pub use export_dot::write_dot;
pub use export_obj::export as export_obj;
pub use export_obj::write_obj;
pub use listing::{write_edge_listing, write_point_listing};
