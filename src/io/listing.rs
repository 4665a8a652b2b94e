// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plain-text dumps of the point and half-edge stores, for debugging

use crate::geometry::Polyhedron;
use anyhow::Result;
use std::io::Write;

/// One line per half-edge: `e0 -> e2 | e1: p0 [x, y, z] A`
/// (id, next, opposite, target point and its position, face label).
pub fn write_edge_listing<W: Write>(mesh: &Polyhedron, mut out: W) -> Result<()> {
    for (id, he) in mesh.half_edges() {
        let position = if mesh.check_point(he.target).is_ok() {
            let p = mesh.point(he.target);
            format!("[{}, {}, {}]", p.x, p.y, p.z)
        } else {
            "[?]".to_string()
        };
        writeln!(
            out,
            "e{} -> e{} | e{}: p{} {} {}",
            id.index(),
            he.next.index(),
            he.opposite.index(),
            he.target.index(),
            position,
            he.face.label()
        )?;
    }
    Ok(())
}

/// One line per point: `[i]: [x, y, z]`, followed by a blank line.
pub fn write_point_listing<W: Write>(mesh: &Polyhedron, mut out: W) -> Result<()> {
    for (i, p) in mesh.points().iter().enumerate() {
        writeln!(out, "[{}]: [{}, {}, {}]", i, p.x, p.y, p.z)?;
    }
    writeln!(out)?;
    Ok(())
}
