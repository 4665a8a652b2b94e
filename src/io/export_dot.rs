// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Graphviz DOT exporter for half-edge connectivity

use crate::geometry::Polyhedron;
use anyhow::Result;
use std::io::Write;

/// Write every half-edge as a `source -> target` arc labelled with its face.
pub fn write_dot<W: Write>(mesh: &Polyhedron, mut out: W) -> Result<()> {
    writeln!(out, "digraph {{")?;
    for (source, target, face) in mesh.edge_triples() {
        writeln!(
            out,
            "    {} -> {} [label=\"{}\"]",
            source.index(),
            target.index(),
            face.label()
        )?;
    }
    writeln!(out, "}}")?;
    Ok(())
}
