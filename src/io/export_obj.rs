// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ exporter

use crate::geometry::Polyhedron;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write `mesh` as a single OBJ object: one `v` line per point and one
/// 1-based `f` line per face, in store order.
pub fn write_obj<W: Write>(mesh: &Polyhedron, object_name: &str, mut out: W) -> Result<()> {
    writeln!(out, "o {}", object_name)?;
    for p in mesh.points() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for f in mesh.face_ids() {
        let points = mesh
            .face_points(f)
            .with_context(|| format!("Face {} has no closed boundary", f.label()))?;
        let indices: Vec<String> = points.iter().map(|p| (p.index() + 1).to_string()).collect();
        writeln!(out, "f {}", indices.join(" "))?;
    }
    Ok(())
}

/// Export mesh to an OBJ file
pub fn export(mesh: &Polyhedron, object_name: &str, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create OBJ file: {}", path))?;
    let mut out = BufWriter::new(file);
    write_obj(mesh, object_name, &mut out)
        .with_context(|| format!("Failed to write OBJ file: {}", path))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_obj_triangle() -> Result<()> {
        let mesh = Polyhedron::from_polygon(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.5, 0.0),
        ])?;

        let mut buffer = Vec::new();
        write_obj(&mesh, "tri", &mut buffer)?;
        let text = String::from_utf8(buffer)?;

        let expected = "o tri\nv 0 0 0\nv 1 0 0\nv 0 1.5 0\nf 1 2 3\nf 3 2 1\n";
        assert_eq!(text, expected);
        Ok(())
    }
}
