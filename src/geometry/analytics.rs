// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh analytics and statistics

use serde::{Deserialize, Serialize};

use super::halfedge::Polyhedron;

/// Combinatorial summary of a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Number of points
    pub point_count: usize,
    /// Number of half-edges
    pub half_edge_count: usize,
    /// Number of undirected edges (half-edge pairs)
    pub edge_count: usize,
    /// Number of faces
    pub face_count: usize,
    /// V - E + F; 2 for a closed genus-0 solid
    pub euler_characteristic: i64,
    /// Shortest face boundary
    pub min_face_size: usize,
    /// Longest face boundary
    pub max_face_size: usize,
    /// Faces with fewer than 3 boundary half-edges
    pub degenerate_faces: usize,
    /// Faces whose boundary does not close
    pub broken_faces: usize,
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    /// Whether the consistency checker passes
    pub is_consistent: bool,
}

impl MeshStats {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Analyze mesh topology and compute statistics
pub fn analyze(mesh: &Polyhedron) -> MeshStats {
    let mut min_face_size = usize::MAX;
    let mut max_face_size = 0;
    let mut degenerate_faces = 0;
    let mut broken_faces = 0;

    for f in mesh.face_ids() {
        match mesh.face_len(f) {
            Ok(n) => {
                min_face_size = min_face_size.min(n);
                max_face_size = max_face_size.max(n);
                if n < 3 {
                    degenerate_faces += 1;
                }
            }
            Err(_) => broken_faces += 1,
        }
    }
    if min_face_size == usize::MAX {
        min_face_size = 0;
    }

    let point_count = mesh.num_points();
    let half_edge_count = mesh.num_edges();
    let edge_count = half_edge_count / 2;
    let face_count = mesh.num_faces();

    MeshStats {
        point_count,
        half_edge_count,
        edge_count,
        face_count,
        euler_characteristic: point_count as i64 - edge_count as i64 + face_count as i64,
        min_face_size,
        max_face_size,
        degenerate_faces,
        broken_faces,
        bbox: calculate_bounding_box(mesh),
        is_consistent: mesh.is_consistent(),
    }
}

fn calculate_bounding_box(mesh: &Polyhedron) -> [f64; 6] {
    if mesh.num_points() == 0 {
        return [0.0; 6];
    }

    let mut bbox = [
        f64::MAX,
        f64::MAX,
        f64::MAX,
        f64::MIN,
        f64::MIN,
        f64::MIN,
    ];
    for p in mesh.points() {
        for i in 0..3 {
            bbox[i] = bbox[i].min(p[i]);
            bbox[i + 3] = bbox[i + 3].max(p[i]);
        }
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FaceId;
    use nalgebra::{Point3, Vector3};

    fn quad() -> Vec<Point3<f64>> {
        vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_empty_stats() {
        let stats = analyze(&Polyhedron::new());
        assert_eq!(stats.point_count, 0);
        assert_eq!(stats.min_face_size, 0);
        assert_eq!(stats.bbox, [0.0; 6]);
        assert!(stats.is_consistent);
    }

    #[test]
    fn test_cube_stats() {
        let mesh = Polyhedron::from_extrude(&quad(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let stats = analyze(&mesh);

        assert_eq!(stats.point_count, 8);
        assert_eq!(stats.edge_count, 12);
        assert_eq!(stats.face_count, 6);
        assert_eq!(stats.euler_characteristic, 2);
        assert_eq!(stats.min_face_size, 4);
        assert_eq!(stats.max_face_size, 4);
        assert_eq!(stats.degenerate_faces, 0);
        assert_eq!(stats.bbox, [-1.0, -1.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(stats.is_consistent);
    }

    #[test]
    fn test_edit_keeps_euler_characteristic() {
        let mut mesh = Polyhedron::from_extrude(&quad(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        mesh.edge_cut(mesh.start(FaceId::new(0))).unwrap();
        let stats = analyze(&mesh);
        assert_eq!(stats.euler_characteristic, 2);
        assert_eq!(stats.degenerate_faces, 3);
        assert_eq!(stats.min_face_size, 2);
        assert_eq!(stats.max_face_size, 6);
    }

    #[test]
    fn test_stats_json() {
        let mesh = Polyhedron::from_polygon(&quad()).unwrap();
        let json = analyze(&mesh).to_json().unwrap();
        let parsed: MeshStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.face_count, 2);
        assert_eq!(parsed.euler_characteristic, 2);
        assert!(json.contains("\"is_consistent\": true"));
    }
}
