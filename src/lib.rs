// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hedron
//!
//! Half-edge polyhedral meshes with local topology editing operators.
//! A mesh starts as a double-faced polygon and is reshaped in place by face
//! splits, bevels, loop cuts and extrusions, each of which keeps the
//! half-edge invariants intact.
//!
//! ```
//! use hedron::prelude::*;
//! use nalgebra::{Point3, Vector3};
//!
//! let base = [
//!     Point3::new(-1.0, -1.0, 0.0),
//!     Point3::new(1.0, -1.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(-1.0, 1.0, 0.0),
//! ];
//! let mut mesh = Polyhedron::new();
//! let (cap, _) = mesh.make_poly_double_face(&base)?;
//! mesh.extrude(cap, Vector3::new(0.0, 0.0, 1.0))?;
//! mesh.check_consistency()?;
//!
//! assert_eq!(mesh.num_points(), 8);
//! assert_eq!(mesh.num_faces(), 6);
//! # Ok::<(), hedron::MeshError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use config::MeshConfig;
pub use error::{MeshError, Result};
pub use geometry::{analyze, EdgeId, FaceId, MeshStats, PointId, Polyhedron};

use nalgebra::{Point3, Vector3};

/// Commonly used types
pub mod prelude {
    pub use crate::config::MeshConfig;
    pub use crate::error::{MeshError, Result};
    pub use crate::geometry::{
        analyze, EdgeId, FaceId, HalfEdge, MeshStats, PointId, PointSelection, Polyhedron,
    };
}

/// Build a double-faced seed mesh from a polygon
pub fn seed(polygon: &[Point3<f64>]) -> Result<Polyhedron> {
    Polyhedron::from_polygon(polygon)
}

/// Build a prism by extruding a polygon along `vector`
pub fn extrude(polygon: &[Point3<f64>], vector: Vector3<f64>) -> Result<Polyhedron> {
    Polyhedron::from_extrude(polygon, vector)
}
