// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point transforms: translate, scale, rotate
//!
//! Transforms only move coordinates; they never touch topology.

use nalgebra::{Matrix4, Vector3};

use super::halfedge::Polyhedron;
use super::index::PointId;
use crate::error::Result;
use crate::utils::math::rotation_xyz;

/// Points a transform applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointSelection {
    /// Every point in the mesh
    All,
    /// The listed points, each moved once even if listed twice
    Points(Vec<PointId>),
}

impl From<PointId> for PointSelection {
    fn from(point: PointId) -> Self {
        Self::Points(vec![point])
    }
}

impl From<Vec<PointId>> for PointSelection {
    fn from(points: Vec<PointId>) -> Self {
        Self::Points(points)
    }
}

impl From<&[PointId]> for PointSelection {
    fn from(points: &[PointId]) -> Self {
        Self::Points(points.to_vec())
    }
}

impl<const N: usize> From<[PointId; N]> for PointSelection {
    fn from(points: [PointId; N]) -> Self {
        Self::Points(points.to_vec())
    }
}

impl Polyhedron {
    /// Resolve a selection into distinct, validated point ids.
    fn resolve(&self, selection: PointSelection) -> Result<Vec<PointId>> {
        match selection {
            PointSelection::All => Ok(self.point_ids().collect()),
            PointSelection::Points(mut points) => {
                for &p in &points {
                    self.check_point(p)?;
                }
                points.sort_unstable();
                points.dedup();
                Ok(points)
            }
        }
    }

    fn apply_to_points<F>(&mut self, selection: PointSelection, mut f: F) -> Result<()>
    where
        F: FnMut(&mut nalgebra::Point3<f64>),
    {
        for p in self.resolve(selection)? {
            f(self.point_mut(p));
        }
        Ok(())
    }

    /// Move the selected points by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>, selection: impl Into<PointSelection>) -> Result<()> {
        self.apply_to_points(selection.into(), |p| *p += offset)
    }

    /// Scale the selected points component-wise about the origin.
    pub fn scale(&mut self, factors: Vector3<f64>, selection: impl Into<PointSelection>) -> Result<()> {
        self.apply_to_points(selection.into(), |p| {
            p.coords.component_mul_assign(&factors);
        })
    }

    /// Scale the selected points uniformly about the origin.
    pub fn scale_uniform(&mut self, factor: f64, selection: impl Into<PointSelection>) -> Result<()> {
        self.apply_to_points(selection.into(), |p| p.coords *= factor)
    }

    /// Rotate the selected points about the origin by XYZ Euler angles in degrees.
    pub fn rotate(&mut self, angles: Vector3<f64>, selection: impl Into<PointSelection>) -> Result<()> {
        let rotation = rotation_xyz(&angles);
        self.apply_to_points(selection.into(), |p| p.coords = rotation * p.coords)
    }

    /// Apply a homogeneous transform to the selected points.
    pub fn transform(&mut self, matrix: &Matrix4<f64>, selection: impl Into<PointSelection>) -> Result<()> {
        self.apply_to_points(selection.into(), |p| *p = matrix.transform_point(p))
    }
}
