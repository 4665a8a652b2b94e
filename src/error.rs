// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh construction and topology editing.

use std::fmt;

use thiserror::Error;

use crate::geometry::{EdgeId, FaceId, PointId};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors reported by [`Polyhedron`](crate::geometry::Polyhedron) operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A coordinate was given with the wrong number of components.
    #[error("coordinate must have exactly 3 components, got {components}")]
    InvalidCoordinate {
        /// Number of components received.
        components: usize,
    },

    /// A seed polygon has too few points.
    #[error("polygon needs at least 3 points, got {points}")]
    DegeneratePolygon {
        /// Number of points received.
        points: usize,
    },

    /// A point handle is out of range or unset.
    #[error("invalid point handle {0:?}")]
    InvalidPoint(PointId),

    /// A half-edge handle is out of range or unset.
    #[error("invalid half-edge handle {0:?}")]
    InvalidEdge(EdgeId),

    /// A face handle is out of range or unset.
    #[error("invalid face handle {0:?}")]
    InvalidFace(FaceId),

    /// An operator was applied where its structural assumption does not hold.
    #[error("topology precondition failed: {0}")]
    Topology(#[from] TopologyError),

    /// A face boundary did not close within the number of half-edges in the mesh.
    #[error("boundary of face {face:?} does not close within {limit} steps")]
    BrokenCycle {
        /// The face being traversed.
        face: FaceId,
        /// Step limit that was reached.
        limit: usize,
    },

    /// The consistency checker found a violated invariant.
    #[error("consistency check failed: {0}")]
    Consistency(#[from] ConsistencyError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural preconditions of the topology operators.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// The half-edge or its opposite forms a one-edge loop.
    #[error("half-edge {edge:?} closes on itself")]
    SelfLoop {
        /// Offending half-edge.
        edge: EdgeId,
    },

    /// The half-edge is followed by its own opposite.
    #[error("half-edge {edge:?} ends in a dangling spur")]
    DanglingSpur {
        /// Offending half-edge.
        edge: EdgeId,
    },

    /// The target vertex has too few incident face corners to be split.
    #[error("target of half-edge {edge:?} has degree {degree}, cannot split")]
    VertexDegree {
        /// Half-edge whose target was to be split.
        edge: EdgeId,
        /// Number of incident corners found.
        degree: usize,
    },

    /// The face has fewer than three boundary half-edges.
    #[error("face {face:?} has {edges} boundary half-edges, need at least 3")]
    FaceTooSmall {
        /// Offending face.
        face: FaceId,
        /// Boundary length found.
        edges: usize,
    },
}

/// The mesh element a consistency violation was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A half-edge record.
    Edge(EdgeId),
    /// A face record.
    Face(FaceId),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Edge(e) => write!(f, "half-edge {}", e.index()),
            Element::Face(face) => write!(f, "face {}", face.label()),
        }
    }
}

/// Invariants verified by the consistency checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// A link or target refers outside its store.
    DanglingLink,
    /// `e.next.previous == e`
    NextPrevious,
    /// `e.previous.next == e`
    PreviousNext,
    /// `e.opposite.opposite == e`
    OppositeInvolution,
    /// `e.previous.face == e.face`
    PreviousFace,
    /// `e.next.face == e.face`
    NextFace,
    /// `e.target == e.opposite.previous.target`
    OppositeTarget,
    /// `e.previous.target == e.opposite.target`
    PreviousOppositeTarget,
    /// `f.start.face == f`
    FaceStart,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Invariant::DanglingLink => "dangling link",
            Invariant::NextPrevious => "next/previous",
            Invariant::PreviousNext => "previous/next",
            Invariant::OppositeInvolution => "opposite/opposite",
            Invariant::PreviousFace => "previous face",
            Invariant::NextFace => "next face",
            Invariant::OppositeTarget => "opposite target",
            Invariant::PreviousOppositeTarget => "previous opposite target",
            Invariant::FaceStart => "start face",
        };
        f.write_str(name)
    }
}

/// First invariant violation found by the checker.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{element}: {invariant} check failed")]
pub struct ConsistencyError {
    /// Where the violation was found.
    pub element: Element,
    /// Which invariant failed.
    pub invariant: Invariant,
}

impl ConsistencyError {
    pub(crate) fn edge(edge: EdgeId, invariant: Invariant) -> Self {
        Self {
            element: Element::Edge(edge),
            invariant,
        }
    }

    pub(crate) fn face(face: FaceId, invariant: Invariant) -> Self {
        Self {
            element: Element::Face(face),
            invariant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_message() {
        let err = ConsistencyError::edge(EdgeId::new(6), Invariant::NextPrevious);
        assert_eq!(err.to_string(), "half-edge 6: next/previous check failed");

        let err = ConsistencyError::face(FaceId::new(27), Invariant::FaceStart);
        assert_eq!(err.to_string(), "face BB: start face check failed");
    }

    #[test]
    fn test_topology_conversion() {
        let err: MeshError = TopologyError::FaceTooSmall {
            face: FaceId::new(2),
            edges: 2,
        }
        .into();
        assert!(matches!(
            err,
            MeshError::Topology(TopologyError::FaceTooSmall { edges: 2, .. })
        ));
    }
}
