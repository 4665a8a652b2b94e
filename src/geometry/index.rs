// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Typed handles into the point, half-edge and face stores.
//!
//! Stores are append-only, so a handle stays valid for the lifetime of the
//! mesh that issued it. Each handle type reserves `u32::MAX` as an "unset"
//! sentinel, which lets a record be allocated before all its links are known.

use std::fmt::{self, Debug};

const INVALID: u32 = u32::MAX;

/// Handle of a point in the point store.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PointId(u32);

/// Handle of a half-edge in the half-edge store.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId(u32);

/// Handle of a face in the face store.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

macro_rules! impl_handle {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a handle from a store index.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < INVALID as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// The unset handle.
            #[inline]
            pub const fn invalid() -> Self {
                Self(INVALID)
            }

            /// Store index of this handle.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Whether this handle has been set.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }
    };
}

impl_handle!(PointId, "P");
impl_handle!(EdgeId, "E");
impl_handle!(FaceId, "F");

const FACE_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl FaceId {
    /// Spreadsheet-style letter name used in listings and graph exports:
    /// `A`..`Z`, then `BA`, `BB`, ...
    pub fn label(self) -> String {
        if !self.is_valid() {
            return "?".to_string();
        }
        let n = FACE_LETTERS.len();
        let mut i = self.index();
        let mut letters = Vec::new();
        loop {
            letters.push(FACE_LETTERS[i % n]);
            i /= n;
            if i == 0 {
                break;
            }
        }
        letters.iter().rev().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_roundtrip() {
        let e = EdgeId::new(42);
        assert_eq!(e.index(), 42);
        assert!(e.is_valid());
        assert!(!EdgeId::invalid().is_valid());
        assert_eq!(EdgeId::default(), EdgeId::invalid());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", PointId::new(3)), "P(3)");
        assert_eq!(format!("{:?}", FaceId::invalid()), "F(INVALID)");
    }

    #[test]
    fn test_face_labels() {
        assert_eq!(FaceId::new(0).label(), "A");
        assert_eq!(FaceId::new(25).label(), "Z");
        assert_eq!(FaceId::new(26).label(), "BA");
        assert_eq!(FaceId::new(27).label(), "BB");
        assert_eq!(FaceId::invalid().label(), "?");
    }
}
