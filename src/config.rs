// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default configuration file looked up by [`MeshConfig::load`].
pub const CONFIG_FILE: &str = "hedron.toml";

/// Environment variable overriding [`MeshConfig::verify_edits`].
pub const VERIFY_ENV: &str = "HEDRON_VERIFY_EDITS";

/// Initial store capacities for a new mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityHint {
    pub points: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Per-mesh configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Run the consistency checker after every composite operator
    pub verify_edits: bool,
    /// Store pre-allocation
    pub capacity: CapacityHint,
}

impl MeshConfig {
    /// Configuration with edit verification switched on.
    pub fn verified() -> Self {
        Self {
            verify_edits: true,
            ..Self::default()
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Load `hedron.toml` from the working directory if present, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(value) = std::env::var(VERIFY_ENV) {
            config.apply_verify_override(&value);
        }

        Ok(config)
    }

    fn apply_verify_override(&mut self, value: &str) {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => self.verify_edits = true,
            "0" | "false" | "no" | "off" => self.verify_edits = false,
            other => tracing::warn!(value = other, "ignoring unrecognized {}", VERIFY_ENV),
        }
    }
}
