// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for optica.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// Project-local config file name.
const LOCAL_CONFIG_FILE: &str = "optica.toml";

/// How token dumps are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One coloured line per token
    #[default]
    Pretty,
    /// A JSON array of tokens
    Json,
}

/// Configuration for optica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token dump format
    pub format: OutputFormat,

    /// Colourise pretty output
    pub color: bool,

    /// Include NEWLINE/INDENT/DEDENT/END in pretty dumps
    pub show_structural: bool,

    /// REPL history length
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            color: true,
            show_structural: true,
            history_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, or from the default locations.
    ///
    /// An explicit path must exist; the default locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in default_locations() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Candidate config files, in lookup order.
fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("optica").join("config.toml"));
    }
    paths
}
