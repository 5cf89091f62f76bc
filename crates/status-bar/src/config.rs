// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Status bar configuration loaded from TOML files or constructed programmatically.
//!
//! Every field is optional; the defaults reproduce the stock bar.
//!
//! # TOML Format
//! ```toml
//! interfaces = ["enp0s25", "wlp4s0"]
//! cores = 4
//! float_separator = "."
//! field_separator = " | "
//! time_format = "%a %d | %H:%M:%S"
//! title_command = ["xsetroot", "-name"]
//!
//! [sources]
//! net_dev = "/proc/net/dev"
//! power_supply = "/sys/class/power_supply"
//!
//! [signs]
//! cpu = "CPU"
//! mem = "MEM"
//!
//! [palette]
//! normal = "\u0001"
//! warning = "\u0003"
//! critical = "\u0004"
//! ```

use crate::BarError;
use status_monitor::{Palette, Signs, Sources};
use std::path::Path;

/// Configuration for the status bar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Interfaces whose traffic is summed into the network rate.
    pub interfaces: Vec<String>,
    /// Core count the load average is scaled by (defaults to the number
    /// of online cores).
    pub cores: Option<usize>,
    /// Decimal point used in rates.
    pub float_separator: String,
    /// Delimiter between the fields of the status line.
    pub field_separator: String,
    /// `strftime`-style pattern for the local time field.
    pub time_format: String,
    /// Program and leading arguments; the status line is appended as the
    /// final argument.
    pub title_command: Vec<String>,
    /// Pseudo-file locations.
    pub sources: Sources,
    /// Labels and unit suffixes.
    pub signs: Signs,
    /// Urgency colour escapes.
    pub palette: Palette,
}

impl StatusConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BarError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BarError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, BarError> {
        toml::from_str(toml_str)
            .map_err(|e| BarError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, BarError> {
        toml::to_string_pretty(self)
            .map_err(|e| BarError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Resolves the core count used to scale the load average.
    pub fn resolve_cores(&self) -> usize {
        self.cores
            .filter(|&n| n > 0)
            .unwrap_or_else(status_monitor::online_cores)
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            interfaces: vec!["enp0s25".to_string(), "wlp4s0".to_string()],
            cores: None,
            float_separator: ".".to_string(),
            field_separator: " | ".to_string(),
            time_format: "%a %d | %H:%M:%S".to_string(),
            title_command: vec!["xsetroot".to_string(), "-name".to_string()],
            sources: Sources::default(),
            signs: Signs::default(),
            palette: Palette::default(),
        }
    }
}
