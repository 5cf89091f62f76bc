// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared setup.

pub mod config;
pub mod once;
pub mod run;

use anyhow::Context;
use status_bar::StatusConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber.
///
/// Verbosity maps `0 → warn`, `1 → info`, `2 → debug`, `3+ → trace`;
/// `RUST_LOG` overrides it. Logs go to stderr so that `--stdout` output
/// stays clean.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<StatusConfig> {
    match path {
        Some(path) => {
            let config = StatusConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            tracing::info!("loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(StatusConfig::default()),
    }
}
