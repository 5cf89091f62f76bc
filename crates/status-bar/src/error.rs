// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the status bar.

/// Errors raised while setting up the status bar.
///
/// Nothing in the running loop returns these: metric failures become
/// inline markers and title publishing is best effort.
#[derive(Debug, thiserror::Error)]
pub enum BarError {
    /// The configuration could not be read, parsed or serialised.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The title command is unusable (e.g., empty).
    #[error("invalid title command: {0}")]
    InvalidCommand(String),
}
