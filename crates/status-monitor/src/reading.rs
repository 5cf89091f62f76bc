// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The outcome of sampling one metric.

use crate::{FailureKind, MonitorError};
use std::fmt;

/// A formatted metric value, or the inline marker that replaces it.
///
/// Metric readers never fail outright: any [`MonitorError`] is logged and
/// turned into [`Reading::Failed`], whose `marker` is what ends up in the
/// status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// The formatted metric.
    Value(String),
    /// The metric could not be read; `marker` is shown in its place.
    Failed { marker: String, kind: FailureKind },
}

impl Reading {
    /// Builds a failed reading from an error, logging the cause.
    pub(crate) fn failed(metric: &str, marker: String, err: &MonitorError) -> Self {
        tracing::debug!("{metric} unavailable: {err}");
        Self::Failed {
            marker,
            kind: err.kind(),
        }
    }

    /// Returns the text shown in the status line.
    pub fn text(&self) -> &str {
        match self {
            Self::Value(text) => text,
            Self::Failed { marker, .. } => marker,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the failure class, if this reading failed.
    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Value(_) => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
