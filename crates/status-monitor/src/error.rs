// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for metric reading.

/// Errors that can occur when reading a metric from procfs or sysfs.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Failed to read a sysfs or procfs file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a value from a system file.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },

    /// The expected pseudo-file does not exist (e.g., no battery, no AC adapter).
    #[error("path not found: {path}")]
    NotAvailable { path: String },

    /// The values were read but make no sense together (e.g., zero battery capacity).
    #[error("invalid reading: {0}")]
    Invalid(String),
}

/// Coarse classification of a [`MonitorError`].
///
/// Carried by [`Reading::Failed`](crate::Reading::Failed) so callers can
/// tell a missing file from garbage content without matching marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The source file is missing or cannot be opened.
    Unreadable,
    /// The source file was read but its content did not parse.
    Malformed,
    /// The content parsed but the aggregate is unusable.
    Invalid,
}

impl MonitorError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ReadError { .. } | Self::NotAvailable { .. } => FailureKind::Unreadable,
            Self::ParseError { .. } => FailureKind::Malformed,
            Self::Invalid(_) => FailureKind::Invalid,
        }
    }

    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotAvailable {
                path: path.display().to_string(),
            }
        } else {
            Self::ReadError {
                path: path.display().to_string(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &std::path::Path, detail: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.display().to_string(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_file_is_not_available() {
        let err = MonitorError::read(
            Path::new("/nonexistent"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, MonitorError::NotAvailable { .. }));
        assert_eq!(err.kind(), FailureKind::Unreadable);
    }

    #[test]
    fn test_kinds() {
        let denied = MonitorError::read(
            Path::new("/proc/meminfo"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(denied.kind(), FailureKind::Unreadable);
        assert_eq!(
            MonitorError::parse(Path::new("/proc/loadavg"), "empty").kind(),
            FailureKind::Malformed
        );
        assert_eq!(
            MonitorError::Invalid("zero capacity".into()).kind(),
            FailureKind::Invalid
        );
    }
}
