// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory usage via `/proc/meminfo`.
//!
//! "Used" is what applications hold: total minus free, buffers and page
//! cache. The kernel's own `MemAvailable` estimate is not consulted.

use crate::{MonitorError, Palette, Reading, Urgency};
use std::path::{Path, PathBuf};

/// The `/proc/meminfo` fields the usage figure is computed from, in kB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total_kb: i64,
    pub free_kb: i64,
    pub buffers_kb: i64,
    pub cached_kb: i64,
}

impl MemoryInfo {
    /// Reads memory information from a `/proc/meminfo`-formatted file.
    pub fn read_from(path: &Path) -> Result<Self, MonitorError> {
        let content = std::fs::read_to_string(path).map_err(|e| MonitorError::read(path, e))?;
        Self::parse(&content, path)
    }

    /// Parses `/proc/meminfo` content.
    ///
    /// Scanning stops as soon as all four fields are seen. A line that is
    /// not `"Key: value ..."` fails the whole parse.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MonitorError> {
        let mut total = None;
        let mut free = None;
        let mut buffers = None;
        let mut cached = None;

        for line in content.lines() {
            if total.is_some() && free.is_some() && buffers.is_some() && cached.is_some() {
                break;
            }

            let mut parts = line.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                return Err(MonitorError::parse(source_path, format!("malformed line '{line}'")));
            };
            let value: i64 = value.parse().map_err(|_| {
                MonitorError::parse(
                    source_path,
                    format!("expected integer kB value, got '{value}'"),
                )
            })?;

            match key {
                "MemTotal:" => total = Some(value),
                "MemFree:" => free = Some(value),
                "Buffers:" => buffers = Some(value),
                "Cached:" => cached = Some(value),
                _ => {}
            }
        }

        let require = |field: Option<i64>, name: &str| {
            field.ok_or_else(|| MonitorError::parse(source_path, format!("{name} not found")))
        };

        Ok(Self {
            total_kb: require(total, "MemTotal")?,
            free_kb: require(free, "MemFree")?,
            buffers_kb: require(buffers, "Buffers")?,
            cached_kb: require(cached, "Cached")?,
        })
    }

    /// Memory held by applications, in kB. `None` if the figures overflow.
    pub fn used_kb(&self) -> Option<i64> {
        self.total_kb
            .checked_sub(self.free_kb)?
            .checked_sub(self.buffers_kb)?
            .checked_sub(self.cached_kb)
    }

    /// Used memory as a truncated percentage of the total.
    pub fn percent(&self) -> Option<i64> {
        if self.total_kb <= 0 {
            return None;
        }
        Some(self.used_kb()?.checked_mul(100)? / self.total_kb)
    }
}

/// Reads and formats memory usage.
#[derive(Debug, Clone)]
pub struct MemoryMetric {
    path: PathBuf,
    sign: String,
    palette: Palette,
}

impl MemoryMetric {
    pub fn new(path: impl Into<PathBuf>, sign: impl Into<String>, palette: Palette) -> Self {
        Self {
            path: path.into(),
            sign: sign.into(),
            palette,
        }
    }

    /// Returns e.g. `"MEM 40"`, or `"MEMERR"`.
    pub fn sample(&self) -> Reading {
        match self.read() {
            Ok(percent) => {
                let text = format!("{}{percent:>3}", self.sign);
                Reading::Value(self.palette.paint(Urgency::for_usage(percent), &text))
            }
            Err(e) => Reading::failed("memory", format!("{}ERR", self.sign), &e),
        }
    }

    /// Reads the used-memory percentage.
    pub fn read(&self) -> Result<i64, MonitorError> {
        MemoryInfo::read_from(&self.path)?
            .percent()
            .ok_or_else(|| {
                MonitorError::Invalid(format!(
                    "MemTotal is zero or out of range in {}",
                    self.path.display()
                ))
            })
    }
}
