// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU load from `/proc/loadavg`.
//!
//! The 1-minute load average is scaled by the core count into a
//! percentage-like figure: a load of 2.0 on four cores shows as 50. The
//! figure is not clamped and exceeds 100 when runnable tasks queue up.

use crate::{MonitorError, Palette, Reading, Urgency};
use std::path::PathBuf;

/// Reads and formats the scaled load average.
#[derive(Debug, Clone)]
pub struct CpuMetric {
    path: PathBuf,
    cores: usize,
    sign: String,
    palette: Palette,
}

impl CpuMetric {
    /// Creates a reader for `path`. A core count of zero is treated as one.
    pub fn new(
        path: impl Into<PathBuf>,
        cores: usize,
        sign: impl Into<String>,
        palette: Palette,
    ) -> Self {
        Self {
            path: path.into(),
            cores: cores.max(1),
            sign: sign.into(),
            palette,
        }
    }

    /// Returns e.g. `"CPU 50"`, or `"CPUERR"`.
    pub fn sample(&self) -> Reading {
        match self.read() {
            Ok(percent) => {
                let text = format!("{}{percent:>3}", self.sign);
                Reading::Value(self.palette.paint(Urgency::for_usage(percent), &text))
            }
            Err(e) => Reading::failed("cpu", format!("{}ERR", self.sign), &e),
        }
    }

    /// Reads the 1-minute load scaled to the core count.
    pub fn read(&self) -> Result<i64, MonitorError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| MonitorError::read(&self.path, e))?;

        // Format: "0.35 0.28 0.22 1/234 5678"
        let token = content
            .split_whitespace()
            .next()
            .ok_or_else(|| MonitorError::parse(&self.path, "empty load average"))?;
        let load: f64 = token.parse().map_err(|_| {
            MonitorError::parse(&self.path, format!("expected a float, got '{token}'"))
        })?;

        Ok(self.scale(load))
    }

    /// Scales a load average by `100 / cores`, truncating.
    pub fn scale(&self, load: f64) -> i64 {
        (load * 100.0 / self.cores as f64) as i64
    }
}

/// Number of cores the load is spread over.
///
/// Falls back to 1 when the parallelism cannot be determined.
pub fn online_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_for(content: &str, cores: usize) -> (tempfile::TempDir, CpuMetric) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadavg");
        std::fs::write(&path, content).unwrap();
        let m = CpuMetric::new(path, cores, "CPU", Palette::default());
        (dir, m)
    }

    #[test]
    fn test_scale() {
        let m = CpuMetric::new("/proc/loadavg", 4, "CPU", Palette::default());
        assert_eq!(m.scale(2.0), 50);
        assert_eq!(m.scale(0.0), 0);
        assert_eq!(m.scale(6.0), 150);
        assert_eq!(m.scale(0.039), 0);
    }

    #[test]
    fn test_sample() {
        let (_dir, m) = metric_for("2.00 1.50 1.00 3/456 7890\n", 4);
        assert_eq!(m.sample(), Reading::Value("CPU 50".into()));
    }

    #[test]
    fn test_not_clamped() {
        let (_dir, m) = metric_for("12.50 1.50 1.00 3/456 7890\n", 4);
        assert_eq!(m.sample().text(), "CPU312");
    }

    #[test]
    fn test_zero_cores_treated_as_one() {
        let m = CpuMetric::new("/proc/loadavg", 0, "CPU", Palette::default());
        assert_eq!(m.scale(0.5), 50);
    }

    #[test]
    fn test_parse_error() {
        let (_dir, m) = metric_for("garbage\n", 4);
        let reading = m.sample();
        assert_eq!(reading.text(), "CPUERR");
        assert_eq!(reading.failure(), Some(crate::FailureKind::Malformed));

        let (_dir, m) = metric_for("", 4);
        assert!(matches!(m.read(), Err(MonitorError::ParseError { .. })));
    }

    #[test]
    fn test_missing_file() {
        let m = CpuMetric::new("/nonexistent/loadavg", 4, "CPU", Palette::default());
        let reading = m.sample();
        assert_eq!(reading.text(), "CPUERR");
        assert_eq!(reading.failure(), Some(crate::FailureKind::Unreadable));
    }

    #[test]
    fn test_online_cores() {
        assert!(online_cores() >= 1);
    }
}
