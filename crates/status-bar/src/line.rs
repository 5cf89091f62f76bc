// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! One rendering of the status bar.

use status_monitor::Reading;

/// The six fields of a status line, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine {
    pub hostname: String,
    pub network: Reading,
    pub cpu: Reading,
    pub memory: Reading,
    pub power: Reading,
    pub time: String,
}

impl MetricLine {
    /// Joins the fields with `separator`.
    ///
    /// ```
    /// use status_bar::MetricLine;
    /// use status_monitor::Reading;
    ///
    /// let line = MetricLine {
    ///     hostname: "box".into(),
    ///     network: Reading::Value("RX  5.0B/s TX  5.0B/s".into()),
    ///     cpu: Reading::Value("CPU 12".into()),
    ///     memory: Reading::Value("MEM 40".into()),
    ///     power: Reading::Value("AC 100".into()),
    ///     time: "Mon 02 | 15:04:05".into(),
    /// };
    /// assert_eq!(
    ///     line.join(" | "),
    ///     "box | RX  5.0B/s TX  5.0B/s | CPU 12 | MEM 40 | AC 100 | Mon 02 | 15:04:05"
    /// );
    /// ```
    pub fn join(&self, separator: &str) -> String {
        [
            self.hostname.as_str(),
            self.network.text(),
            self.cpu.text(),
            self.memory.text(),
            self.power.text(),
            self.time.as_str(),
        ]
        .join(separator)
    }

    /// Returns the metric readings in display order.
    pub fn readings(&self) -> [&Reading; 4] {
        [&self.network, &self.cpu, &self.memory, &self.power]
    }

    /// Returns the readings that fell back to an error marker.
    pub fn failures(&self) -> Vec<&Reading> {
        self.readings().into_iter().filter(|r| r.is_failed()).collect()
    }
}
