// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Network throughput from `/proc/net/dev`.
//!
//! The kernel keeps cumulative byte counters per interface. A rate is the
//! difference between two samples one tick apart, so the caller owns a
//! [`NetCounters`] value and threads it through consecutive calls to
//! [`NetworkMetric::sample`].
//!
//! # Format
//! ```text
//! Inter-|   Receive                            |  Transmit
//!  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets ...
//!   eth0: 1234567    8901    0    0    0     0          0         0  7654321    4321 ...
//! ```
//! Received bytes are the first column after the colon, transmitted bytes
//! the ninth.

use crate::{MonitorError, RateFormatter, Reading, Signs};
use std::collections::HashSet;
use std::path::PathBuf;

/// Column (after the interface name) holding transmitted bytes.
const TX_BYTES_COLUMN: usize = 8;

/// Cumulative received and transmitted bytes over the watched interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl NetCounters {
    /// Bytes moved since `previous`. A counter that went backwards
    /// (interface reset) counts as no traffic.
    pub fn delta(&self, previous: &NetCounters) -> (i64, i64) {
        let moved = |now: u64, before: u64| {
            i64::try_from(now.saturating_sub(before)).unwrap_or(i64::MAX)
        };
        (
            moved(self.rx_bytes, previous.rx_bytes),
            moved(self.tx_bytes, previous.tx_bytes),
        )
    }
}

/// Reads and formats receive/transmit rates for a set of interfaces.
#[derive(Debug, Clone)]
pub struct NetworkMetric {
    path: PathBuf,
    interfaces: HashSet<String>,
    rx_sign: String,
    tx_sign: String,
    formatter: RateFormatter,
}

impl NetworkMetric {
    /// Creates a reader for `path` summing over `interfaces`.
    ///
    /// Interface names may carry the trailing colon used in the table.
    pub fn new<I, S>(
        path: impl Into<PathBuf>,
        interfaces: I,
        signs: &Signs,
        formatter: RateFormatter,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let interfaces = interfaces
            .into_iter()
            .map(|name| name.as_ref().trim().trim_end_matches(':').to_string())
            .collect();
        Self {
            path: path.into(),
            interfaces,
            rx_sign: signs.rx.clone(),
            tx_sign: signs.tx.clone(),
            formatter,
        }
    }

    /// Formats the rates since `previous` and returns the counters to pass
    /// on the next tick.
    ///
    /// When the table cannot be read, both directions show an error marker
    /// and `previous` is returned unchanged.
    pub fn sample(&self, previous: NetCounters) -> (Reading, NetCounters) {
        match self.read() {
            Ok(current) => {
                let (rx, tx) = current.delta(&previous);
                let text = format!(
                    "{} {}",
                    self.formatter.format(&self.rx_sign, rx),
                    self.formatter.format(&self.tx_sign, tx),
                );
                (Reading::Value(text), current)
            }
            Err(e) => {
                let marker = format!("{} ERR {} ERR", self.rx_sign, self.tx_sign);
                (Reading::failed("network", marker, &e), previous)
            }
        }
    }

    /// Reads the current cumulative counters.
    pub fn read(&self) -> Result<NetCounters, MonitorError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| MonitorError::read(&self.path, e))?;
        Ok(self.parse(&content))
    }

    /// Sums the counters of the watched interfaces in a `/proc/net/dev` table.
    ///
    /// Header lines and rows that do not parse are skipped.
    pub fn parse(&self, content: &str) -> NetCounters {
        content
            .lines()
            .filter_map(parse_row)
            .filter(|(name, _, _)| self.interfaces.contains(*name))
            .fold(NetCounters::default(), |acc, (_, rx, tx)| NetCounters {
                rx_bytes: acc.rx_bytes.saturating_add(rx),
                tx_bytes: acc.tx_bytes.saturating_add(tx),
            })
    }
}

/// Splits one table row into `(interface, rx_bytes, tx_bytes)`.
fn parse_row(line: &str) -> Option<(&str, u64, u64)> {
    let (name, counters) = line.split_once(':')?;
    let columns: Vec<&str> = counters.split_whitespace().collect();
    let rx = columns.first()?.parse().ok()?;
    let tx = columns.get(TX_BYTES_COLUMN)?.parse().ok()?;
    Some((name.trim(), rx, tx))
}
