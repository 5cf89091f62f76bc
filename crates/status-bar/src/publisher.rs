// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The poll-format-publish loop.
//!
//! Each tick reads every metric in turn, joins them into one line and
//! hands it to a [`TitleSink`], then sleeps until the next whole second.
//! The only state carried between ticks is the previous network counters.

use crate::clock;
use crate::{BarError, MetricLine, StatusConfig, TitleSink};
use status_monitor::{
    read_hostname, CpuMetric, MemoryMetric, NetCounters, NetworkMetric, PowerMetric, RateFormatter,
};
use std::path::PathBuf;
use std::time::SystemTime;

/// Samples all metrics and publishes the status line.
#[derive(Debug, Clone)]
pub struct StatusBar {
    hostname_path: PathBuf,
    network: NetworkMetric,
    cpu: CpuMetric,
    memory: MemoryMetric,
    power: PowerMetric,
    field_separator: String,
    time_format: String,
    net_counters: NetCounters,
}

impl StatusBar {
    /// Builds the metric readers described by `config`.
    pub fn new(config: &StatusConfig) -> Result<Self, BarError> {
        if !clock::is_valid_pattern(&config.time_format) {
            return Err(BarError::ConfigError(format!(
                "invalid time_format '{}'",
                config.time_format
            )));
        }

        let sources = &config.sources;
        let signs = &config.signs;
        let palette = &config.palette;
        let cores = config.resolve_cores();

        let formatter = RateFormatter::new(
            signs.clone(),
            config.float_separator.clone(),
            palette.clone(),
        );
        tracing::debug!(
            "watching interfaces {:?}, scaling load by {cores} cores",
            config.interfaces
        );

        Ok(Self {
            hostname_path: sources.hostname.clone(),
            network: NetworkMetric::new(&sources.net_dev, &config.interfaces, signs, formatter),
            cpu: CpuMetric::new(&sources.loadavg, cores, signs.cpu.clone(), palette.clone()),
            memory: MemoryMetric::new(&sources.meminfo, signs.mem.clone(), palette.clone()),
            power: PowerMetric::new(&sources.power_supply, signs, palette.clone()),
            field_separator: config.field_separator.clone(),
            time_format: config.time_format.clone(),
            net_counters: NetCounters::default(),
        })
    }

    /// Reads every metric once, advancing the network counters.
    pub fn compose(&mut self) -> MetricLine {
        let hostname = read_hostname(&self.hostname_path);
        let (network, counters) = self.network.sample(self.net_counters);
        self.net_counters = counters;

        MetricLine {
            hostname,
            network,
            cpu: self.cpu.sample(),
            memory: self.memory.sample(),
            power: self.power.sample(),
            time: clock::local_time(&self.time_format),
        }
    }

    /// Composes and publishes one line, returning what was composed.
    pub async fn tick<S: TitleSink>(&mut self, sink: &mut S) -> MetricLine {
        let line = self.compose();
        let text = line.join(&self.field_separator);
        tracing::trace!("publishing '{text}'");
        sink.publish(&text).await;
        line
    }

    /// Publishes a line every second, forever.
    pub async fn run<S: TitleSink>(mut self, mut sink: S) {
        tracing::info!("status bar started");
        loop {
            self.tick(&mut sink).await;
            tokio::time::sleep(clock::until_next_second(SystemTime::now())).await;
        }
    }

    /// Counters the next network sample is measured against.
    pub fn net_counters(&self) -> NetCounters {
        self.net_counters
    }

    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format() {
        let config = StatusConfig {
            time_format: "%Q".into(),
            ..Default::default()
        };
        assert!(matches!(StatusBar::new(&config), Err(BarError::ConfigError(_))));
    }

    #[test]
    fn test_compose_against_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = StatusConfig {
            sources: status_monitor::Sources::under(dir.path()),
            ..Default::default()
        };
        let mut bar = StatusBar::new(&config).unwrap();
        let line = bar.compose();
        assert_eq!(line.hostname, "");
        assert_eq!(line.failures().len(), 4);
        assert_eq!(bar.net_counters(), NetCounters::default());
    }
}
