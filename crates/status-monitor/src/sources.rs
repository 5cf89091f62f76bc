// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Where metrics are read from, and the labels they are shown with.

use std::path::{Path, PathBuf};

/// Paths of the pseudo-files every metric reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Sources {
    /// Per-interface traffic counters.
    pub net_dev: PathBuf,
    /// Load averages.
    pub loadavg: PathBuf,
    /// Memory statistics.
    pub meminfo: PathBuf,
    /// Directory holding `AC/` and `BAT*/` supply entries.
    pub power_supply: PathBuf,
    /// Single-line host name.
    pub hostname: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            net_dev: PathBuf::from("/proc/net/dev"),
            loadavg: PathBuf::from("/proc/loadavg"),
            meminfo: PathBuf::from("/proc/meminfo"),
            power_supply: PathBuf::from("/sys/class/power_supply"),
            hostname: PathBuf::from("/etc/hostname"),
        }
    }
}

impl Sources {
    /// Returns the default paths re-rooted below `root`.
    ///
    /// `Sources::under("/tmp/fake")` reads `/tmp/fake/proc/meminfo` and so on.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let reroot = |p: PathBuf| root.join(p.strip_prefix("/").unwrap_or(p.as_path()));
        let d = Self::default();
        Self {
            net_dev: reroot(d.net_dev),
            loadavg: reroot(d.loadavg),
            meminfo: reroot(d.meminfo),
            power_supply: reroot(d.power_supply),
            hostname: reroot(d.hostname),
        }
    }
}

/// Labels prefixed to each value, and the rate unit suffixes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Signs {
    pub bps: String,
    pub kibps: String,
    pub mibps: String,
    pub unplugged: String,
    pub plugged: String,
    pub cpu: String,
    pub mem: String,
    pub rx: String,
    pub tx: String,
}

impl Default for Signs {
    fn default() -> Self {
        Self {
            bps: "B/s".into(),
            kibps: "KiB/s".into(),
            mibps: "MiB/s".into(),
            unplugged: "BAT".into(),
            plugged: "AC".into(),
            cpu: "CPU".into(),
            mem: "MEM".into(),
            rx: "RX".into(),
            tx: "TX".into(),
        }
    }
}
