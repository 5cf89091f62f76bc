// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # status-monitor
//!
//! Reads Linux system metrics from `/proc/` and `/sys/` and renders each
//! one as a short, fixed-width string for a dwm-style status bar.
//!
//! # Metrics
//! - **Network** — receive/transmit rate over a set of interfaces, from
//!   `/proc/net/dev` deltas between ticks.
//! - **CPU** — 1-minute load average scaled by core count.
//! - **Memory** — application memory as a percentage of the total.
//! - **Power** — AC state, combined battery percentage and time remaining.
//! - **Hostname** — from `/etc/hostname`.
//!
//! # Graceful Degradation
//! No reader fails. A missing file, unparseable content or an unusable
//! aggregate turns into a [`Reading::Failed`] whose marker (e.g.
//! `"CPUERR"`) is displayed in place of the value, and the next tick
//! simply tries again.
//!
//! # Example
//! ```no_run
//! use status_monitor::{online_cores, CpuMetric, Palette};
//!
//! let cpu = CpuMetric::new("/proc/loadavg", online_cores(), "CPU", Palette::default());
//! println!("{}", cpu.sample());
//! ```

mod cpu;
mod error;
mod host;
mod memory;
mod network;
mod power;
pub mod rate;
mod reading;
mod sources;
mod style;
mod value_store;

pub use cpu::{online_cores, CpuMetric};
pub use error::{FailureKind, MonitorError};
pub use host::read_hostname;
pub use memory::{MemoryInfo, MemoryMetric};
pub use network::{NetCounters, NetworkMetric};
pub use power::{BatteryAggregate, PowerMetric, PowerStatus};
pub use rate::RateFormatter;
pub use reading::Reading;
pub use sources::{Signs, Sources};
pub use style::{Palette, Urgency};
pub use value_store::ValueStore;
