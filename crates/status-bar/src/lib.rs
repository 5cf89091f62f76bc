// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # status-bar
//!
//! Turns the readers of `status-monitor` into a dwm status bar: once per
//! second it composes
//!
//! ```text
//! hostname | RX  1.2KiB/s TX  300B/s | CPU 12 | MEM 40 | BAT  87 [3:12] | Mon 02 | 15:04:05
//! ```
//!
//! and publishes it as the X root window name.
//!
//! # Key Components
//! - [`StatusConfig`] — TOML configuration; defaults give the stock bar.
//! - [`StatusBar`] — owns the readers and the network counters, and runs
//!   the tick loop.
//! - [`MetricLine`] — one composed line, with per-field readings.
//! - [`TitleSink`] — where lines go: [`CommandSink`] (`xsetroot -name`)
//!   or [`StdoutSink`].

pub mod clock;
mod config;
mod error;
mod line;
mod publisher;
mod sink;

pub use config::StatusConfig;
pub use error::BarError;
pub use line::MetricLine;
pub use publisher::StatusBar;
pub use sink::{CommandSink, StdoutSink, TitleSink};
