// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rootbar once`: print a single status line.
//!
//! With no previous sample, the network field shows the traffic since
//! boot rather than a per-second rate.

use status_bar::{StatusBar, StatusConfig};

pub fn execute(config: StatusConfig) -> anyhow::Result<()> {
    let mut bar = StatusBar::new(&config)?;
    let line = bar.compose();

    for reading in line.failures() {
        tracing::info!("degraded: {reading} ({:?})", reading.failure());
    }
    println!("{}", line.join(bar.field_separator()));
    Ok(())
}
