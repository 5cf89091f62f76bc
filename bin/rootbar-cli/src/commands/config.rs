// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rootbar config`: print the effective configuration.

use status_bar::StatusConfig;

pub fn execute(config: StatusConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    if config.cores.is_none() {
        println!("# cores = {}  (online cores)", config.resolve_cores());
    }
    Ok(())
}
