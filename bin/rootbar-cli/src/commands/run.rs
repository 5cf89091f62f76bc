// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rootbar run`: publish a status line every second until interrupted.

use status_bar::{CommandSink, StatusBar, StatusConfig, StdoutSink};

pub async fn execute(config: StatusConfig, stdout: bool) -> anyhow::Result<()> {
    let bar = StatusBar::new(&config)?;

    if stdout {
        tracing::info!("printing status lines to stdout");
        run_until_interrupted(bar.run(StdoutSink)).await
    } else {
        let sink = CommandSink::new(&config.title_command)?;
        tracing::info!("publishing status lines via {}", sink.program());
        run_until_interrupted(bar.run(sink)).await
    }
}

async fn run_until_interrupted(
    publisher: impl std::future::Future<Output = ()>,
) -> anyhow::Result<()> {
    tokio::select! {
        () = publisher => Ok(()),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("interrupted, stopping");
            Ok(())
        }
    }
}
