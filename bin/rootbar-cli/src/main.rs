// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rootbar
//!
//! dwm status bar daemon: samples network, load, memory and power once a
//! second and publishes them as the X root window name.
//!
//! ## Usage
//! ```bash
//! # Publish via `xsetroot -name` until interrupted
//! rootbar
//!
//! # Print lines instead of setting the root window name
//! rootbar run --stdout
//!
//! # Print a single line and exit
//! rootbar once
//!
//! # Show the effective configuration
//! rootbar --config ~/.config/rootbar.toml config
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rootbar",
    about = "Publishes system metrics as the X root window name",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a status line every second (the default).
    Run {
        /// Print lines to stdout instead of running the title command.
        #[arg(long)]
        stdout: bool,
    },

    /// Print one status line and exit.
    Once,

    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run { stdout: false }) {
        Commands::Run { stdout } => commands::run::execute(config, stdout).await,
        Commands::Once => commands::once::execute(config),
        Commands::Config => commands::config::execute(config),
    }
}
