// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for a reproducible game.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Let the computer strategy play the player hand.
    #[clap(long, short)]
    auto: bool,
    /// Print the final game state as JSON.
    #[clap(long, short)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = terminal::Config {
        seed: cli.seed,
        auto: cli.auto,
        json: cli.json,
    };

    terminal::run(config)
}
