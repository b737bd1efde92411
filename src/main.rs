/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for orbitals-rs

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = orbitals_rs::cli::Cli::parse();
    orbitals_rs::cli::run(cli)
}
