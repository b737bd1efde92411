/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Options given on the command line override values read from `--config`.
//! Results are written as JSON to stdout or to `--output`.

use crate::coordinates::{CoordinateSystem, Resolution};
use crate::input::OrbitalConfig;
use crate::Orbital;
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Sample count used when a system is switched without a matching resolution
const DEFAULT_COUNT: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hydrogenic orbitals on 3D grids", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Principal quantum number
    #[arg(short, long, global = true)]
    pub n: Option<i32>,

    /// Azimuthal quantum number
    #[arg(short, long, global = true)]
    pub l: Option<i32>,

    /// Magnetic quantum number
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub m: Option<i32>,

    /// Spin quantum number (±0.5)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub spin: Option<f64>,

    /// Coordinate system: radial or cartesian
    #[arg(long, global = true)]
    pub system: Option<CoordinateSystem>,

    /// Samples per axis, either one count or a list such as "r=10,theta=12,phi=8"
    #[arg(long, global = true)]
    pub resolution: Option<String>,

    /// Radial extent of the grid
    #[arg(long, global = true)]
    pub r_max: Option<f64>,

    /// Resolution to interpolate onto after evaluation
    #[arg(long, global = true)]
    pub upsample: Option<String>,

    /// Relative density threshold in (0, 1)
    #[arg(short = 't', long, global = true)]
    pub threshold: Option<f64>,

    /// Write output here instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Evaluate the orbital and print volume statistics
    Summary,
    /// Evaluate the orbital and print the thresholded density as points
    Points,
    /// Print the resolved configuration
    Config,
}

/// Merge the configuration file, if any, with command line overrides
pub fn resolve_config(cli: &Cli) -> anyhow::Result<OrbitalConfig> {
    let mut config = match &cli.config {
        Some(path) => OrbitalConfig::from_json_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => OrbitalConfig::default(),
    };

    if let Some(n) = cli.n {
        config.n = n;
    }
    if let Some(l) = cli.l {
        config.l = l;
    }
    if let Some(m) = cli.m {
        config.m = m;
    }
    if cli.spin.is_some() {
        config.spin = cli.spin;
    }
    if let Some(r_max) = cli.r_max {
        config.r_max = r_max;
    }
    if let Some(threshold) = cli.threshold {
        config.relative_threshold = threshold;
    }

    match (&cli.resolution, cli.system) {
        (Some(resolution), Some(system)) => {
            config.system = system;
            config.resolution = Resolution::parse_for(system, resolution)?;
        }
        (Some(resolution), None) => match resolution.trim().parse::<usize>() {
            Ok(count) => config.resolution = Resolution::uniform(config.system, count),
            Err(_) => {
                let resolution: Resolution = resolution.parse()?;
                config.system = CoordinateSystem::from_resolution(&resolution)?;
                config.resolution = resolution;
            }
        },
        (None, Some(system)) => {
            if system != config.system {
                let count = config
                    .resolution
                    .iter()
                    .map(|(_, count)| count)
                    .max()
                    .unwrap_or(DEFAULT_COUNT);
                config.system = system;
                config.resolution = Resolution::uniform(system, count);
                config.upsample = None;
            }
        }
        (None, None) => {}
    }

    if let Some(upsample) = &cli.upsample {
        config.upsample = Some(Resolution::parse_for(config.system, upsample)?);
    }

    config.validate()?;
    Ok(config)
}

/// Run the selected command and return its JSON output
pub fn render(cli: &Cli) -> anyhow::Result<String> {
    let config = resolve_config(cli)?;

    let output = match cli.command {
        Command::Config => config.to_json_string()?,
        Command::Summary => {
            let summary = Orbital::new(config)?.summary()?;
            serde_json::to_string_pretty(&summary)?
        }
        Command::Points => {
            let points = Orbital::new(config)?.point_cloud()?;
            info!("Retained {} points", points.len());
            serde_json::to_string(&points)?
        }
    };

    Ok(output)
}

/// Entry point for the binary
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output = render(&cli)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("orbitals-rs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&["config", "-n", "3", "-l", "2", "-m", "-2", "-t", "0.2"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!((config.n, config.l, config.m), (3, 2, -2));
        assert_eq!(config.relative_threshold, 0.2);
    }

    #[test]
    fn test_resolution_infers_system() {
        let cli = parse(&["summary", "--resolution", "x=5,y=6,z=7"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.system, CoordinateSystem::Cartesian);
        assert_eq!(config.resolution, Resolution::cartesian(5, 6, 7));

        let cli = parse(&["summary", "--system", "cartesian", "--resolution", "8"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.resolution, Resolution::cartesian(8, 8, 8));

        let cli = parse(&["summary", "--system", "cartesian"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.resolution, Resolution::cartesian(20, 20, 20));
    }

    #[test]
    fn test_invalid_overrides() {
        let cli = parse(&["summary", "-n", "1", "-l", "1"]);
        assert!(resolve_config(&cli).is_err());

        let cli = parse(&["summary", "--system", "radial", "--resolution", "x=5,y=5,z=5"]);
        assert!(resolve_config(&cli).is_err());

        assert!(Cli::try_parse_from(["orbitals-rs", "summary", "--system", "polar"]).is_err());
    }

    #[test]
    fn test_render_summary() {
        let cli = parse(&["summary", "--resolution", "6"]);
        let output = render(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total_cells"], 216);
        assert_eq!(value["orbital"], "1s");
    }
}
