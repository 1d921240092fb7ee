// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `facet`: command-line front end for `facet-math`.
//!
//! Each subcommand calls exactly one library operation and prints the
//! result. Saved preferences (`facet_cli.json`) pick the default output
//! format, angle unit and precision; flags override them per invocation.
//!
//! Invariants:
//! - Results go to stdout, diagnostics (tracing) to stderr.
//! - A missing or unreadable config never stops a command from running.

mod commands;
mod config;
mod lossless;
mod prefs;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use facet_math::{Argb32, Quat};
use tracing::{debug, warn, Level};

use crate::commands::{HomogeneousInput, TransformLanes};
use crate::config::{ConfigError, ConfigService, FsConfigStore};
use crate::prefs::{CliPrefs, Overrides, PREFS_KEY};

#[derive(Parser)]
#[command(
    name = "facet",
    version,
    about = "Angles, perspective divide, Euler angles, transforms and color lanes",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Emit one JSON document instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Print Euler angles in degrees.
    #[arg(long, global = true)]
    degrees: bool,

    /// Decimal places in text output.
    #[arg(long, global = true, value_name = "N")]
    precision: Option<usize>,

    /// Directory holding `facet_cli.json`.
    #[arg(long, global = true, env = "FACET_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert degrees to radians.
    Deg2rad(AngleArgs),
    /// Convert radians to degrees.
    Rad2deg(AngleArgs),
    /// Divide the leading lanes of `x,w`, `x,y,w` or `x,y,z,w` by `w`.
    Normalize {
        /// Comma-separated lanes.
        #[arg(allow_hyphen_values = true)]
        vector: HomogeneousInput,
    },
    /// Decompose a unit quaternion `x,y,z,w` into yaw/pitch/roll.
    Euler {
        /// Comma-separated quaternion components.
        #[arg(allow_hyphen_values = true)]
        quat: Quat,
    },
    /// Build a scale → rotate → translate matrix (column-major).
    Transform {
        /// Translation `x,y,z` or homogeneous `x,y,z,w`.
        #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
        translation: TransformLanes,
        /// Rotation quaternion `x,y,z,w`.
        #[arg(long, allow_hyphen_values = true, default_value = "0,0,0,1")]
        rotation: Quat,
        /// Scale `x,y,z` or homogeneous `x,y,z,w`.
        #[arg(long, allow_hyphen_values = true, default_value = "1,1,1")]
        scale: TransformLanes,
    },
    /// Show the byte lanes of a packed `#AARRGGBB` color.
    Color {
        /// `#AARRGGBB`, `0xAARRGGBB` or eight hex digits.
        color: Argb32,
    },
}

#[derive(Args)]
struct AngleArgs {
    /// Angle to convert.
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Compute in double precision.
    #[arg(long = "f64")]
    double: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_max_level(if cli.global.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let prefs = load_prefs(cli.global.config_dir.clone()).with_overrides(Overrides {
        json: cli.global.json,
        degrees: cli.global.degrees,
        precision: cli.global.precision,
    });
    debug!(?prefs, "effective preferences");

    let report = match cli.command {
        Commands::Deg2rad(args) => commands::deg2rad(args.value, args.double),
        Commands::Rad2deg(args) => commands::rad2deg(args.value, args.double),
        Commands::Normalize { vector } => commands::normalize(vector),
        Commands::Euler { quat } => commands::euler(quat, prefs.angle_unit),
        Commands::Transform {
            translation,
            rotation,
            scale,
        } => commands::transform(translation, rotation, scale)?,
        Commands::Color { color } => commands::color(color),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::emit(&mut out, &report, &prefs).context("writing result to stdout")?;
    out.flush()?;
    Ok(())
}

/// Best-effort: any config failure falls back to defaults with a warning.
fn load_prefs(dir: Option<PathBuf>) -> CliPrefs {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    let loaded: Result<CliPrefs, ConfigError> =
        store.and_then(|s| ConfigService::new(s).load_or_init(PREFS_KEY));
    loaded.unwrap_or_else(|err| {
        warn!("config unavailable, using defaults: {err}");
        CliPrefs::default()
    })
}
