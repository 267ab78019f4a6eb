//! aberredshell entry point.
//!
//! A small 2D application shell written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - a fixed-timestep loop that separates simulation from rendering
//! - a screen state machine (title card, gameplay)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --assets ./assets
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use aberredshell::app::{self, AppOptions};
use aberredshell::error::report_fatal;
use clap::Parser;
use std::path::PathBuf;

/// aberredshell
#[derive(Parser)]
#[command(
    version,
    about = "Fixed-timestep 2D shell: title screen, game screen, bitmap text."
)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Asset directory, tried before the default locations.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Simulation step length in milliseconds (1-1000).
    #[arg(long, value_name = "MS")]
    timestep: Option<u64>,

    /// Run without opening the audio device.
    #[arg(long)]
    mute: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Hello, world! This is aberredshell!");

    let options = AppOptions {
        config_path: cli.config,
        asset_dir: cli.assets,
        timestep_ms: cli.timestep,
        mute: cli.mute,
    };

    match app::run(options) {
        Ok(_) => log::info!("Goodbye!"),
        Err(e) => report_fatal(&e),
    }
}
