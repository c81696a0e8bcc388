//! Command-line interface for raygrid.

use clap::{Parser, Subcommand};

/// Raygrid - 3D tic-tac-toe with ray-picked board input
#[derive(Parser, Debug)]
#[command(name = "raygrid")]
#[command(about = "3D tic-tac-toe with ray-picked board input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session driven by screen coordinates on stdin
    Play {
        /// Path to a TOML config file (camera pose, viewport)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Scripted demonstration game (X takes the top row)
    Demo,
}
