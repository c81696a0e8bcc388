//! Raygrid - console driver
//!
//! Feeds raw screen coordinates through the full pipeline: resolver,
//! state machine, and the console render/status sinks.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use raygrid::{AppConfig, ConsoleRender, ConsoleStatus, GameSession, cell_center};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Demo => run_demo(),
    }
}

/// Loads the config file if given, otherwise falls back to defaults
/// (camera at (0, 5, 5) looking at the origin, 45 degree FOV, 800x600).
fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    match path {
        Some(p) => Ok(AppConfig::from_file(p)?),
        None => Ok(AppConfig::default()),
    }
}

/// Wires a session to the console sinks. A missing sink would be fatal
/// here, before any input is accepted.
fn build_session(config: &AppConfig) -> Result<GameSession> {
    let session = GameSession::builder(config.build_camera(), config.build_viewport())
        .render_sink(ConsoleRender::new())
        .status_sink(ConsoleStatus)
        .build()?;
    Ok(session)
}

/// Interactive loop: reads commands from stdin until EOF or `quit`.
fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut session = build_session(&config)?;

    println!("Enter 'X Y' screen coordinates, or: reset | resize W H | state | quit");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["reset"] => session.reset(),
            ["state"] => println!("{}", serde_json::to_string_pretty(session.state())?),
            ["resize", w, h] => match (w.parse::<f32>(), h.parse::<f32>()) {
                (Ok(w), Ok(h)) => {
                    session.resize(w, h);
                    info!(w, h, "viewport resized");
                }
                _ => eprintln!("resize expects two numbers"),
            },
            [x, y] => match (x.parse::<f32>(), y.parse::<f32>()) {
                (Ok(x), Ok(y)) => session.pointer_event(x, y),
                _ => eprintln!("expected 'X Y' screen coordinates"),
            },
            _ => eprintln!("unrecognized input: {line}"),
        }
    }

    Ok(())
}

/// Scripted game: X takes the top row while O answers in the middle row,
/// then the board is reset. Clicks are generated by projecting each cell
/// center back through the camera.
fn run_demo() -> Result<()> {
    let config = AppConfig::default();
    let camera = config.build_camera();
    let viewport = config.build_viewport();
    let mut session = build_session(&config)?;

    for index in [0usize, 4, 1, 5, 2] {
        let Some((sx, sy)) = camera.project_to_screen(cell_center(index), viewport) else {
            anyhow::bail!("cell {index} does not project onto the viewport");
        };
        session.pointer_event(sx, sy);
    }

    println!("{}", serde_json::to_string_pretty(session.state())?);
    session.reset();

    Ok(())
}
