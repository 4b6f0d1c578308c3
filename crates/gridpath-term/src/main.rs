use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use gridpath_term::{TermApp, TermConfig};
use tracing_subscriber::EnvFilter;

/// Paint a maze in the terminal and watch a shortest-path search solve it.
#[derive(Parser, Debug)]
#[command(name = "gridpath", version, about)]
struct Cli {
    /// Grid side length, border included.
    #[arg(long, default_value_t = TermConfig::DEFAULT_ROWS)]
    rows: i32,

    /// Pause after each settled cell, in milliseconds.
    #[arg(long, default_value_t = TermConfig::DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Barrier probability used by the scatter key.
    #[arg(long, default_value_t = TermConfig::DEFAULT_DENSITY)]
    density: f64,

    /// Seed for barrier scattering.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not capture the mouse.
    #[arg(long)]
    no_mouse: bool,

    /// Write logs to this file. The terminal is busy drawing, so nothing
    /// is logged without it. Filter with RUST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> TermConfig {
        TermConfig::default()
            .with_rows(self.rows)
            .with_step_delay(Duration::from_millis(self.delay_ms))
            .with_barrier_density(self.density)
            .with_seed(self.seed)
            .with_mouse(!self.no_mouse)
    }
}

fn init_logging(path: &PathBuf) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut app = TermApp::new(cli.config())?;
    app.run()
}
