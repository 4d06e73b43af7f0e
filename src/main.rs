//! Replay a recorded touch trace and print the orientation at every frame.
//!
//! ```text
//! touchspin session.json --options presets/slow_spin.toml
//! ```
//!
//! Each frame step produces one JSON line on stdout.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use touchspin::controller::OrientationController;
use touchspin::options::{DecayMode, Options};
use touchspin::replay::{replay, Trace};
use touchspin::TouchspinError;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "touchspin")]
#[command(about = "Replay a touch trace through the orientation controller")]
struct Args {
    /// JSON trace file
    trace: PathBuf,

    /// Controller options (TOML)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Decay the fling by elapsed time instead of once per frame
    #[arg(long)]
    wall_clock: bool,
}

fn run(args: &Args) -> Result<(), TouchspinError> {
    let mut options = match &args.options {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };
    if args.wall_clock {
        options.fling.decay = DecayMode::WallClock;
    }

    let controller = OrientationController::from_options(&options)?;
    let trace = Trace::load(&args.trace)?;
    let samples = replay(controller, &trace);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for sample in &samples {
        serde_json::to_writer(&mut out, sample)
            .map_err(std::io::Error::from)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
