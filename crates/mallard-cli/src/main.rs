use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mallard_core::config::FlockConfig;
use mallard_core::impls::StdoutFlightLog;
use mallard_core::{Duck, FlightLog, Flock, MallardError};

/// Make some ducks fly.
#[derive(Debug, Parser)]
#[command(name = "mallard", version)]
struct Args {
    /// JSON roster: {"ducks":[{"name":"Donald","flight":"simple"}]}
    #[arg(long, conflicts_with = "name")]
    config: Option<PathBuf>,

    /// Fly a single duck with this name (needs --flight)
    #[arg(long, requires = "flight")]
    name: Option<String>,

    /// Flight kind of the single duck: simple | jet
    #[arg(long, requires = "name")]
    flight: Option<String>,

    /// Print per-strategy flight counts as JSON after flying
    #[arg(long)]
    counts: bool,
}

fn run(args: &Args) -> Result<(), MallardError> {
    if let (Some(name), Some(flight)) = (&args.name, &args.flight) {
        let duck = Duck::from_raw_kind(name.as_str(), flight)?;
        duck.fly();
        return Ok(());
    }

    // (A) roster を用意（指定がなければ Donald と Jetson）
    let config = match &args.config {
        Some(path) => FlockConfig::load(path)?,
        None => FlockConfig::demo(),
    };

    // (B) Duck を生成（未知の flight kind はここで失敗）
    let flock = Flock::from_config(&config)?;

    // (C) 飛ばす（出力は stdout、ログは stderr）
    let counts = flock.fly_all(&StdoutFlightLog);

    if args.counts {
        StdoutFlightLog.record(&counts.to_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{e}");
            ExitCode::FAILURE
        }
    }
}
