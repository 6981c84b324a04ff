use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rdk_methods::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Generate the resource method manifest from the robot SDK
#[derive(Parser, Debug)]
#[command(name = "rdk-methods", version, about, long_about = None)]
struct Args {
    /// Manifest path to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// SDK snapshot to read class definitions from (defaults to the embedded one)
    #[arg(long)]
    sdk: Option<PathBuf>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Logs go to stderr; stdout only carries the confirmation line
fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("rdk-methods started with log level: {:?}", level);
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(args.log_level);

    match generate(args) {
        Ok(output) => {
            println!("Successfully generated {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:?}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: Args) -> Result<PathBuf> {
    let mut config = Config::default();
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if let Some(sdk) = args.sdk {
        config = config.with_sdk_snapshot(sdk);
    }

    rdk_methods::run(&config).context("Failed to generate resource methods")
}
