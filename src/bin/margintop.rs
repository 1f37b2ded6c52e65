//! margintop - Interactive viewer for back-margin records.
//!
//! Supports two modes:
//! - Live mode (default): fetch records from the back-margin HTTP API
//! - Sample mode: display the built-in sample records
//!
//! Usage:
//!   margintop                              # fetch from the default API URL
//!   margintop --url http://host:3000/api   # fetch from a custom base URL
//!   margintop --sample                     # built-in sample data

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use margintop::api::{HttpSource, RecordSource, SampleSource};
use margintop::tui::App;

/// Default API base URL when neither --url nor the environment is set.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the API base URL.
const API_URL_ENV: &str = "MARGINTOP_API_URL";

/// Interactive viewer for back-margin records.
#[derive(Parser)]
#[command(name = "margintop", about = "Back-margin dashboard", version)]
struct Args {
    /// API base URL. Defaults to $MARGINTOP_API_URL, then localhost.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Use built-in sample data instead of the HTTP API.
    #[arg(long)]
    sample: bool,

    /// Tick interval in milliseconds (clock refresh).
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Increase logging verbosity (-v for info, -vv for debug).
    /// Default is errors only so the terminal UI stays clean.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode: suppress logging entirely, including errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Log level from the verbosity flags. Quiet wins over everything.
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Initializes the tracing subscriber. The TUI owns the terminal, so
/// anything below ERROR is opt-in via -v.
fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("margintop={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let source: Arc<dyn RecordSource> = if args.sample {
        Arc::new(SampleSource::new())
    } else {
        let base_url = args
            .url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Arc::new(HttpSource::new(base_url))
    };

    let app = App::new(source);
    if let Err(e) = app.run(Duration::from_millis(args.tick_ms)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
