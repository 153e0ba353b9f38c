//! dinefind - restaurant search over CSV tables
//!
//! Finds up to five restaurants matching a name, rating, distance, price and
//! cuisine, closest first.

use clap::{Args, Parser, Subcommand};
use dinefind_core::config::Config;
use dinefind_core::dataset::CsvDataSource;
use dinefind_core::error::exit_codes;
use dinefind_search::{SearchError, Searcher};
use dinefind_telemetry::TelemetryConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{convert, cuisines, demo, search};

/// Search restaurants by name, rating, distance, price and cuisine
#[derive(Parser)]
#[command(name = "dinefind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file
    #[arg(long, global = true, env = "DINEFIND_CONFIG")]
    config: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search
    Search(SearchArgs),

    /// Run a set of example searches
    Demo,

    /// Convert the CSV tables into the record cache
    Convert {
        /// Discard cached records and convert again
        #[arg(short, long)]
        force: bool,
    },

    /// List known cuisines in source order
    Cuisines,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Restaurant name, partial or full (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Minimum customer rating
    #[arg(short, long)]
    pub rating: Option<String>,

    /// Maximum distance
    #[arg(short, long)]
    pub distance: Option<String>,

    /// Maximum price
    #[arg(short, long)]
    pub price: Option<String>,

    /// Cuisine name prefix (case-insensitive)
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// Raw request as a JSON object, e.g. '{"restaurantName": "del"}'
    #[arg(long, conflicts_with_all = ["name", "rating", "distance", "price", "cuisine"])]
    pub request: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            config.schema.logging.level.clone()
        },
        show_target: cli.verbose,
        json: cli.log_json,
    };
    if let Err(e) = dinefind_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    if let Some(path) = &config.path {
        tracing::debug!(config = %path.display(), "Using configuration file");
    }

    let source = CsvDataSource::new(config.schema.data.clone());

    let result = match cli.command {
        Commands::Search(args) => search::run(&Searcher::new(source), args).await,
        Commands::Demo => demo::run(&Searcher::new(source), cli.verbose).await,
        Commands::Convert { force } => convert::run(&source, force),
        Commands::Cuisines => cuisines::run(&Searcher::new(source)).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = if let Some(e) = err.downcast_ref::<SearchError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<dinefind_core::Error>() {
        e.exit_code()
    } else {
        exit_codes::FAILURE
    };
    code as u8
}
