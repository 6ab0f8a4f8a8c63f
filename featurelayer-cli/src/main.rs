//! FeatureLayer CLI - Command-line interface
//!
//! Fetches geographic query features from a map backend and prints them
//! as a summary or as raw JSON.

mod error;
mod output;

use clap::Parser;
use error::CliError;
use featurelayer::backend::{BackendConfig, DEFAULT_BASE_URL};
use featurelayer::logging::{default_log_dir, default_log_file, init_logging};
use featurelayer::service::FeatureLayerService;
use featurelayer::store::FetchOutcome;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "featurelayer")]
#[command(about = "Fetch geographic query features from a map backend", long_about = None)]
#[command(version = featurelayer::VERSION)]
struct Args {
    /// Query identifiers to fetch
    #[arg(required = true)]
    queries: Vec<String>,

    /// Base URL of the map backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Print raw JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.timeout == 0 {
        eprintln!("Error: timeout must be at least 1 second");
        process::exit(1);
    }

    let _logging_guard = match init_logging(default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    let config =
        BackendConfig::new(args.base_url.clone()).with_timeout(Duration::from_secs(args.timeout));
    let service = match FeatureLayerService::from_config(&config) {
        Ok(service) => service,
        Err(e) => CliError::ServiceCreation(e).exit(),
    };

    for query in &args.queries {
        service.fetch_features_for_query(query).await;
    }

    let store = service.store();
    let mut failures = 0;

    for query in &args.queries {
        match store.features_by_id(query) {
            Some(features) => {
                if args.json {
                    match serde_json::to_string_pretty(&features) {
                        Ok(body) => println!("{}", body),
                        Err(e) => CliError::Render(e.to_string()).exit(),
                    }
                } else {
                    println!("{}", output::summarize(query, &features));
                }
            }
            None => {
                failures += 1;
                match store.outcome(query) {
                    Some(FetchOutcome::Failed(reason)) => {
                        eprintln!("Fetch for '{}' failed: {}", query, reason);
                    }
                    _ => {
                        eprintln!("Fetch for '{}' returned no payload", query);
                    }
                }
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
