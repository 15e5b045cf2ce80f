//! Command-line entry point for the OSINT recon toolkit.

mod cli;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;

use osint_recon_app::adapters::{MemoryStore, SqliteStore};
use osint_recon_app::{AppState, AppStateBuilder};
use osint_recon_core::services::report::{report_probes, report_resolution};
use osint_recon_core::traits::CacheStore;
use osint_recon_core::{CoreError, ReconConfig};
use osint_recon_provider::{default_provider_order, GeoProviderKind};

use cli::{Cli, Commands};

const DEFAULT_DB_FILE: &str = "osint_recon_cache.db";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Cli::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let store = match build_store(&args).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open cache database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = match AppStateBuilder::new().cache_store(store).config(config).build() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_expected() {
                eprintln!("{e}");
            } else {
                log::error!("{e}");
                eprintln!("{e}");
            }
            if let CoreError::ResolutionExhausted { failures, .. } = &e {
                for failure in failures {
                    eprintln!("  {}: {}", failure.provider, failure.reason);
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Cli, app: &AppState) -> Result<(), CoreError> {
    let doc = match &args.command {
        Commands::Ip { addr } => {
            let result = app.resolve_ip(addr).await?;
            report_resolution(&result)
        }
        Commands::Handle { name } => {
            let (subject, results) = app.probe_handle(name).await?;
            report_probes(&subject, &results)
        }
    };

    output::emit(&doc, args.json, args.output.as_deref())
        .map_err(|e| CoreError::StorageError(format!("Failed to write report: {e}")))
}

fn build_config(args: &Cli) -> Result<ReconConfig, String> {
    let provider_order = match &args.providers {
        Some(names) => names
            .iter()
            .map(|name| {
                GeoProviderKind::from_str(name)
                    .map_err(|_| format!("Unknown provider '{name}' (expected ipwhois, ipapi.co, or ip-api)"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => default_provider_order(),
    };

    Ok(ReconConfig {
        caching_enabled: !args.no_cache,
        max_concurrent_probes: args.concurrency,
        per_call_timeout_secs: args.timeout,
        provider_order,
    })
}

async fn build_store(args: &Cli) -> Result<Arc<dyn CacheStore>, CoreError> {
    if args.no_db {
        return Ok(Arc::new(MemoryStore::new()));
    }
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
    let store = SqliteStore::new(&db_path).await?;
    Ok(Arc::new(store))
}
