use std::path::PathBuf;

use clap::{Parser, Subcommand};

use osint_recon_core::config::{DEFAULT_MAX_CONCURRENT_PROBES, DEFAULT_PER_CALL_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "osint-recon", version, about = "OSINT recon toolkit")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Write the report to a file instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(long, global = true, help = "Skip the result cache for this run")]
    pub no_cache: bool,
    #[arg(
        long,
        global = true,
        help = "Keep results in memory only, do not touch the cache database"
    )]
    pub no_db: bool,
    #[arg(long, global = true, help = "Path to the cache database file")]
    pub db: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_CONCURRENT_PROBES,
        help = "Maximum platform probes in flight at once"
    )]
    pub concurrency: usize,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_PER_CALL_TIMEOUT_SECS,
        help = "Per-request timeout in seconds"
    )]
    pub timeout: u64,
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        help = "Geolocation provider order, comma-separated (ipwhois, ipapi.co, ip-api)"
    )]
    pub providers: Option<Vec<String>>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Geolocate an IP address
    Ip {
        /// IPv4 or IPv6 address
        addr: String,
    },
    /// Check which platforms a handle exists on
    Handle {
        /// Username to probe
        name: String,
    },
}
