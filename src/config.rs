//! Application configuration from command-line flags and environment
//! variables.
//!
//! Every flag has an environment fallback, so the service runs the same
//! from a shell, a unit file, or a `.env` file:
//!
//! ```bash
//! shortly -a 0.0.0.0:8080 -b https://s.example.com -f /var/lib/shortly/storage.json
//! # or
//! export SERVER_ADDRESS="0.0.0.0:8080"
//! export BASE_URL="https://s.example.com"
//! export FILE_STORAGE_PATH="/var/lib/shortly/storage.json"
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "shortly", version, about = "URL shortener with a durable storage log")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(
        short = 'a',
        long,
        env = "SERVER_ADDRESS",
        default_value = "127.0.0.1:8080"
    )]
    pub server_address: String,

    /// Public base URL prepended to generated short codes.
    #[arg(
        short = 'b',
        long,
        env = "BASE_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    /// Path to the append-only storage log. Created on first use.
    #[arg(
        short = 'f',
        long,
        env = "FILE_STORAGE_PATH",
        default_value = "storage.json"
    )]
    pub file_storage_path: PathBuf,

    /// Keep links in memory only; nothing survives a restart.
    #[arg(long, env = "IN_MEMORY")]
    pub in_memory: bool,

    /// Log level filter (overridden by RUST_LOG when set).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
