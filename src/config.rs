use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_dir: String,
    pub database_url: String,
    pub trash_root: String,
    pub marker_ttl_secs: u64,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Blob/metadata object index")]
pub struct Args {
    /// Host to bind to (overrides OBJECT_INDEX_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides OBJECT_INDEX_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory where blobs are stored (overrides OBJECT_INDEX_STORAGE_DIR)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Database URL (overrides OBJECT_INDEX_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Logical root deleted blobs move under (overrides OBJECT_INDEX_TRASH_ROOT)
    #[arg(long)]
    pub trash_root: Option<String>,

    /// Write-marker lifetime in seconds (overrides OBJECT_INDEX_MARKER_TTL_SECS)
    #[arg(long)]
    pub marker_ttl_secs: Option<u64>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("OBJECT_INDEX_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("OBJECT_INDEX_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing OBJECT_INDEX_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading OBJECT_INDEX_PORT"),
        };
        let env_storage =
            env::var("OBJECT_INDEX_STORAGE_DIR").unwrap_or_else(|_| "./data/blobs".into());
        let env_db = env::var("OBJECT_INDEX_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/meta/object_index.db".into());
        let env_trash = env::var("OBJECT_INDEX_TRASH_ROOT").unwrap_or_else(|_| "/Trash".into());
        let env_marker_ttl = match env::var("OBJECT_INDEX_MARKER_TTL_SECS") {
            Ok(value) => value.parse::<u64>().with_context(|| {
                format!("parsing OBJECT_INDEX_MARKER_TTL_SECS value `{}`", value)
            })?,
            Err(env::VarError::NotPresent) => 30,
            Err(err) => return Err(err).context("reading OBJECT_INDEX_MARKER_TTL_SECS"),
        };

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            storage_dir: args.storage_dir.unwrap_or(env_storage),
            database_url: args.database_url.unwrap_or(env_db),
            trash_root: args.trash_root.unwrap_or(env_trash),
            marker_ttl_secs: args.marker_ttl_secs.unwrap_or(env_marker_ttl),
        };

        Ok((cfg, args.migrate))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
