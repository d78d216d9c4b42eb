
use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Command line and environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "banking-ledger", version, about = "In-memory banking ledger served over JSON RPC")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "BANKING_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "BANKING_PORT", default_value_t = 50052)]
    pub port: u16,

    /// One of: error, warn, info, debug, trace.
    #[arg(long, env = "BANKING_LOG_LEVEL", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    /// Commands the ledger actor may have queued before callers wait.
    #[arg(long, env = "BANKING_QUEUE_DEPTH", default_value_t = 256)]
    pub queue_depth: usize,

    /// Print a CSV balance report to stdout on shutdown.
    #[arg(long)]
    pub report: bool
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}
