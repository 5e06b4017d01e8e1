//! Command line interface

use clap::Parser;
use std::path::PathBuf;

use super::LogFormat;

/// Command line flags; each falls back to its environment variable
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "llm-gateway",
    version,
    about = "HTTP gateway for OpenAI, Anthropic and Google text generation"
)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Upper bound on a single provider call, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Number of HTTP worker threads
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,

    /// Log output format (pretty or json)
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Dotenv file to load instead of `.env`
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}
