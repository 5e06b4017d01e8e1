//! LLM Gateway - HTTP front end for multiple text-generation vendors

use clap::Parser;
use llm_gateway::config::{Cli, Config};
use llm_gateway::server;
use llm_gateway::utils::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
