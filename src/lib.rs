pub mod address;
pub mod cli;
pub mod config;
pub mod models;
pub mod retrieval;

use std::io::{self, Write};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::{Config, ConfigError};
use crate::retrieval::{HomeInfoRetriever, LlmError, OpenAiClient, RetrievalError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not create generation client: {0}")]
    Client(#[from] LlmError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI entry point: read config, ask for an address, print the lookup.
pub fn run() -> Result<(), AppError> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    tracing::debug!(?config, "Configuration loaded");

    let retriever = HomeInfoRetriever::new(Box::new(OpenAiClient::from_config(&config)?));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let address = cli::read_address(&mut input, &mut stdout)?;

    let info = retriever.get_home_information(&address.full_address())?;

    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        write!(stdout, "{}", cli::render_report(&info))?;
    }
    stdout.flush()?;

    Ok(())
}
