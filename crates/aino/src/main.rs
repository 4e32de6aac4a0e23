//! Aino binary.
//!
//! Launches the terminal UI against the configured content-generation
//! backend.

use aino::{run_tui, warn_on_newspaper_drift, ApiClient, ApiConfig, GenerationBackend, Language};
use clap::Parser;
use std::sync::Arc;

/// Terminal client for the Aino content-adaptation backend.
#[derive(Parser)]
#[command(name = "aino", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Backend base URL, overriding the configuration files
    #[arg(long)]
    api_url: Option<String>,

    /// Start with Finnish labels
    #[arg(long)]
    finnish: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match cli.api_url {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::load()?,
    };
    let client = ApiClient::new(config);

    // Cross-check the bundled brand enumeration in the background.
    {
        let client = client.clone();
        tokio::spawn(async move { warn_on_newspaper_drift(&client).await });
    }

    let language = if cli.finnish {
        Language::Fi
    } else {
        Language::En
    };
    let backend: Arc<dyn GenerationBackend> = Arc::new(client);
    run_tui(backend, language).await?;

    Ok(())
}
