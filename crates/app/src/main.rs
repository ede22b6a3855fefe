//! Courier - Main Entry Point
//!
//! Usage: `courier <draft.json|draft.yaml>`

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(draft_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: courier <draft.json|draft.yaml>");
        return ExitCode::from(2);
    };

    let settings = match courier::load_settings(|key| std::env::var(key).ok()).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "failed to load settings");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Courier v{}", env!("CARGO_PKG_VERSION"));

    match courier::run(&draft_path, &settings).await {
        Ok(outcome) => {
            println!("{}", outcome.panel_text());
            if outcome.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
