//! pdd-exporter entry point
//!
//! Resolves credentials, then runs the export on a single-threaded runtime.
//! Every failure is logged to stderr and turned into a distinct exit status
//! (see [`ExportError::exit_code`]).

use std::process::ExitCode;

use clap::Parser;
use pdd_exporter::{config, create_provider, run, usage_exit_code, Cli, ExportConfig, ExportError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Log to stderr; RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    match export(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn export(cli: Cli) -> Result<(), ExportError> {
    let config = ExportConfig::resolve(config::process_env, cli)?;
    tracing::debug!("Resolved configuration: {config:?}");

    let provider = create_provider(&config)?;
    run(&config, &provider).await?;
    Ok(())
}
