//! # pdd-exporter
//!
//! Exports the DNS records of one Yandex PDD domain into a timestamped CSV
//! file: resolve credentials, fetch the record list once, write the file.
//!
//! The binary wires these pieces together; [`run`] is the whole pipeline and
//! takes any [`DnsProvider`], so it can be driven without network access.

pub mod config;
pub mod error;
pub mod export;

use std::path::PathBuf;

use chrono::Local;
use pdd_exporter_provider::{DnsProvider, YandexPddProvider};

pub use config::{Cli, ExportConfig};
pub use error::{ExportError, Result, EXIT_USAGE};

/// Exit status for a command line clap refused to parse.
///
/// `--help` and `--version` surface as errors too but are not failures.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

/// Build the PDD client for a resolved configuration.
pub fn create_provider(config: &ExportConfig) -> Result<YandexPddProvider> {
    Ok(YandexPddProvider::new(
        config.token.clone(),
        config.request_timeout,
    )?)
}

/// Fetch the records of `config.domain` and write them to a new export file.
///
/// Returns the absolute path of the file. Nothing is written unless the
/// provider reported success.
pub async fn run(config: &ExportConfig, provider: &dyn DnsProvider) -> Result<PathBuf> {
    log::debug!("Fetching records for {} via {}", config.domain, provider.id());
    let result = provider.list_records(&config.domain).await?;

    log::info!(
        "Exporting records from Yandex.Connect for domain: {}",
        result.domain
    );

    let dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => export::executable_dir()?,
    };
    let path = export::export_file_path(&dir, &Local::now());
    let written = export::write_export_file(&path, &result.records)?;

    log::info!("Result file: {}", written.display());
    Ok(written)
}
