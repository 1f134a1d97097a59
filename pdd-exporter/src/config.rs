//! Credential resolution: environment first, command-line flags second.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pdd_exporter_provider::log_sanitizer::mask_secret;
use pdd_exporter_provider::DEFAULT_REQUEST_TIMEOUT_SECS;

use crate::error::{ExportError, Result};

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "PDD_TOKEN";
/// Environment variable holding the domain to export
pub const DOMAIN_ENV: &str = "PDD_DOMAIN";

/// Command-line flags.
///
/// `-t` and `-d` are only consulted when the matching environment
/// variable is absent.
#[derive(Debug, Clone, Parser)]
#[command(name = "pdd-exporter", version)]
#[command(about = "Export the DNS records of a Yandex PDD domain to CSV", long_about = None)]
pub struct Cli {
    /// Specify PDD Token for export domain's records (when PDD_TOKEN is not set)
    #[arg(short = 't', value_name = "TOKEN")]
    pub token: Option<String>,

    /// Specify domain for export (when PDD_DOMAIN is not set)
    #[arg(short = 'd', value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Directory for the result file [default: directory of the executable]
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

/// Fully resolved settings for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub token: String,
    pub domain: String,
    /// `None` means the directory of the running executable
    pub output_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl ExportConfig {
    /// Resolve token and domain from `env` (usually [`process_env`]) and the parsed flags.
    ///
    /// A variable that is present wins even when empty; the flag is then ignored.
    /// Values are trimmed, so a blank value counts as missing.
    /// The token is checked before the domain, so a run missing both reports the token.
    pub fn resolve<F>(env: F, cli: Cli) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = env_or_flag(&env, TOKEN_ENV, cli.token, "-t").unwrap_or_default();
        let domain = env_or_flag(&env, DOMAIN_ENV, cli.domain, "-d").unwrap_or_default();

        if token.is_empty() {
            return Err(ExportError::MissingToken);
        }
        if domain.is_empty() {
            return Err(ExportError::MissingDomain);
        }

        Ok(Self {
            token,
            domain,
            output_dir: cli.output_dir,
            request_timeout: Duration::from_secs(cli.timeout),
        })
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("token", &mask_secret(&self.token))
            .field("domain", &self.domain)
            .field("output_dir", &self.output_dir)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Environment lookup backed by the real process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_or_flag<F>(env: &F, var: &str, flag: Option<String>, flag_name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = if let Some(value) = env(var) {
        if flag.is_some() {
            log::debug!("{var} is set, ignoring {flag_name}");
        }
        Some(value)
    } else {
        log::debug!("Variable {var} not set");
        flag
    };
    // Surrounding whitespace is never part of a token or domain
    value.map(|v| v.trim().to_string())
}
