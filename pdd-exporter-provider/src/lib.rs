//! # pdd-exporter-provider
//!
//! Client for the record listing endpoint of the Yandex PDD (Yandex.Connect)
//! DNS API.
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | Yandex PDD | `PddToken` request header |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use pdd_exporter_provider::{DnsProvider, YandexPddProvider};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YandexPddProvider::new("your-token".to_string(), Duration::from_secs(30))?;
//!
//!     let result = provider.list_records("example.com").await?;
//!     for record in &result.records {
//!         println!("{} {} {}", record.fqdn, record.record_type, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failure
//! - [`ProviderError::ParseError`] — the body was not the expected JSON
//! - [`ProviderError::InvalidCredentials`], [`ProviderError::DomainNotFound`],
//!   [`ProviderError::PermissionDenied`], [`ProviderError::Unknown`] — the API
//!   answered with `success != "ok"`
//!
//! Nothing is retried.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::DnsProvider;

pub use types::{DnsRecord, ExportResult, SUCCESS_OK};

pub use providers::common::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use providers::YandexPddProvider;

pub use utils::log_sanitizer;
