use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::ExportResult;

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Original error message (PDD sends a short code such as `bad_token`)
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Extra information used while mapping errors (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Domain the request was about (for `DomainNotFound`)
    pub domain: Option<String>,
}

/// Maps raw provider failures onto [`ProviderError`] (internal use)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error messages
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: None,
            raw_message: raw.message,
        }
    }
}

/// A DNS provider that can list every record of a domain.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Fetch all records of `domain` in a single request.
    ///
    /// Only responses the provider marked as successful are returned;
    /// a failure envelope becomes a [`ProviderError`].
    async fn list_records(&self, domain: &str) -> Result<ExportResult>;
}
