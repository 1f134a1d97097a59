//! Yandex PDD (Yandex.Connect) DNS Provider

mod error;
mod http;
mod provider;

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) const PROVIDER_ID: &str = "yandex_pdd";
pub(crate) const PDD_API_BASE: &str = "https://pddimp.yandex.ru/api2/admin";
/// Auth header expected by the PDD API (not Bearer)
pub(crate) const PDD_TOKEN_HEADER: &str = "PddToken";

/// Yandex PDD DNS Provider
pub struct YandexPddProvider {
    pub(crate) client: Client,
    pub(crate) token: String,
    pub(crate) base_url: String,
}

impl YandexPddProvider {
    /// Provider against the public PDD API.
    pub fn new(token: String, request_timeout: Duration) -> Result<Self> {
        Self::with_base_url(token, PDD_API_BASE, request_timeout)
    }

    /// Provider against another API root (staging, local stub).
    ///
    /// `base_url` is the part before `/dns/list`, without a trailing slash.
    pub fn with_base_url(
        token: String,
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let client =
            create_http_client(request_timeout).map_err(|e| ProviderError::NetworkError {
                provider: PROVIDER_ID.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for YandexPddProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexPddProvider")
            .field("token", &mask_secret(&self.token))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
