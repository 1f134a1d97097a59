//! Yandex PDD HTTP 请求方法

use reqwest::StatusCode;

use crate::error::{ProviderError, Result};
use crate::http_client::{status_line, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::ExportResult;

use super::{YandexPddProvider, PDD_TOKEN_HEADER};

impl YandexPddProvider {
    /// URL of the record listing endpoint for `domain`
    pub(crate) fn dns_list_url(&self, domain: &str) -> String {
        format!(
            "{}/dns/list?domain={}",
            self.base_url,
            urlencoding::encode(domain)
        )
    }

    /// GET `/dns/list`, decode the envelope and check `success`
    pub(crate) async fn get_dns_list(&self, domain: &str) -> Result<ExportResult> {
        let url = self.dns_list_url(domain);
        let request = self.client.get(&url).header(PDD_TOKEN_HEADER, &self.token);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        // Error statuses usually still carry a JSON envelope worth decoding
        let result: ExportResult = HttpUtils::parse_json(&response_text, self.provider_name())
            .map_err(|e| match e {
                ProviderError::ParseError { detail, .. } if status != StatusCode::OK => {
                    self.parse_error(format!("HTTP {}: {detail}", status_line(status)))
                }
                other => other,
            })?;

        if !result.is_success() {
            let message = result
                .error
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("[{}] API error: {message}", self.provider_name());
            return Err(self.map_error(
                RawApiError::new(message),
                ErrorContext {
                    domain: Some(domain.to_string()),
                },
            ));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn url_encodes_domain() {
        let provider = YandexPddProvider::with_base_url(
            "t".to_string(),
            "http://127.0.0.1:1/api2/admin/",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(
            provider.dns_list_url("example.com"),
            "http://127.0.0.1:1/api2/admin/dns/list?domain=example.com"
        );
        assert_eq!(
            provider.dns_list_url("a&b=c"),
            "http://127.0.0.1:1/api2/admin/dns/list?domain=a%26b%3Dc"
        );
    }

    #[test]
    fn default_base_targets_public_api() {
        let provider = YandexPddProvider::new("t".to_string(), Duration::from_secs(1)).unwrap();
        assert_eq!(
            provider.dns_list_url("example.com"),
            "https://pddimp.yandex.ru/api2/admin/dns/list?domain=example.com"
        );
    }
}
