//! Yandex PDD error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{YandexPddProvider, PROVIDER_ID};

/// PDD reports failures as a short code in the `error` field
impl ProviderErrorMapper for YandexPddProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_ID
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.message.as_str() {
            // no_token: token header missing
            // bad_token / no_auth / bad_login: token rejected
            "no_token" | "bad_token" | "no_auth" | "bad_login" => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // no_domain: domain parameter missing
            // bad_domain: not connected to this account
            "no_domain" | "bad_domain" => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            "not_allowed" | "prohibited" | "not_master_admin" => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn provider() -> YandexPddProvider {
        YandexPddProvider::new("token".to_string(), Duration::from_secs(1)).unwrap()
    }

    fn map(message: &str) -> ProviderError {
        provider().map_error(
            RawApiError::new(message),
            ErrorContext {
                domain: Some("example.com".to_string()),
            },
        )
    }

    #[test]
    fn token_codes_map_to_invalid_credentials() {
        for code in ["no_token", "bad_token", "no_auth", "bad_login"] {
            assert!(
                matches!(map(code), ProviderError::InvalidCredentials { .. }),
                "{code}"
            );
        }
    }

    #[test]
    fn domain_codes_carry_domain() {
        let e = map("bad_domain");
        assert!(
            matches!(&e, ProviderError::DomainNotFound { domain, .. } if domain == "example.com"),
            "{e:?}"
        );
    }

    #[test]
    fn permission_codes() {
        assert!(matches!(
            map("not_allowed"),
            ProviderError::PermissionDenied { .. }
        ));
    }

    #[test]
    fn free_text_falls_back_to_unknown() {
        let e = map("invalid token");
        assert_eq!(e.to_string(), "[yandex_pdd] An error occurred: invalid token");
    }
}
