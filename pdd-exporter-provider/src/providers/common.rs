//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Request timeout (seconds), used when the caller has no preference
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with connect and request timeouts
pub fn create_http_client(request_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .user_agent(concat!("pdd-exporter/", env!("CARGO_PKG_VERSION")))
        .build()
}
