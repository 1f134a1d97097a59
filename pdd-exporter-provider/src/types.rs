use serde::Deserialize;

use crate::utils::null_default;

/// Value of [`ExportResult::success`] that marks a successful response.
pub const SUCCESS_OK: &str = "ok";

/// One DNS resource record as returned by the provider.
///
/// Values are passed through verbatim; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned record identifier. Not exported; 0 when absent.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub record_id: i64,
    /// Time to live, seconds.
    pub ttl: i64,
    /// Record value (IP address, target host, text, ...).
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub content: String,
    /// Parent domain.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub domain: String,
    /// Fully-qualified name of this record.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub fqdn: String,
    /// Subdomain label (`@` for the apex).
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub subdomain: String,
    /// Record type (`A`, `MX`, `TXT`, ...).
    #[serde(rename = "type", default, deserialize_with = "null_default::deserialize")]
    pub record_type: String,
    /// Priority for MX/SRV records, empty otherwise.
    #[serde(default, deserialize_with = "crate::utils::lenient_string::deserialize")]
    pub priority: String,
}

/// Response envelope of the record listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExportResult {
    /// Domain echoed back by the API.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub domain: String,
    /// Records in provider order.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub records: Vec<DnsRecord>,
    /// `"ok"` on success, anything else on failure.
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub success: String,
    /// Human-readable error, present only on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl ExportResult {
    /// Whether the provider reported success.
    pub fn is_success(&self) -> bool {
        self.success == SUCCESS_OK
    }
}
