//! Yandex PDD DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ExportResult;

use super::{YandexPddProvider, PROVIDER_ID};

#[async_trait]
impl DnsProvider for YandexPddProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_records(&self, domain: &str) -> Result<ExportResult> {
        let result = self.get_dns_list(domain).await?;
        log::debug!(
            "[{PROVIDER_ID}] {} records for {}",
            result.records.len(),
            result.domain
        );
        Ok(result)
    }
}
