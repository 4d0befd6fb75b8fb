//! DNS record API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{
    DeleteDnsRecordsRequest, DescribeDnsRecordsRequest, DescribeDnsRecordsResponse, DnsRecord,
    DnsRecordFilter,
};

const DESCRIBE_DNS_RECORDS: &str = "DescribeDnsRecords";
const DELETE_DNS_RECORDS: &str = "DeleteDnsRecords";

/// Server-side filter key for record name lookups
const NAME_FILTER: &str = "name";

impl TeoClient {
    /// Find a DNS record by name.
    ///
    /// The API filters server-side but may still return several matches, so
    /// pages are walked until a short page signals the end and the first
    /// match wins. Returns `Ok(None)` when no record carries the name.
    pub async fn describe_dns_record(
        &self,
        name: &str,
    ) -> Result<Option<(DnsRecord, serde_json::Value)>> {
        debug!("Searching for DNS record '{}'", name);
        self.throttle(DESCRIBE_DNS_RECORDS).await;

        let page_size = api::DEFAULT_PAGE_SIZE;
        let mut offset: i64 = 0;
        let mut found: Option<(DnsRecord, serde_json::Value)> = None;

        loop {
            let request = DescribeDnsRecordsRequest {
                filters: vec![DnsRecordFilter {
                    name: NAME_FILTER.to_string(),
                    values: vec![name.to_string()],
                }],
                offset,
                limit: page_size,
            };

            self.throttle(DESCRIBE_DNS_RECORDS).await;
            let (page, raw): (DescribeDnsRecordsResponse, _) =
                self.call(DESCRIBE_DNS_RECORDS, &request).await?;

            let records = page.records.unwrap_or_default();
            if records.is_empty() {
                break;
            }
            let fetched = records.len() as i64;
            debug!("Page at offset {} returned {} records", offset, fetched);

            if found.is_none() {
                if let Some(first) = records.into_iter().next() {
                    found = Some((first, raw));
                }
            }

            if fetched < page_size {
                break;
            }
            offset += page_size;
        }

        Ok(found)
    }

    /// Delete DNS records by ID, all in a single call
    pub async fn delete_dns_records(&self, record_ids: &[String]) -> Result<()> {
        let request = DeleteDnsRecordsRequest {
            ids: record_ids.to_vec(),
        };
        self.throttle(DELETE_DNS_RECORDS).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_DNS_RECORDS, &request).await?;
        Ok(())
    }
}
