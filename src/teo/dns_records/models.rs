//! DNS record data models

use serde::{Deserialize, Serialize};

/// Server-side filter for DescribeDnsRecords
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DnsRecordFilter {
    pub name: String,
    pub values: Vec<String>,
}

/// Request body for DescribeDnsRecords
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsRecordsRequest {
    pub filters: Vec<DnsRecordFilter>,
    pub offset: i64,
    pub limit: i64,
}

/// Request body for DeleteDnsRecords
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDnsRecordsRequest {
    pub ids: Vec<String>,
}

/// One page of DescribeDnsRecords results
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsRecordsResponse {
    pub records: Option<Vec<DnsRecord>>,
    pub total_count: Option<i64>,
}

/// DNS record from the TEO API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct DnsRecord {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub record_type: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub mode: Option<String>,
    pub ttl: Option<i64>,
    pub priority: Option<i64>,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub status: Option<String>,
    pub cname: Option<String>,
    pub locked: Option<bool>,
}

impl DnsRecord {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn record_type(&self) -> &str {
        self.record_type.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn mode(&self) -> &str {
        self.mode.as_deref().unwrap_or("")
    }

    pub fn ttl(&self) -> i64 {
        self.ttl.unwrap_or(0)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }
}
