//! Origin group data models

use serde::{Deserialize, Serialize};

/// Request body for DescribeOriginGroupDetail
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOriginGroupDetailRequest {
    pub zone_id: String,
    pub origin_id: String,
}

/// Request body for DeleteOriginGroup
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOriginGroupRequest {
    pub zone_id: String,
    pub origin_id: String,
}

/// Origin group details from the TEO API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct OriginGroup {
    pub origin_id: Option<String>,
    pub origin_name: Option<String>,
    #[serde(rename = "Type")]
    pub group_type: Option<String>,
    #[serde(rename = "Record")]
    pub records: Option<Vec<OriginRecord>>,
    pub update_time: Option<String>,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub origin_type: Option<String>,
    pub application_proxy_used: Option<bool>,
    pub load_balancing_used: Option<bool>,
}

/// A single origin inside a group
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct OriginRecord {
    pub record: Option<String>,
    pub port: Option<i64>,
    pub weight: Option<i64>,
    pub record_id: Option<String>,
}

impl OriginGroup {
    pub fn id(&self) -> &str {
        self.origin_id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.origin_name.as_deref().unwrap_or("")
    }

    pub fn group_type(&self) -> &str {
        self.group_type.as_deref().unwrap_or("")
    }

    pub fn origin_type(&self) -> &str {
        self.origin_type.as_deref().unwrap_or("")
    }

    pub fn zone_name(&self) -> &str {
        self.zone_name.as_deref().unwrap_or("")
    }

    pub fn update_time(&self) -> &str {
        self.update_time.as_deref().unwrap_or("")
    }

    pub fn record_count(&self) -> usize {
        self.records.as_deref().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether any proxy or load balancer still references this group
    pub fn in_use(&self) -> bool {
        self.application_proxy_used.unwrap_or(false) || self.load_balancing_used.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_serialization() {
        let request = DescribeOriginGroupDetailRequest {
            zone_id: "zone-2a3b4c5d".to_string(),
            origin_id: "origin-1f2e3d".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ZoneId": "zone-2a3b4c5d",
                "OriginId": "origin-1f2e3d"
            })
        );
    }

    #[test]
    fn test_origin_group_deserialization() {
        let json = r#"{
            "OriginId": "origin-1f2e3d",
            "OriginName": "primary-origins",
            "Type": "weight",
            "Record": [
                {"Record": "10.0.0.1", "Port": 443, "Weight": 60, "RecordId": "record-a"},
                {"Record": "10.0.0.2", "Port": 443, "Weight": 40, "RecordId": "record-b"}
            ],
            "UpdateTime": "2022-06-01T08:00:00Z",
            "ZoneId": "zone-2a3b4c5d",
            "ZoneName": "example.com",
            "OriginType": "self",
            "ApplicationProxyUsed": false,
            "LoadBalancingUsed": true
        }"#;

        let group: OriginGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.id(), "origin-1f2e3d");
        assert_eq!(group.name(), "primary-origins");
        assert_eq!(group.group_type(), "weight");
        assert_eq!(group.origin_type(), "self");
        assert_eq!(group.record_count(), 2);
        assert!(group.in_use());

        let records = group.records.as_deref().unwrap();
        assert_eq!(records[0].record.as_deref(), Some("10.0.0.1"));
        assert_eq!(records[0].port, Some(443));
        assert_eq!(records[0].weight, Some(60));
    }

    #[test]
    fn test_origin_group_deserialization_minimal() {
        let group: OriginGroup = serde_json::from_str("{}").unwrap();
        assert_eq!(group.id(), "");
        assert_eq!(group.record_count(), 0);
        assert!(!group.in_use());
    }

    #[test]
    fn test_in_use_by_application_proxy() {
        let json = r#"{"OriginId": "origin-1", "ApplicationProxyUsed": true}"#;
        let group: OriginGroup = serde_json::from_str(json).unwrap();
        assert!(group.in_use());
    }
}
