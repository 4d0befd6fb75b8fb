//! Origin group API operations

use log::debug;

use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{DeleteOriginGroupRequest, DescribeOriginGroupDetailRequest, OriginGroup};

const DESCRIBE_ORIGIN_GROUP_DETAIL: &str = "DescribeOriginGroupDetail";
const DELETE_ORIGIN_GROUP: &str = "DeleteOriginGroup";

impl TeoClient {
    /// Fetch origin group details within a zone
    pub async fn describe_origin_group(
        &self,
        zone_id: &str,
        origin_id: &str,
    ) -> Result<(OriginGroup, serde_json::Value)> {
        debug!("Fetching origin group {} in zone {}", origin_id, zone_id);
        let request = DescribeOriginGroupDetailRequest {
            zone_id: zone_id.to_string(),
            origin_id: origin_id.to_string(),
        };
        self.call(DESCRIBE_ORIGIN_GROUP_DETAIL, &request).await
    }

    /// Delete an origin group within a zone
    pub async fn delete_origin_group(&self, zone_id: &str, origin_id: &str) -> Result<()> {
        let request = DeleteOriginGroupRequest {
            zone_id: zone_id.to_string(),
            origin_id: origin_id.to_string(),
        };
        self.throttle(DELETE_ORIGIN_GROUP).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_ORIGIN_GROUP, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeoError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_describe_origin_group_success() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Action", "DescribeOriginGroupDetail"))
            .and(body_json(json!({
                "ZoneId": "zone-2a3b4c5d",
                "OriginId": "origin-1f2e3d"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "OriginId": "origin-1f2e3d",
                    "OriginName": "primary-origins",
                    "Type": "weight",
                    "Record": [
                        {"Record": "10.0.0.1", "Port": 443, "Weight": 100, "RecordId": "record-a"}
                    ],
                    "OriginType": "self",
                    "RequestId": "req-og"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .describe_origin_group("zone-2a3b4c5d", "origin-1f2e3d")
            .await;

        assert!(result.is_ok());
        let (group, raw) = result.unwrap();
        assert_eq!(group.id(), "origin-1f2e3d");
        assert_eq!(group.name(), "primary-origins");
        assert_eq!(group.record_count(), 1);
        assert_eq!(raw["RequestId"], "req-og");
    }

    #[tokio::test]
    async fn test_describe_origin_group_error_is_propagated() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "Error": {
                        "Code": "ResourceNotFound",
                        "Message": "origin group not found"
                    },
                    "RequestId": "req-missing"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .describe_origin_group("zone-2a3b4c5d", "origin-gone")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Api { code, .. } => assert_eq!(code, "ResourceNotFound"),
            other => panic!("Expected TeoError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_origin_group_success() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Action", "DeleteOriginGroup"))
            .and(body_json(json!({
                "ZoneId": "zone-2a3b4c5d",
                "OriginId": "origin-1f2e3d"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {"RequestId": "req-delete"}
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .delete_origin_group("zone-2a3b4c5d", "origin-1f2e3d")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_origin_group_still_in_use() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "Error": {
                        "Code": "OperationDenied",
                        "Message": "origin group is referenced by a load balancer"
                    },
                    "RequestId": "req-in-use"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .delete_origin_group("zone-2a3b4c5d", "origin-1f2e3d")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Api { code, message, .. } => {
                assert_eq!(code, "OperationDenied");
                assert!(message.contains("referenced"));
            }
            other => panic!("Expected TeoError::Api, got {:?}", other),
        }
    }
}
