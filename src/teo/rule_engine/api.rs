//! Rule engine API operations

use log::debug;

use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{
    DeleteRulesRequest, DescribeRulesRequest, DescribeRulesResponse, RuleFilter, RuleSetting,
};

const DESCRIBE_RULES: &str = "DescribeRules";
const DELETE_RULES: &str = "DeleteRules";

/// Server-side filter key for rule ID lookups
const RULE_ID_FILTER: &str = "RULE_ID";

impl TeoClient {
    /// Find a rule engine entry by ID within a zone.
    ///
    /// A single filtered call is enough here; the API returns at most a
    /// handful of rules per zone. Returns `Ok(None)` when the ID matches
    /// nothing.
    pub async fn describe_rule(
        &self,
        zone_id: &str,
        rule_id: &str,
    ) -> Result<Option<(RuleSetting, serde_json::Value)>> {
        debug!("Searching for rule {} in zone {}", rule_id, zone_id);
        let request = DescribeRulesRequest {
            zone_id: zone_id.to_string(),
            filters: vec![RuleFilter {
                name: RULE_ID_FILTER.to_string(),
                values: vec![rule_id.to_string()],
            }],
        };
        self.throttle(DESCRIBE_RULES).await;
        let (response, raw): (DescribeRulesResponse, _) =
            self.call(DESCRIBE_RULES, &request).await?;

        let rule = response.rule_list.unwrap_or_default().into_iter().next();
        Ok(rule.map(|rule| (rule, raw)))
    }

    /// Delete a rule engine entry within a zone
    pub async fn delete_rule(&self, zone_id: &str, rule_id: &str) -> Result<()> {
        let request = DeleteRulesRequest {
            zone_id: zone_id.to_string(),
            rule_ids: vec![rule_id.to_string()],
        };
        self.throttle(DELETE_RULES).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_RULES, &request).await?;
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
    async fn test_describe_rule_success() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Action", "DescribeRules"))
            .and(body_json(json!({
                "ZoneId": "zone-2a3b4c5d",
                "Filters": [{"Name": "RULE_ID", "Values": ["rule-9c8d7e6f"]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "ZoneId": "zone-2a3b4c5d",
                    "RuleList": [{
                        "RuleId": "rule-9c8d7e6f",
                        "RuleName": "redirect-to-https",
                        "Status": "enable",
                        "Rules": [{"Conditions": [], "Actions": []}]
                    }],
                    "RequestId": "req-rule"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client.describe_rule("zone-2a3b4c5d", "rule-9c8d7e6f").await;

        assert!(result.is_ok());
        let (rule, raw) = result.unwrap().expect("rule should be found");
        assert_eq!(rule.id(), "rule-9c8d7e6f");
        assert_eq!(rule.name(), "redirect-to-https");
        assert_eq!(raw["RequestId"], "req-rule");
    }

    #[tokio::test]
    async fn test_describe_rule_takes_first_of_list() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "RuleList": [
                        {"RuleId": "rule-first", "RuleName": "first", "Status": "enable"},
                        {"RuleId": "rule-second", "RuleName": "second", "Status": "disable"}
                    ],
                    "RequestId": "req-two"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client.describe_rule("zone-2a3b4c5d", "rule-first").await;

        assert!(result.is_ok());
        let (rule, _) = result.unwrap().expect("rule should be found");
        assert_eq!(rule.id(), "rule-first");
    }

    #[tokio::test]
    async fn test_describe_rule_no_match() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "ZoneId": "zone-2a3b4c5d",
                    "RuleList": [],
                    "RequestId": "req-empty"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client.describe_rule("zone-2a3b4c5d", "rule-missing").await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_describe_rule_error_is_propagated() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "Error": {
                        "Code": "ResourceNotFound.ZoneNotFound",
                        "Message": "zone does not exist"
                    },
                    "RequestId": "req-bad-zone"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client.describe_rule("zone-gone", "rule-9c8d7e6f").await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Api { code, .. } => assert_eq!(code, "ResourceNotFound.ZoneNotFound"),
            other => panic!("Expected TeoError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_rule_success() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Action", "DeleteRules"))
            .and(body_json(json!({
                "ZoneId": "zone-2a3b4c5d",
                "RuleIds": ["rule-9c8d7e6f"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {"RequestId": "req-delete"}
            })))
            .mount(&mock_server)
            .await;

        let result = client.delete_rule("zone-2a3b4c5d", "rule-9c8d7e6f").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_rule_error_is_propagated() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "Error": {"Code": "InvalidParameter", "Message": "malformed rule id"},
                    "RequestId": "req-bad"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client.delete_rule("zone-2a3b4c5d", "not-a-rule").await;
        assert!(result.is_err());
    }
}
