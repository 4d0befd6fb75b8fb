//! Rule engine data models

use serde::{Deserialize, Serialize};

/// Filter clause for DescribeRules
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct RuleFilter {
    pub name: String,
    pub values: Vec<String>,
}

/// Request body for DescribeRules
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRulesRequest {
    pub zone_id: String,
    pub filters: Vec<RuleFilter>,
}

/// Request body for DeleteRules
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRulesRequest {
    pub zone_id: String,
    pub rule_ids: Vec<String>,
}

/// Response payload for DescribeRules
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRulesResponse {
    pub zone_id: Option<String>,
    pub rule_list: Option<Vec<RuleSetting>>,
}

/// A rule engine entry from the TEO API
///
/// Rule branches are kept as raw JSON because their shape varies with
/// the configured actions and conditions.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct RuleSetting {
    pub rule_id: Option<String>,
    pub rule_name: Option<String>,
    pub status: Option<String>,
    pub rules: Option<serde_json::Value>,
}

impl RuleSetting {
    pub fn id(&self) -> &str {
        self.rule_id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.rule_name.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Number of top-level rule branches
    pub fn branch_count(&self) -> usize {
        self.rules
            .as_ref()
            .and_then(|value| value.as_array())
            .map(|branches| branches.len())
            .unwrap_or(0)
    }
}
