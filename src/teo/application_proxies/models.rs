//! Application proxy data models

use serde::{Deserialize, Serialize};

/// Request body for DescribeApplicationProxyDetail
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationProxyDetailRequest {
    pub zone_id: String,
    pub proxy_id: String,
}

/// Request body for DeleteApplicationProxy
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteApplicationProxyRequest {
    pub zone_id: String,
    pub proxy_id: String,
}

/// Application proxy details from the TEO API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationProxy {
    pub proxy_id: Option<String>,
    pub proxy_name: Option<String>,
    pub proxy_type: Option<String>,
    pub plat_type: Option<String>,
    pub security_type: Option<i64>,
    pub accelerate_type: Option<i64>,
    pub session_persist: Option<bool>,
    pub schedule_value: Option<Vec<String>>,
    pub status: Option<String>,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub update_time: Option<String>,
}

impl ApplicationProxy {
    pub fn id(&self) -> &str {
        self.proxy_id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.proxy_name.as_deref().unwrap_or("")
    }

    pub fn proxy_type(&self) -> &str {
        self.proxy_type.as_deref().unwrap_or("")
    }

    pub fn plat_type(&self) -> &str {
        self.plat_type.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn zone_name(&self) -> &str {
        self.zone_name.as_deref().unwrap_or("")
    }

    pub fn security_enabled(&self) -> bool {
        self.security_type.unwrap_or(0) == 1
    }

    pub fn accelerate_enabled(&self) -> bool {
        self.accelerate_type.unwrap_or(0) == 1
    }

    pub fn schedule_value_joined(&self) -> String {
        self.schedule_value.as_deref().unwrap_or(&[]).join(", ")
    }
}
