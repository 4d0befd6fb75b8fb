//! Load balancing data models

use serde::{Deserialize, Serialize};

/// Request body for DescribeLoadBalancingDetail
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLoadBalancingDetailRequest {
    pub zone_id: String,
    pub load_balancing_id: String,
}

/// Request body for DeleteLoadBalancing
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLoadBalancingRequest {
    pub zone_id: String,
    pub load_balancing_id: String,
}

/// Load balancing details from the TEO API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancing {
    pub load_balancing_id: Option<String>,
    pub zone_id: Option<String>,
    pub host: Option<String>,
    #[serde(rename = "Type")]
    pub lb_type: Option<String>,
    #[serde(rename = "TTL")]
    pub ttl: Option<i64>,
    pub status: Option<String>,
    pub cname: Option<String>,
    pub update_time: Option<String>,
}

impl LoadBalancing {
    pub fn id(&self) -> &str {
        self.load_balancing_id.as_deref().unwrap_or("")
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("")
    }

    pub fn lb_type(&self) -> &str {
        self.lb_type.as_deref().unwrap_or("")
    }

    pub fn ttl(&self) -> i64 {
        self.ttl.unwrap_or(0)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn cname(&self) -> &str {
        self.cname.as_deref().unwrap_or("")
    }
}
