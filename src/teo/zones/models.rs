//! Zone data models

use serde::{Deserialize, Serialize};

/// Request body for DescribeZoneDetails
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZoneDetailsRequest {
    pub id: String,
}

/// Request body for DeleteZone
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteZoneRequest {
    pub id: String,
}

/// Zone details from the TEO API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "Type")]
    pub zone_type: Option<String>,
    pub paused: Option<bool>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
    pub cname_status: Option<String>,
    pub area: Option<String>,
    pub name_servers: Option<Vec<String>>,
    pub original_name_servers: Option<Vec<String>>,
}

impl Zone {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn zone_type(&self) -> &str {
        self.zone_type.as_deref().unwrap_or("")
    }

    pub fn paused(&self) -> bool {
        self.paused.unwrap_or(false)
    }

    pub fn created_on(&self) -> &str {
        self.created_on.as_deref().unwrap_or("")
    }

    pub fn cname_status(&self) -> &str {
        self.cname_status.as_deref().unwrap_or("")
    }

    /// Name servers assigned by the platform, joined for display
    pub fn name_servers_joined(&self) -> String {
        self.name_servers.as_deref().unwrap_or_default().join(", ")
    }
}
