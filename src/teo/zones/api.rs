//! Zone API operations

use futures::stream::{self, StreamExt};
use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{DeleteZoneRequest, DescribeZoneDetailsRequest, Zone};

const DESCRIBE_ZONE_DETAILS: &str = "DescribeZoneDetails";
const DELETE_ZONE: &str = "DeleteZone";

impl TeoClient {
    /// Fetch details for a single zone
    pub async fn describe_zone(&self, zone_id: &str) -> Result<(Zone, serde_json::Value)> {
        debug!("Fetching zone {}", zone_id);
        let request = DescribeZoneDetailsRequest {
            id: zone_id.to_string(),
        };
        self.call(DESCRIBE_ZONE_DETAILS, &request).await
    }

    /// Fetch several zones concurrently, preserving the input order
    pub async fn describe_zones_by_ids(
        &self,
        zone_ids: &[String],
    ) -> Vec<(String, Result<(Zone, serde_json::Value)>)> {
        if zone_ids.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<(usize, String, Result<(Zone, serde_json::Value)>)> =
            stream::iter(zone_ids.iter().enumerate())
                .map(|(index, zone_id)| async move {
                    let result = self.describe_zone(zone_id).await;
                    (index, zone_id.clone(), result)
                })
                .buffer_unordered(api::MAX_CONCURRENT_REQUESTS)
                .collect()
                .await;

        results.sort_by_key(|(index, _, _)| *index);
        results
            .into_iter()
            .map(|(_, zone_id, result)| (zone_id, result))
            .collect()
    }

    /// Delete a zone by ID
    pub async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let request = DeleteZoneRequest {
            id: zone_id.to_string(),
        };
        self.throttle(DELETE_ZONE).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_ZONE, &request).await?;
        Ok(())
    }
}
