//! Load balancing API operations

use log::debug;

use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{
    DeleteLoadBalancingRequest, DescribeLoadBalancingDetailRequest, LoadBalancing,
};

const DESCRIBE_LOAD_BALANCING_DETAIL: &str = "DescribeLoadBalancingDetail";
const DELETE_LOAD_BALANCING: &str = "DeleteLoadBalancing";

impl TeoClient {
    /// Fetch load balancing details within a zone
    pub async fn describe_load_balancing(
        &self,
        zone_id: &str,
        load_balancing_id: &str,
    ) -> Result<(LoadBalancing, serde_json::Value)> {
        debug!(
            "Fetching load balancer {} in zone {}",
            load_balancing_id, zone_id
        );
        let request = DescribeLoadBalancingDetailRequest {
            zone_id: zone_id.to_string(),
            load_balancing_id: load_balancing_id.to_string(),
        };
        self.call(DESCRIBE_LOAD_BALANCING_DETAIL, &request).await
    }

    /// Delete a load balancer within a zone
    pub async fn delete_load_balancing(
        &self,
        zone_id: &str,
        load_balancing_id: &str,
    ) -> Result<()> {
        let request = DeleteLoadBalancingRequest {
            zone_id: zone_id.to_string(),
            load_balancing_id: load_balancing_id.to_string(),
        };
        self.throttle(DELETE_LOAD_BALANCING).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_LOAD_BALANCING, &request).await?;
        Ok(())
    }
}
