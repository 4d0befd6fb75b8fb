//! Application proxy API operations

use log::debug;

use crate::error::Result;
use crate::teo::TeoClient;

use super::models::{
    ApplicationProxy, DeleteApplicationProxyRequest, DescribeApplicationProxyDetailRequest,
};

const DESCRIBE_APPLICATION_PROXY_DETAIL: &str = "DescribeApplicationProxyDetail";
const DELETE_APPLICATION_PROXY: &str = "DeleteApplicationProxy";

impl TeoClient {
    /// Fetch application proxy details within a zone
    pub async fn describe_application_proxy(
        &self,
        zone_id: &str,
        proxy_id: &str,
    ) -> Result<(ApplicationProxy, serde_json::Value)> {
        debug!("Fetching application proxy {} in zone {}", proxy_id, zone_id);
        let request = DescribeApplicationProxyDetailRequest {
            zone_id: zone_id.to_string(),
            proxy_id: proxy_id.to_string(),
        };
        self.call(DESCRIBE_APPLICATION_PROXY_DETAIL, &request).await
    }

    /// Delete an application proxy within a zone
    pub async fn delete_application_proxy(&self, zone_id: &str, proxy_id: &str) -> Result<()> {
        let request = DeleteApplicationProxyRequest {
            zone_id: zone_id.to_string(),
            proxy_id: proxy_id.to_string(),
        };
        self.throttle(DELETE_APPLICATION_PROXY).await;
        let (_, _): (serde_json::Value, _) = self.call(DELETE_APPLICATION_PROXY, &request).await?;
        Ok(())
    }
}
