//! TEO HTTP client for API interactions
//!
//! Every operation goes through [`TeoClient::call`]: one signed POST per
//! action, with the response envelope unwrapped and API errors returned
//! verbatim as [`TeoError::Api`].

use chrono::Utc;
use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TeoError};
use crate::teo::auth;
use crate::teo::credentials::Credentials;
use crate::teo::ratelimit::ActionLimiter;

/// TEO API client
pub struct TeoClient {
    client: Client,
    credentials: Credentials,
    region: Option<String>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Batch mode - disables interactive prompts
    batch_mode: bool,
    limiter: ActionLimiter,
}

impl TeoClient {
    /// Create a new TEO client with optimized connection settings
    pub fn new(credentials: Credentials, region: Option<String>) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            region,
            base_url_override: None,
            batch_mode: false,
            limiter: ActionLimiter::default(),
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(credentials: Credentials, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            region: None,
            base_url_override: Some(base_url),
            batch_mode: false,
            limiter: ActionLimiter::default(),
        }
    }

    /// Set batch mode (disables interactive prompts for large result sets)
    pub fn set_batch_mode(&mut self, batch: bool) {
        self.batch_mode = batch;
    }

    /// Point the client at a different endpoint, e.g. a regional gateway
    pub fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.base_url_override = endpoint;
    }

    /// Check if batch mode is enabled
    pub fn is_batch_mode(&self) -> bool {
        self.batch_mode
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}", api::HOST)
    }

    /// Host the request is sent to, as it appears in the signed `Host` header
    fn signing_host(&self) -> String {
        self.base_url()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string()
    }

    /// Wait for the rate limiter before issuing `action`.
    ///
    /// Only bulk operations (deletes and paginated describes) are throttled;
    /// single-resource describes skip this entirely.
    pub(crate) async fn throttle(&self, action: &str) {
        self.limiter.check(action).await;
    }

    /// Issue one signed API call and unwrap the response envelope.
    ///
    /// Returns the typed response together with the raw `Response` object so
    /// callers can render fields the typed model does not carry. An `Error`
    /// object inside the envelope is returned as [`TeoError::Api`] with the
    /// server's code and message untouched.
    pub(crate) async fn call<Q, R>(
        &self,
        action: &str,
        request: &Q,
    ) -> Result<(R, serde_json::Value)>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(request)?;
        let timestamp = Utc::now().timestamp();
        let host = self.signing_host();
        let authorization = auth::build_authorization(
            &self.credentials.secret_id,
            &self.credentials.secret_key,
            &host,
            body.as_bytes(),
            timestamp,
        );

        let url = format!("{}/", self.base_url().trim_end_matches('/'));
        debug!("Calling {} at: {}", action, url);

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .header("Content-Type", auth::CONTENT_TYPE)
            .header("X-TC-Action", action)
            .header("X-TC-Version", api::VERSION)
            .header("X-TC-Timestamp", timestamp.to_string());
        if let Some(ref region) = self.region {
            builder = builder.header("X-TC-Region", region);
        }

        let response = match builder.body(body.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API {} failed, request body [{}], reason [{}]", action, body, e);
                return Err(TeoError::Http(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(
                "API {} failed, request body [{}], status [{}], response [{}]",
                action, body, status, text
            );
            return Err(TeoError::Api {
                code: format!("HTTP{}", status.as_u16()),
                message: if text.is_empty() {
                    format!("{} request failed", action)
                } else {
                    text
                },
                request_id: None,
            });
        }

        let raw: serde_json::Value = response.json().await?;
        let envelope = raw.get("Response").cloned().ok_or_else(|| {
            TeoError::Json(format!("{} response has no Response envelope", action))
        })?;
        let request_id = envelope
            .get("RequestId")
            .and_then(|v| v.as_str())
            .map(String::from);

        if let Some(api_error) = envelope.get("Error") {
            let code = api_error
                .get("Code")
                .and_then(|v| v.as_str())
                .unwrap_or("UnknownError")
                .to_string();
            let message = api_error
                .get("Message")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            error!(
                "API {} failed, request body [{}], reason [{}: {}]",
                action, body, code, message
            );
            return Err(TeoError::Api {
                code,
                message,
                request_id,
            });
        }

        debug!(
            "API {} succeeded, request body [{}], response body [{}]",
            action, body, envelope
        );

        let typed: R = serde_json::from_value(envelope.clone())?;
        Ok((typed, envelope))
    }
}

#[cfg(test)]
impl TeoClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            Credentials {
                secret_id: "AKIDtest".to_string(),
                secret_key: "test-key".to_string(),
            },
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_default() {
        let client = TeoClient::new(
            Credentials {
                secret_id: "id".to_string(),
                secret_key: "key".to_string(),
            },
            None,
        );
        assert_eq!(client.base_url(), "https://teo.tencentcloudapi.com");
    }

    #[test]
    fn test_base_url_override() {
        let client = TeoClient::test_client("http://127.0.0.1:9999");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_set_endpoint() {
        let mut client = TeoClient::new(
            Credentials {
                secret_id: "id".to_string(),
                secret_key: "key".to_string(),
            },
            None,
        );
        client.set_endpoint(Some("https://teo.internal.example.com".to_string()));
        assert_eq!(client.base_url(), "https://teo.internal.example.com");

        client.set_endpoint(None);
        assert_eq!(client.base_url(), "https://teo.tencentcloudapi.com");
    }

    #[test]
    fn test_signing_host_strips_scheme() {
        let client = TeoClient::test_client("http://127.0.0.1:9999/");
        assert_eq!(client.signing_host(), "127.0.0.1:9999");

        let client = TeoClient::new(
            Credentials {
                secret_id: "id".to_string(),
                secret_key: "key".to_string(),
            },
            None,
        );
        assert_eq!(client.signing_host(), "teo.tencentcloudapi.com");
    }

    #[test]
    fn test_batch_mode() {
        let mut client = TeoClient::test_client("http://127.0.0.1:9999");
        assert!(!client.is_batch_mode());

        client.set_batch_mode(true);
        assert!(client.is_batch_mode());

        client.set_batch_mode(false);
        assert!(!client.is_batch_mode());
    }

    #[tokio::test]
    async fn test_call_success_unwraps_envelope() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Action", "DescribeZoneDetails"))
            .and(header("X-TC-Version", "2022-01-06"))
            .and(header_exists("Authorization"))
            .and(header_exists("X-TC-Timestamp"))
            .and(body_json(json!({"ZoneId": "zone-2a3b"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "ZoneId": "zone-2a3b",
                    "ZoneName": "example.com",
                    "RequestId": "req-123"
                }
            })))
            .mount(&mock_server)
            .await;

        let result: Result<(serde_json::Value, serde_json::Value)> = client
            .call("DescribeZoneDetails", &json!({"ZoneId": "zone-2a3b"}))
            .await;

        assert!(result.is_ok());
        let (typed, raw) = result.unwrap();
        assert_eq!(typed["ZoneName"], "example.com");
        assert_eq!(raw["RequestId"], "req-123");
    }

    #[tokio::test]
    async fn test_call_api_error_is_verbatim() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {
                    "Error": {
                        "Code": "ResourceNotFound.NoZone",
                        "Message": "the zone does not exist"
                    },
                    "RequestId": "req-err"
                }
            })))
            .mount(&mock_server)
            .await;

        let result: Result<(serde_json::Value, serde_json::Value)> =
            client.call("DescribeZoneDetails", &json!({"ZoneId": "nope"})).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Api {
                code,
                message,
                request_id,
            } => {
                assert_eq!(code, "ResourceNotFound.NoZone");
                assert_eq!(message, "the zone does not exist");
                assert_eq!(request_id.as_deref(), Some("req-err"));
            }
            other => panic!("Expected TeoError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_http_error() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result: Result<(serde_json::Value, serde_json::Value)> =
            client.call("DeleteZone", &json!({"ZoneId": "zone-2a3b"})).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Api { code, .. } => assert_eq!(code, "HTTP503"),
            other => panic!("Expected TeoError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_missing_envelope() {
        let mock_server = MockServer::start().await;
        let client = TeoClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&mock_server)
            .await;

        let result: Result<(serde_json::Value, serde_json::Value)> =
            client.call("DescribeZoneDetails", &json!({})).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            TeoError::Json(msg) => assert!(msg.contains("Response envelope")),
            other => panic!("Expected TeoError::Json, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_sends_region_header_when_set() {
        let mock_server = MockServer::start().await;
        let mut client = TeoClient::test_client(&mock_server.uri());
        client.region = Some("ap-guangzhou".to_string());

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-TC-Region", "ap-guangzhou"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": {"RequestId": "req-region"}
            })))
            .mount(&mock_server)
            .await;

        let result: Result<(serde_json::Value, serde_json::Value)> =
            client.call("DescribeZoneDetails", &json!({})).await;

        assert!(result.is_ok());
    }
}
