//! X API HTTP client.
//!
//! [`ApiTransport`] is the seam between the dispatcher and the network: the
//! production implementation is [`XApiClient`] (reqwest), tests plug in a
//! recording stub. A transport only moves bytes; turning a status code and
//! body into a tool result is done by [`decode_response`] so every
//! transport gets identical error semantics.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use tracing::{debug, error};

use super::binding::EndpointBinding;
use super::error::ToolError;
use crate::core::config::{ApiConfig, Credential};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status ("Too Many Requests").
    pub fn status_text(&self) -> String {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string()
    }
}

/// Something that can send one request to the X API.
///
/// Implementations must issue exactly one request per call and never retry.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Send the request. `Err` means no response was received at all.
    async fn send(&self, binding: &EndpointBinding) -> Result<ApiResponse, ToolError>;
}

/// Map a raw response onto the tool result.
///
/// Non-2xx statuses become [`ToolError::Remote`]; an empty success body is
/// `null`; anything else must be JSON.
pub fn decode_response(response: ApiResponse) -> Result<serde_json::Value, ToolError> {
    if !response.is_success() {
        return Err(ToolError::Remote {
            status: response.status,
            status_text: response.status_text(),
            body: response.body,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }

    serde_json::from_str(&response.body).map_err(|e| ToolError::Decode(e.to_string()))
}

/// reqwest-backed client for the X API v2.
pub struct XApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl XApiClient {
    /// Build the client. Takes ownership of the credential.
    pub fn new(config: ApiConfig) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("XApiMcpServer/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ToolError::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credential: config.credential,
        })
    }

    /// Build the outbound request without sending it.
    pub fn build_request(&self, binding: &EndpointBinding) -> Result<reqwest::Request, ToolError> {
        let url = format!("{}{}", self.base_url, binding.path_and_query());

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.credential.expose()))
            .map_err(|_| ToolError::transport("access token contains invalid header characters"))?;
        bearer.set_sensitive(true);

        let mut request = self
            .http
            .request(binding.method.into(), url)
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &binding.body {
            request = request.json(body);
        }

        request
            .build()
            .map_err(|e| ToolError::transport(e.to_string()))
    }
}

#[async_trait]
impl ApiTransport for XApiClient {
    async fn send(&self, binding: &EndpointBinding) -> Result<ApiResponse, ToolError> {
        let request = self.build_request(binding)?;
        debug!("{} {}", binding.method, binding.path);

        let response = self.http.execute(request).await.map_err(|e| {
            error!("X API request failed to complete: {}", e);
            ToolError::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::HttpMethod;
    use serde_json::json;

    fn test_client() -> XApiClient {
        XApiClient::new(ApiConfig {
            base_url: "https://api.example.test/2/".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 1,
            credential: Credential::new("secret-token"),
        })
        .unwrap()
    }

    #[test]
    fn test_decode_success_json() {
        let value = decode_response(ApiResponse::new(200, r#"{"data":{"deleted":true}}"#)).unwrap();
        assert_eq!(value, json!({ "data": { "deleted": true } }));
    }

    #[test]
    fn test_decode_empty_success_body() {
        assert_eq!(
            decode_response(ApiResponse::new(204, "")).unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_decode_remote_error() {
        let err = decode_response(ApiResponse::new(429, "rate limited")).unwrap_err();
        match err {
            ToolError::Remote {
                status,
                status_text,
                body,
            } => {
                assert_eq!(status, 429);
                assert_eq!(status_text, "Too Many Requests");
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_response(ApiResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, ToolError::Decode(_)));
    }

    #[test]
    fn test_build_get_request() {
        let client = test_client();

        let binding = EndpointBinding {
            method: HttpMethod::Get,
            path: "/tweets/a%2Fb".to_string(),
            query: "tweet.fields=created_at".to_string(),
            body: None,
        };
        let request = client.build_request(&binding).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.test/2/tweets/a%2Fb?tweet.fields=created_at"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer secret-token"
        );
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_post_request_has_json_body() {
        let client = test_client();
        let binding = EndpointBinding {
            method: HttpMethod::Post,
            path: "/users/1/likes".to_string(),
            query: String::new(),
            body: Some(json!({ "tweet_id": "2" })),
        };
        let request = client.build_request(&binding).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(body, json!({ "tweet_id": "2" }));
    }

    #[test]
    fn test_build_delete_request_has_no_body() {
        let client = test_client();
        let request = client
            .build_request(&EndpointBinding::delete("/tweets/123".to_string()))
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::DELETE);
        assert_eq!(request.url().path(), "/2/tweets/123");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_authorization_header_is_sensitive() {
        let client = test_client();
        let request = client
            .build_request(&EndpointBinding::delete("/tweets/1".to_string()))
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).unwrap().is_sensitive());
    }
}
