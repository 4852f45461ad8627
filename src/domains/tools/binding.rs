//! Endpoint bindings - how validated arguments map onto an HTTP request.
//!
//! A binding is the fully translated form of a tool call: the HTTP verb,
//! the path (already percent-encoded), the query string for `GET` and the
//! JSON body for `POST`/`PUT`. Bindings are produced by the tool
//! definitions and consumed by the API client.

use serde::Serialize;
use std::fmt;

use super::error::ToolError;

/// HTTP verbs used by the X API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A translated outbound request, relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointBinding {
    pub method: HttpMethod,

    /// Path below the versioned base URL, e.g. `/tweets/123`.
    pub path: String,

    /// Form-encoded query string without the leading `?`. Empty when there
    /// is nothing to send.
    pub query: String,

    /// JSON body. Only ever set for `POST` and `PUT`.
    pub body: Option<serde_json::Value>,
}

impl EndpointBinding {
    /// A `GET` whose query string is the serialized `params`.
    ///
    /// Fields marked `skip_serializing` (path parameters) and `None` values
    /// are left out; the remaining fields keep their declaration order.
    pub fn get<Q: Serialize>(path: String, params: &Q) -> Result<Self, ToolError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self {
            method: HttpMethod::Get,
            path,
            query,
            body: None,
        })
    }

    /// A `POST` carrying `body` as JSON.
    pub fn post<B: Serialize>(path: String, body: &B) -> Result<Self, ToolError> {
        Ok(Self {
            method: HttpMethod::Post,
            path,
            query: String::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// A `PUT` carrying `body` as JSON.
    pub fn put<B: Serialize>(path: String, body: &B) -> Result<Self, ToolError> {
        Ok(Self {
            method: HttpMethod::Put,
            path,
            query: String::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// A `DELETE`. Never has a body.
    pub fn delete(path: String) -> Self {
        Self {
            method: HttpMethod::Delete,
            path,
            query: String::new(),
            body: None,
        }
    }

    /// Path and query joined the way they go on the wire.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// `skip_serializing_if` predicate for path parameters.
///
/// Path parameters are substituted into the path, so they never appear in
/// the query string or body. Unlike `skip_serializing`, this leaves the
/// input schema without a `writeOnly` marker.
pub fn path_param<T>(_: &T) -> bool {
    true
}

/// Percent-encode a value substituted into a path template.
///
/// Everything outside the RFC 3986 unreserved set is escaped, so ids that
/// contain `/`, `?` or `#` cannot change the shape of the path.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "path_param")]
        id: String,
        max_results: Option<u32>,
        pagination_token: Option<String>,
        #[serde(rename = "tweet.fields")]
        tweet_fields: Option<String>,
    }

    #[test]
    fn test_get_omits_path_and_absent_fields() {
        let params = Params {
            id: "42".to_string(),
            max_results: Some(10),
            pagination_token: None,
            tweet_fields: Some("created_at,author_id".to_string()),
        };
        let binding = EndpointBinding::get(format!("/users/{}/tweets", segment(&params.id)), &params)
            .unwrap();
        assert_eq!(binding.method, HttpMethod::Get);
        assert_eq!(binding.path, "/users/42/tweets");
        assert_eq!(
            binding.query,
            "max_results=10&tweet.fields=created_at%2Cauthor_id"
        );
        assert!(binding.body.is_none());
    }

    #[test]
    fn test_get_without_params_has_no_query_suffix() {
        let params = Params {
            id: "1".to_string(),
            max_results: None,
            pagination_token: None,
            tweet_fields: None,
        };
        let binding = EndpointBinding::get("/tweets/1".to_string(), &params).unwrap();
        assert_eq!(binding.query, "");
        assert_eq!(binding.path_and_query(), "/tweets/1");
    }

    #[test]
    fn test_post_and_delete_bodies() {
        let post = EndpointBinding::post(
            "/users/1/likes".to_string(),
            &json!({ "tweet_id": "2" }),
        )
        .unwrap();
        assert_eq!(post.method, HttpMethod::Post);
        assert_eq!(post.body, Some(json!({ "tweet_id": "2" })));

        let delete = EndpointBinding::delete("/users/1/likes/2".to_string());
        assert_eq!(delete.method, HttpMethod::Delete);
        assert!(delete.body.is_none());
        assert!(delete.query.is_empty());
    }

    #[test]
    fn test_segment_round_trip() {
        for id in ["123", "a/b", "what?now", "50% off", "#tag&x=y", "ünï"] {
            let encoded = segment(id);
            assert!(!encoded.contains('/'));
            assert!(!encoded.contains('?'));
            assert_eq!(urlencoding::decode(&encoded).unwrap(), id);
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}
