//! Outbound HTTP to the chat completions endpoint.
//!
//! Request construction is kept separate from execution so that a bad URL or
//! an API key that cannot be sent as a header is reported as a construction
//! failure, before anything touches the network.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, Url};
use tracing::debug;

use crate::errors::RouterError;

/// A fully-formed POST ready to be sent.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// JSON POST to `url` authorized with `api_key` as a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::RequestBuildError` if the URL does not parse or
    /// the key contains bytes that are not valid in a header value.
    pub fn post_json(url: &str, api_key: &str, body: Vec<u8>) -> Result<Self, RouterError> {
        let url = Url::parse(url).map_err(|e| RouterError::RequestBuildError {
            reason: format!("invalid url {url}: {e}"),
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            RouterError::RequestBuildError {
                reason: format!("invalid authorization header: {e}"),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        Ok(Self { url, headers, body })
    }

    /// Bearer token carried in the `Authorization` header, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
    }
}

/// Response from upstream; the status is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` once and reads the whole body.
    ///
    /// # Errors
    ///
    /// `RouterError::SendError` when the request cannot be delivered,
    /// `RouterError::ReadBodyError` when the body cannot be read.
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, RouterError>;
}

/// `reqwest`-backed transport. No timeout beyond the client defaults, no retry.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, RouterError> {
        let mut req = Request::new(Method::POST, request.url);
        *req.headers_mut() = request.headers;
        *req.body_mut() = Some(request.body.into());

        let response = self
            .client
            .execute(req)
            .await
            .map_err(|e| RouterError::SendError {
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        debug!(status, "Upstream responded");

        let body = response
            .bytes()
            .await
            .map_err(|e| RouterError::ReadBodyError {
                reason: e.to_string(),
            })?;

        Ok(UpstreamResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_sets_headers() {
        let req = OutboundRequest::post_json(
            "https://api.openai.com/v1/chat/completions",
            "sk-test",
            b"{}".to_vec(),
        )
        .unwrap();

        assert_eq!(req.url.as_str(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(
            req.headers.get(CONTENT_TYPE).unwrap(),
            &HeaderValue::from_static("application/json")
        );
        assert_eq!(req.bearer_token(), Some("sk-test"));
        assert_eq!(req.body, b"{}");
    }

    #[test]
    fn test_post_json_rejects_key_with_newline() {
        let err = OutboundRequest::post_json("https://example.com", "sk-\nbad", Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unable to create the HTTP request");
    }

    #[test]
    fn test_post_json_rejects_bad_url() {
        let err = OutboundRequest::post_json("not a url", "sk-test", Vec::new()).unwrap_err();
        assert!(matches!(err, RouterError::RequestBuildError { .. }));
    }
}
