//! API Lambda handler: one inbound message in, one chat completion out.
//!
//! Steps run strictly in order and the first failure ends the invocation:
//! - Parse the `{ "gpt_message": ... }` body
//! - Fetch the API key from the credential provider
//! - Serialize the two-turn completion request
//! - Build the authorized POST
//! - Send it and read the body
//!
//! Failures become status/body responses; nothing is retried.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::response::{self, ApiResponse};
use crate::clients::{CredentialProvider, HttpTransport, OutboundRequest, UpstreamResponse};
use crate::core::config::AppConfig;
use crate::core::models::{ChatCompletionRequest, UserRequest};
use crate::errors::RouterError;

pub struct RequestTranslator<C, T> {
    config: AppConfig,
    credentials: C,
    transport: T,
}

impl<C, T> RequestTranslator<C, T>
where
    C: CredentialProvider,
    T: HttpTransport,
{
    #[must_use]
    pub fn new(config: AppConfig, credentials: C, transport: T) -> Self {
        Self {
            config,
            credentials,
            transport,
        }
    }

    /// Runs one request body through the whole flow. Never fails: every
    /// error is already mapped to a response.
    pub async fn translate(&self, body: Option<&str>) -> ApiResponse {
        match self.forward(body).await {
            Ok(upstream) => {
                info!(
                    upstream_status = upstream.status,
                    body_len = upstream.body.len(),
                    "Relaying upstream response"
                );
                response::ok_passthrough(upstream.body)
            }
            Err(e) => {
                error!(status = e.status_code(), reason = %e.reason(), "Request failed: {}", e);
                ApiResponse::from(&e)
            }
        }
    }

    async fn forward(&self, body: Option<&str>) -> Result<UpstreamResponse, RouterError> {
        let user_request = parse_user_request(body)?;

        let api_key = self
            .credentials
            .fetch(&self.config.api_key_parameter)
            .await?;

        let payload =
            ChatCompletionRequest::for_user_message(&self.config, &user_request.gpt_message);

        #[cfg(feature = "debug-logs")]
        info!("Outbound completion payload: {:?}", payload);

        let encoded = serde_json::to_vec(&payload).map_err(|e| RouterError::SerializeError {
            reason: e.to_string(),
        })?;

        let request = OutboundRequest::post_json(&self.config.completions_url, &api_key, encoded)?;

        self.transport.execute(request).await
    }
}

/// Decodes the inbound body. A missing body is treated like an empty one.
///
/// # Errors
///
/// Returns `RouterError::InvalidInput` if the body is not a JSON object with
/// a string `gpt_message`.
pub fn parse_user_request(body: Option<&str>) -> Result<UserRequest, RouterError> {
    let invalid = |reason: String| RouterError::InvalidInput { reason };

    let value: Value =
        serde_json::from_str(body.unwrap_or_default()).map_err(|e| invalid(e.to_string()))?;

    // Derived struct impls also accept a JSON array in field order.
    if !value.is_object() {
        return Err(invalid("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}

/// Lambda handler for the API entrypoint.
///
/// Reads the `body` of the API Gateway proxy event and returns the proxy
/// response. Request-level failures are responses, not `Err`.
///
/// # Errors
///
/// Never returns `Err` today; the signature matches what `service_fn` expects.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<C, T>(
    translator: &RequestTranslator<C, T>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error>
where
    C: CredentialProvider,
    T: HttpTransport,
{
    info!("API Lambda received request");

    let body = event.payload.get("body").and_then(Value::as_str);
    Ok(translator.translate(body).await)
}

pub use self::function_handler as handler;
