//! Response builders for the API Gateway proxy integration.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::errors::RouterError;

/// Proxy integration response. `body` is always a string; binary payloads are
/// base64-encoded and flagged so the gateway decodes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    /// Raw bytes of the body as the caller will receive them.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the body is flagged as base64 but is not.
    pub fn body_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.is_base64_encoded {
            STANDARD.decode(&self.body)
        } else {
            Ok(self.body.as_bytes().to_vec())
        }
    }
}

/// Returns a 200 carrying `body` unchanged.
#[must_use]
pub fn ok_passthrough(body: Vec<u8>) -> ApiResponse {
    match String::from_utf8(body) {
        Ok(text) => ApiResponse {
            status_code: 200,
            body: text,
            is_base64_encoded: false,
        },
        Err(e) => ApiResponse {
            status_code: 200,
            body: STANDARD.encode(e.into_bytes()),
            is_base64_encoded: true,
        },
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        body: message.to_string(),
        is_base64_encoded: false,
    }
}

impl From<&RouterError> for ApiResponse {
    fn from(error: &RouterError) -> Self {
        err_response(error.status_code(), &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_body_is_not_encoded() {
        let resp = ok_passthrough(br#"{"id":"chatcmpl-1"}"#.to_vec());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "statusCode": 200, "body": "{\"id\":\"chatcmpl-1\"}" })
        );
    }

    #[test]
    fn test_binary_body_is_base64_encoded() {
        let raw = vec![0xff, 0xfe, b'a', 0x00];
        let resp = ok_passthrough(raw.clone());

        assert!(resp.is_base64_encoded);
        assert_eq!(resp.body, "//5hAA==");
        assert_eq!(resp.body_bytes().unwrap(), raw);
        assert_eq!(
            serde_json::to_value(&resp).unwrap()["isBase64Encoded"],
            json!(true)
        );
    }

    #[test]
    fn test_body_bytes_reports_corrupt_base64() {
        let resp = ApiResponse {
            status_code: 200,
            body: "not*base64".to_string(),
            is_base64_encoded: true,
        };
        assert!(resp.body_bytes().is_err());

        let text = ok_passthrough(b"plain".to_vec());
        assert_eq!(text.body_bytes().unwrap(), b"plain");
    }

    #[test]
    fn test_error_response_from_router_error() {
        let err = RouterError::InvalidInput {
            reason: "expected value".to_string(),
        };
        let resp = ApiResponse::from(&err);
        assert_eq!(resp, err_response(400, "Error in parsing JSON"));
    }
}
