use aws_sdk_ssm::error::DisplayErrorContext;
use thiserror::Error;

/// Every way a single invocation can end early.
///
/// `Display` is exactly what the caller sees in the response body, so the
/// wording of each message is part of the public contract. Where a variant
/// has an underlying cause it is kept in `reason` for the logs only.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Error in parsing JSON")]
    InvalidInput { reason: String },

    #[error("{0}")]
    CredentialError(String),

    #[error("Unable to marshal the JSON body")]
    SerializeError { reason: String },

    #[error("Unable to create the HTTP request")]
    RequestBuildError { reason: String },

    #[error("Unable to send the HTTP request")]
    SendError { reason: String },

    #[error("Unable to read the response body")]
    ReadBodyError { reason: String },
}

impl RouterError {
    /// HTTP status reported to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RouterError::InvalidInput { .. } => 400,
            _ => 500,
        }
    }

    /// Underlying cause, for logging.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            RouterError::CredentialError(msg) => msg,
            RouterError::InvalidInput { reason }
            | RouterError::SerializeError { reason }
            | RouterError::RequestBuildError { reason }
            | RouterError::SendError { reason }
            | RouterError::ReadBodyError { reason } => reason,
        }
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_ssm::error::SdkError<E, R>> for RouterError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_ssm::error::SdkError<E, R>) -> Self {
        RouterError::CredentialError(format!("{}", DisplayErrorContext(&error)))
    }
}
