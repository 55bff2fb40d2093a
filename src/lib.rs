//! openai-router - relays a single chat message to `OpenAI` from AWS Lambda.
//!
//! The API Lambda receives `{ "gpt_message": "..." }` through API Gateway,
//! fetches the `OpenAI` key from SSM Parameter Store, posts a two-turn chat
//! completion request (a fixed companion persona plus the user's message) and
//! hands the upstream body back to the caller untouched.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SSM Parameter Store for the API key, read on every invocation
//! - reqwest for the chat completions call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use openai_router::api::RequestTranslator;
//! use openai_router::clients::{ReqwestTransport, SsmCredentialProvider};
//! use openai_router::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     openai_router::setup_logging();
//!
//!     let config = AppConfig::default();
//!     let credentials = SsmCredentialProvider::for_region(&config.aws_region).await;
//!     let translator = RequestTranslator::new(config, credentials, ReqwestTransport::default());
//!
//!     let response = translator
//!         .translate(Some(r#"{"gpt_message": "Hello!"}"#))
//!         .await;
//!     println!("{} {}", response.status_code, response.body);
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once, at process start.
///
/// # Example
///
/// ```
/// openai_router::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
