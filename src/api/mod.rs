//! API Lambda handler and response shaping

pub mod handler;
pub mod response;

// Re-export the main handler for convenience
pub use handler::{RequestTranslator, handler, parse_user_request};
pub use response::ApiResponse;
