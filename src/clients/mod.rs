//! Clients for the two external collaborators

pub mod credentials;
pub mod llm_client;

pub use credentials::{CredentialProvider, SsmCredentialProvider};
pub use llm_client::{HttpTransport, OutboundRequest, ReqwestTransport, UpstreamResponse};
