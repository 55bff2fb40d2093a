// Lambda bootstrap entry point for the API function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use openai_router::api::{RequestTranslator, handler};
use openai_router::clients::{ReqwestTransport, SsmCredentialProvider};
use openai_router::core::config::AppConfig;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    openai_router::setup_logging();

    let config = AppConfig::default();
    // Clients are built once so warm invocations reuse their connections.
    let credentials = SsmCredentialProvider::for_region(&config.aws_region).await;
    let translator = RequestTranslator::new(config, credentials, ReqwestTransport::default());
    let translator = &translator;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(translator, event).await
    }))
    .await
}
