/// Checks that the lambda can reach and authenticate with the OpenSearch Serverless collection.
use aws_config::BehaviorVersion;
use collection_lambda::{logging, ProbeConfig, SearchHandler};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();
    logging::log_env_vars();

    // read once per cold start and shared by all invocations
    let config = ProbeConfig::from_env();
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(config.region.clone())
        .load()
        .await;

    let handler = SearchHandler::new(config, sdk_config);
    let handler = &handler;

    if let Err(e) = lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.handle(event).await
    }))
    .await
    {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
