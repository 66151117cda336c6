/// Echoes the API Gateway event back to the caller.
use collection_lambda::{echo, logging};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    lambda_runtime::run(service_fn(echo::handler)).await?;
    Ok(())
}
