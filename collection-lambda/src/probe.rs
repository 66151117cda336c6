use crate::config::ProbeConfig;
use crate::envelope::ApiResponse;
use crate::error::ProbeError;
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_types::SdkConfig;
use lambda_runtime::{Error, LambdaEvent};
use opensearch::auth::Credentials;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::OpenSearch;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

/// Returned in `data` when the collection answered the info call
pub const SUCCESS_DATA: &str = "Client Build success!";
/// Prefixes the error text in `data`
pub const FAILURE_PREFIX: &str = "Build failed! ";

/// The part of the `GET /` response we care about.
/// Serverless collections omit some of the fields returned by managed domains.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ClusterInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub version: VersionInfo,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct VersionInfo {
    #[serde(default)]
    pub distribution: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl ClusterInfo {
    /// E.g. `opensearch: 2.11.0`
    pub fn describe(&self) -> String {
        format!(
            "{}: {}",
            self.version.distribution.as_deref().unwrap_or("unknown"),
            self.version.number.as_deref().unwrap_or("unknown")
        )
    }
}

/// Connects to the collection, makes a single info call and returns the parsed response.
///
/// The client and its connection pool live inside this function and are dropped
/// on return, whether the call succeeded or not.
pub async fn probe_collection(config: &ProbeConfig, sdk_config: &SdkConfig) -> Result<ClusterInfo, ProbeError> {
    let url = config.endpoint_url()?;

    // the region is fixed regardless of where the lambda runs
    let sdk_config = sdk_config.to_builder().region(config.region.clone()).build();
    let credentials = Credentials::try_from(sdk_config).map_err(|e| ProbeError::Credentials(e.to_string()))?;

    let transport = TransportBuilder::new(SingleNodeConnectionPool::new(url))
        .auth(credentials)
        .service_name(config.service_name)
        .build()?;
    let client = OpenSearch::new(transport);

    let response = client.info().send().await?;

    let status = response.status_code();
    if !status.is_success() {
        return Err(ProbeError::Status(status));
    }

    Ok(response.json::<ClusterInfo>().await?)
}

/// Lambda handler of the search function.
/// Holds the config read at cold start. All invocations share it.
pub struct SearchHandler {
    config: ProbeConfig,
    sdk_config: SdkConfig,
}

impl SearchHandler {
    pub fn new(config: ProbeConfig, sdk_config: SdkConfig) -> Self {
        Self { config, sdk_config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The event is ignored. Always responds with status 200, see [ApiResponse::error].
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<ApiGatewayProxyResponse, Error> {
        debug!("Request ID: {}", event.context.request_id);

        Ok(self.check().await.into_proxy_response()?)
    }

    /// Runs the probe and converts the outcome into an envelope. Never fails.
    pub async fn check(&self) -> ApiResponse {
        info!(
            "COLLECTION_HOST: {}",
            self.config.collection_host.as_deref().unwrap_or_default()
        );

        match probe_collection(&self.config, &self.sdk_config).await {
            Ok(cluster) => {
                info!(
                    "{} {}, collection: {}",
                    SUCCESS_DATA,
                    cluster.describe(),
                    self.config.collection_name.as_deref().unwrap_or_default()
                );
                ApiResponse::success(SUCCESS_DATA)
            }
            Err(e) => {
                error!("Error: {:?}", e);
                ApiResponse::error([FAILURE_PREFIX, &e.to_string()].concat())
            }
        }
    }
}
