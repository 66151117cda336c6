use crate::error::ProbeError;
use aws_types::region::Region;
use std::env::var;
use tracing::{debug, warn};
use url::Url;

/// OpenSearch Serverless signs requests with this service name instead of `es`
pub const SERVICE_NAME: &str = "aoss";
/// The collection is provisioned in this region only
pub const REGION: &str = "us-east-1";

/// Settings of the search lambda, read once at cold start and passed to the handler.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// E.g. abc123xyz.us-east-1.aoss.amazonaws.com.
    /// None if COLLECTION_HOST env var is missing or blank.
    pub collection_host: Option<String>,
    /// E.g. employee. Only used for logging.
    pub collection_name: Option<String>,
    /// SigV4 service name
    pub service_name: &'static str,
    pub region: Region,
}

impl ProbeConfig {
    /// Creates a new Config instance from COLLECTION_HOST and COLLECTION_NAME env vars.
    /// Does not panic: a missing host is reported by every invocation instead.
    pub fn from_env() -> Self {
        let config = Self::new(var("COLLECTION_HOST").ok(), var("COLLECTION_NAME").ok());

        match &config.collection_host {
            Some(host) => debug!("Collection host: {host}"),
            None => warn!("COLLECTION_HOST env var is not set. All invocations will fail."),
        }

        config
    }

    pub fn new(collection_host: Option<String>, collection_name: Option<String>) -> Self {
        Self {
            collection_host: non_blank(collection_host),
            collection_name: non_blank(collection_name),
            service_name: SERVICE_NAME,
            region: Region::from_static(REGION),
        }
    }

    /// Returns the URL of the collection.
    /// A bare host name is addressed over HTTPS, a value with a scheme is used as-is.
    pub fn endpoint_url(&self) -> Result<Url, ProbeError> {
        let host = self.collection_host.as_deref().ok_or(ProbeError::MissingEndpoint)?;

        if host.contains("://") {
            Ok(Url::parse(host)?)
        } else {
            Ok(Url::parse(&["https://", host].concat())?)
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
