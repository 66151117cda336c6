//! Shared code for the collection lambdas.
//!
//! - `ingest-lambda` echoes the incoming event back via [echo::handler]
//! - `search-lambda` checks it can reach the OpenSearch Serverless collection via [probe::SearchHandler]
//!
//! Both return API Gateway proxy responses. The search lambda always responds with status 200
//! and reports failures in the `message` field of the [envelope::ApiResponse] body.

pub mod config;
pub mod echo;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod probe;

pub use config::ProbeConfig;
pub use envelope::{ApiResponse, Outcome};
pub use error::ProbeError;
pub use probe::{probe_collection, ClusterInfo, SearchHandler};
