use opensearch::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while connecting to the collection.
/// All variants end up as an `error` envelope with status 200.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("COLLECTION_HOST is not set")]
    MissingEndpoint,
    #[error("invalid collection endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("cannot sign requests: {0}")]
    Credentials(String),
    #[error("cannot build the transport: {0}")]
    Transport(#[from] opensearch::http::transport::BuildError),
    #[error("{0}")]
    Request(#[from] opensearch::Error),
    #[error("collection responded with {0}")]
    Status(StatusCode),
}
