use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} must not be blank")]
    InvalidArgument(&'static str),
    #[error("failed to parse config resource: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("unexpected status code: {0}")]
    Status(u16),
    #[error("failed to convert response body: {0}")]
    Convert(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[cfg(any(feature = "sync", feature = "async"))]
impl Error {
    /// Wrap a transport-level failure, keeping the underlying cause.
    pub(crate) fn network<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Network(Box::new(cause))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
