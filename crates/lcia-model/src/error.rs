use thiserror::Error;

#[derive(Debug, Error)]
pub enum LciaError {
    #[error("{0} is not a supported LCIA method")]
    UnknownMethod(String),
    #[error("failed to parse method metadata: {0}")]
    MethodMetadata(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LciaError>;
