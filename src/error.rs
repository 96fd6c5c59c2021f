#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("input is not a valid json: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("schema mismatch at '{path}': {source}")]
    Schema {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("either bytecode or sources must be provided")]
    MissingInput,
    #[error("unrecognized analysis mode: {0}")]
    InvalidAnalysisMode(String),
    #[error("value was expected to serialize into a json object, got: {0}")]
    NotAnObject(String),
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Schema {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}
