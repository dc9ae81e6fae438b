use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for a fetch run.
///
/// None of these are recovered from: the first one aborts the run before any
/// output is written, so the output file is either complete or absent.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure or non-success HTTP status.
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
