use std::path::PathBuf;

use thiserror::Error;

/// Fatal harness errors.
///
/// Any of these aborts the whole run: they mean the harness configuration or
/// the vector corpus is broken, never that the primitive under test
/// misbehaved. Per-vector disagreements go through
/// [`crate::report::Failure`] instead and do not stop the run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read vector file {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vector document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown hash algorithm: {0:?}")]
    UnknownHashAlgorithm(String),

    #[error("malformed hex in field '{field}' of tcId {tc_id}: {source}")]
    Hex {
        field: &'static str,
        tc_id: u32,
        #[source]
        source: hex::FromHexError,
    },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
