// src/error.rs
// =============================================================================
// Error type for the library.
//
// Only fatal conditions live here: the file could not be read, the JSON could
// not be parsed, or the HTTP client could not be built. Structural problems in
// the tree and per-URL probe failures are *data* (see validate::StructuralError
// and checker::CheckOutcome), never errors.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArfError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON syntax: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ArfError {
    /// True when the document itself is malformed (as opposed to unreadable).
    pub fn is_parse(&self) -> bool {
        matches!(self, ArfError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, ArfError>;
