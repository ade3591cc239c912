//! Error types for twip operations.
//!
//! Table conversion itself never fails; these cover loading tables and
//! parsing keywords.

use thiserror::Error;

/// Errors that can occur while loading or parsing a table model.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown {kind} keyword: {value}")]
    UnknownKeyword { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
