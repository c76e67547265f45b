//! Error enum
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are not valid in the requested encoding.
    #[error("{} is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    /// Phrase input ended on a source line with no target line.
    #[error("line {line} has no partner line (phrase input must have an even number of lines)")]
    UnpairedLine { line: usize },

    #[error("line {line}: expected 3 quoted fields, found {found}")]
    MissingField { line: usize, found: usize },

    #[error("line {line}: id '{id}' is not a number")]
    InvalidId { line: usize, id: String },

    #[error("line {line}: id {id} is outside 1..={capacity}")]
    IdOutOfRange {
        line: usize,
        id: usize,
        capacity: usize,
    },

    #[error("capacity {capacity} exceeds the maximum of {max} slots")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("line {line}: id {id} was already used by an earlier line")]
    DuplicateId { line: usize, id: usize },

    #[error("json: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("serialized json is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
