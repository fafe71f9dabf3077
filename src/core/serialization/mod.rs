// src/core/serialization/mod.rs

pub mod load;
pub mod save;
pub mod types;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerializationError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        SerializationError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
