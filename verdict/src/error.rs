//! Decode error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid measurement document: {0}")]
    Json(#[from] serde_json::Error),
}
