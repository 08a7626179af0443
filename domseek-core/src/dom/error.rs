//! Errors raised while reading the host tree

use std::string::FromUtf8Error;

/// Failures while serializing a node back to markup
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("HTML serialization failed: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("serialized HTML is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
