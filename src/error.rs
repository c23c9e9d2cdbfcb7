//! Error types for tagscribe operations.
//!
//! Serialization itself cannot fail; these cover the host side (reading
//! input, picking the subtree to convert).

use thiserror::Error;

/// Errors that can occur while loading a page or choosing what to convert.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no <{0}> element in document")]
    RootNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
