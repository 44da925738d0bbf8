use std::result;
use thiserror::Error;

/// Reasons a tree refuses to be constructed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("no comparator was supplied")]
    MissingComparator,
    #[error("arena chunk size must be non-zero")]
    ZeroChunkSize,
    #[error("zero-sized element type `{type_name}` is not supported")]
    ZeroSizedElement { type_name: &'static str },
}

/// Failures reported by tree construction and insertion.
///
/// Misses during search and deletion are not errors; they are reported as `None`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("invalid tree configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to reserve storage for {requested} nodes")]
    ResourceExhausted { requested: usize },
    #[error("tree is at its capacity of {capacity} nodes")]
    CapacityExceeded { capacity: usize },
}

impl Error {
    /// Returns `true` if the error came from running out of node storage rather than from a bad
    /// configuration.
    pub fn is_exhaustion(&self) -> bool {
        match self {
            Error::ResourceExhausted { .. } | Error::CapacityExceeded { .. } => true,
            Error::Config(_) => false,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
