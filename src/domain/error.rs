//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of tree and codec invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("child index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node payload is missing required key: {key}")]
    MissingRequiredKey { key: String },

    #[error("tree has no root element")]
    EmptyTree,

    #[error("tree depth {depth} exceeds the nesting limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
