//! Error types for the hwdiag rule matcher.

use thiserror::Error;

/// A specialized `Result` type for knowledge-base and front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that can occur while building or loading a knowledge base
/// and while turning user selections into facts.
///
/// The matcher itself never fails; every inference outcome is a [`crate::Verdict`].
#[derive(Error, Debug)]
pub enum Error {
    /// The knowledge-base file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The knowledge-base document is not valid JSON or has the wrong shape.
    #[error("Format error: {0}")]
    Format(#[from] serde_json::Error),

    /// A rule was defined incorrectly.
    #[error("Invalid rule definition: {0}")]
    InvalidRule(String),

    /// A mutually-exclusive condition set was defined incorrectly.
    #[error("Invalid exclusion set: {0}")]
    InvalidExclusion(String),

    /// The user did not select any condition.
    #[error("Input error: Please show alternative options")]
    EmptySelection,

    /// A selection did not name one of the knowledge base's conditions.
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    /// A configuration value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),
}
