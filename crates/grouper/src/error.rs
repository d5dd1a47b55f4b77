//! Error types for `grouper`.

use core::fmt;

/// Result alias for `grouper`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating or decoding input data.
///
/// All errors are detected eagerly, before any clustering work starts. Once
/// the input has been validated, tree construction always succeeds: every
/// merge reduces the number of active clusters by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input could not be decoded into a rating table.
    InvalidFormat(String),

    /// The rating table contains no entities.
    EmptyInput,

    /// An entity has no feature keys at all.
    EmptyRankings {
        /// Name of the offending entity.
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "wrong data format: {msg}"),
            Self::EmptyInput => write!(f, "the rating table contains no entities"),
            Self::EmptyRankings { name } => {
                write!(f, "entity {name:?} has no rated feature keys")
            }
        }
    }
}

impl std::error::Error for Error {}
