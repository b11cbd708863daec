use thiserror::Error;

/// Error returned when a pattern can't be compiled.
///
/// This is the only failure of the crate: once a [`crate::Regex`] exists,
/// matching and replacing never fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The pattern is not valid syntax.
    #[error("invalid pattern `{pattern}`: {message}")]
    Syntax { pattern: String, message: String },

    /// The compiled pattern exceeds the configured size limit.
    #[error("pattern `{pattern}` too large (limit: {limit} bytes)")]
    TooLarge { pattern: String, limit: usize },
}

impl Error {
    pub(crate) fn from_engine(pattern: &str, err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(limit) => Error::TooLarge {
                pattern: pattern.to_string(),
                limit,
            },
            regex::Error::Syntax(message) => Error::Syntax {
                pattern: pattern.to_string(),
                message,
            },
            // regex::Error is non-exhaustive
            other => Error::Syntax {
                pattern: pattern.to_string(),
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
