use std::fmt;

/// An error that can occur when constructing a matcher.
///
/// Searching never fails; the only fallible operation in this crate is
/// building a matcher from a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern cannot be searched for.
    InvalidPattern {
        /// Why the pattern was rejected.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_pattern(reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            reason: reason.into(),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { reason } => write!(f, "invalid pattern: {reason}"),
        }
    }
}
