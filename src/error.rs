use crate::compat::String;

/// Errors raised when a merge call is malformed.
///
/// Every variant is a caller contract violation detected before any merging
/// happens, so a failed call never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// No positional argument; the URL is required
    TooFewArguments,
    /// More positional arguments than the URL and one ordered collection
    TooManyArguments { given: usize },
    /// The ordered parameters argument is not a key/value collection
    InvalidCollection(String),
    /// Separator is neither `&` nor `;`
    InvalidSeparator(String),
    /// Policy name does not match any merge policy
    UnknownPolicy(String),
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewArguments => {
                f.write_str("add_query_params() takes at least 1 argument (0 given)")
            }
            Self::TooManyArguments { given } => write!(
                f,
                "add_query_params() takes at most 2 arguments ({given} given)"
            ),
            Self::InvalidCollection(reason) => write!(
                f,
                "The second argument of add_query_params() is not a key/value collection ({reason})"
            ),
            Self::InvalidSeparator(sep) => {
                write!(f, "Invalid separator {sep:?}, expected '&' or ';'")
            }
            Self::UnknownPolicy(name) => write!(
                f,
                "Unknown merge policy {name:?}, expected append, dedupe or override"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Result type for merge operations
pub type Result<T> = core::result::Result<T, MergeError>;
