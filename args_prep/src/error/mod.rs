//! Error types produced by the argument preprocessor.

mod constructors;

use thiserror::Error;

/// Errors that can occur while preprocessing command-line tokens.
///
/// Every degenerate but present input (an empty token list, an empty token,
/// a lone `-`) is valid. Errors are reserved for inputs that were never
/// supplied and for tokens that cannot be represented as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PreprocessError {
    /// A required input was not supplied.
    ///
    /// An empty collection is acceptable; a missing one is not.
    #[error("required input `{parameter}` was not supplied")]
    InvalidArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A token handed over as an OS string was not valid Unicode.
    #[error("argument {index} is not valid Unicode: {lossy:?}")]
    NonUnicodeArgument {
        /// Zero-based position of the offending token in the supplied input.
        index: usize,
        /// Lossy rendering of the token for diagnostics.
        lossy: String,
    },
}

/// Convenience alias for results returned by this crate.
pub type Result<T, E = PreprocessError> = std::result::Result<T, E>;
