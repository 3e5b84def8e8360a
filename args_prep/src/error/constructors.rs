//! Constructors for `PreprocessError`.

use std::ffi::OsStr;

use super::PreprocessError;

impl PreprocessError {
    /// Reports that `parameter` was not supplied.
    #[must_use]
    pub const fn missing(parameter: &'static str) -> Self {
        Self::InvalidArgument { parameter }
    }

    /// Reports that the token at `index` is not valid Unicode.
    #[must_use]
    pub fn non_unicode(index: usize, raw: &OsStr) -> Self {
        Self::NonUnicodeArgument {
            index,
            lossy: raw.to_string_lossy().into_owned(),
        }
    }

    /// Name of the missing parameter for [`Self::InvalidArgument`].
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter } => Some(*parameter),
            Self::NonUnicodeArgument { .. } => None,
        }
    }
}
