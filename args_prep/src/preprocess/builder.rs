//! Builder for [`ArgsPreprocessor`].

use crate::error::{PreprocessError, Result};

use super::ArgsPreprocessor;

/// Collects the flag and short option names for an [`ArgsPreprocessor`].
///
/// Both collections are required. Supplying an empty collection is fine;
/// never supplying one makes [`build`](Self::build) fail.
///
/// # Examples
///
/// ```rust
/// use args_prep::{ArgsPreprocessor, PreprocessError};
///
/// let preprocessor = ArgsPreprocessor::builder()
///     .flag_names(["--verbose"])
///     .short_names(Vec::<String>::new())
///     .build()?;
/// assert_eq!(preprocessor.preprocess(&["--verbose"]), ["--verbose", "true"]);
///
/// let err = ArgsPreprocessor::builder().flag_names(["--verbose"]).build();
/// assert_eq!(err, Err(PreprocessError::missing("short_names")));
/// # Ok::<(), PreprocessError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ArgsPreprocessorBuilder {
    flag_names: Option<Vec<String>>,
    short_names: Option<Vec<String>>,
}

impl ArgsPreprocessorBuilder {
    /// Creates a builder with neither collection supplied.
    pub const fn new() -> Self {
        Self {
            flag_names: None,
            short_names: None,
        }
    }

    /// Sets the names treated as boolean flags, replacing earlier ones.
    pub fn flag_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flag_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the short option names, replacing earlier ones.
    pub fn short_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the preprocessor.
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::InvalidArgument`] naming `flag_names` or
    /// `short_names` when that collection was never supplied. `flag_names`
    /// is reported first.
    pub fn build(self) -> Result<ArgsPreprocessor> {
        let Self {
            flag_names,
            short_names,
        } = self;
        let flags = flag_names.ok_or(PreprocessError::missing("flag_names"))?;
        let shorts = short_names.ok_or(PreprocessError::missing("short_names"))?;
        Ok(ArgsPreprocessor::new(flags, shorts))
    }
}
