//! The argument preprocessor.
//!
//! Tokens are rewritten in one left-to-right pass with a single token of
//! lookahead. Each token is handled by the first rule that applies:
//!
//! 1. A token equal to a registered flag is kept. When no token follows, or
//!    the next token starts with `-`, [`IMPLICIT_FLAG_VALUE`] is appended.
//!    The next token is never consumed by this rule.
//! 2. A token of two or more characters starting with `-` is matched against
//!    the registered short options, longest first. A bare match is kept as
//!    is; a match with trailing text is split into the option and its value.
//! 3. Everything else is kept as is.

mod builder;
mod short;

use std::collections::HashSet;
use std::ffi::OsString;

use tracing::{debug, trace};

use crate::error::{PreprocessError, Result};

pub use self::builder::ArgsPreprocessorBuilder;
use self::short::{ShortMatch, ShortOptions};

/// Value appended after a flag that has no explicit value.
pub const IMPLICIT_FLAG_VALUE: &str = "true";

/// Rewrites command-line tokens for a fixed set of flag and short options.
///
/// The preprocessor is immutable once built, so a single instance can be
/// shared freely between call sites and threads.
///
/// # Examples
///
/// ```rust
/// use args_prep::ArgsPreprocessor;
///
/// let preprocessor = ArgsPreprocessor::new(["--standalone", "--debug"], ["-u", "-p"]);
/// let tokens = preprocessor.preprocess(&["--standalone", "--debug", "false", "-ppwd"]);
/// assert_eq!(
///     tokens,
///     ["--standalone", "true", "--debug", "false", "-p", "pwd"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsPreprocessor {
    flags: HashSet<String>,
    shorts: ShortOptions,
}

impl ArgsPreprocessor {
    /// Creates a preprocessor from the flag names and short option names.
    ///
    /// Either collection may be empty. Duplicate names are harmless.
    #[must_use]
    pub fn new<F, FS, S, SS>(flag_names: F, short_names: S) -> Self
    where
        F: IntoIterator<Item = FS>,
        FS: Into<String>,
        S: IntoIterator<Item = SS>,
        SS: Into<String>,
    {
        Self {
            flags: flag_names.into_iter().map(Into::into).collect(),
            shorts: ShortOptions::new(short_names),
        }
    }

    /// Starts a builder that insists on both name collections being supplied.
    pub const fn builder() -> ArgsPreprocessorBuilder {
        ArgsPreprocessorBuilder::new()
    }

    /// Returns `true` when `token` is exactly a registered flag name.
    #[must_use]
    pub fn is_flag(&self, token: &str) -> bool {
        self.flags.contains(token)
    }

    /// Iterates over the registered flag names in no particular order.
    pub fn flag_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags.iter().map(String::as_str)
    }

    /// Registered short option names in matching order, longest first.
    #[must_use]
    pub fn short_names(&self) -> &[String] {
        self.shorts.as_slice()
    }

    /// Rewrites `args`, returning a new token list.
    ///
    /// The output is never shorter than the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use args_prep::ArgsPreprocessor;
    ///
    /// let preprocessor = ArgsPreprocessor::new(["--IsFlag", "--OtherFlag"], ["-u"]);
    /// let tokens =
    ///     preprocessor.preprocess(&["--IsFlag", "-uadmin", "--OtherFlag", "value"]);
    /// assert_eq!(
    ///     tokens,
    ///     ["--IsFlag", "true", "-u", "admin", "--OtherFlag", "value"]
    /// );
    /// ```
    #[must_use]
    pub fn preprocess<A>(&self, args: &[A]) -> Vec<String>
    where
        A: AsRef<str>,
    {
        let mut processed = Vec::with_capacity(args.len().saturating_mul(2));
        let mut tokens = args.iter().map(AsRef::as_ref).peekable();

        while let Some(token) = tokens.next() {
            if self.is_flag(token) {
                processed.push(token.to_owned());
                if tokens.peek().is_none_or(|next| next.starts_with('-')) {
                    trace!(flag = token, "appending implicit flag value");
                    processed.push(IMPLICIT_FLAG_VALUE.to_owned());
                }
                continue;
            }

            match self.shorts.match_token(token) {
                Some(ShortMatch::Attached { option, value }) => {
                    trace!(option, "splitting attached short option value");
                    processed.push(option.to_owned());
                    processed.push(value.to_owned());
                }
                Some(ShortMatch::Bare) | None => processed.push(token.to_owned()),
            }
        }

        debug!(
            input = args.len(),
            output = processed.len(),
            "preprocessed command-line tokens"
        );
        processed
    }

    /// Rewrites OS-provided tokens such as those from [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::NonUnicodeArgument`] for the first token
    /// that is not valid Unicode. The index is relative to `args`.
    pub fn preprocess_os<I, T>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let tokens = args
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let token: OsString = raw.into();
                token
                    .into_string()
                    .map_err(|invalid| PreprocessError::non_unicode(index, &invalid))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.preprocess(&tokens))
    }

    /// Rewrites the arguments of the current process, skipping the program
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::NonUnicodeArgument`] when an argument is
    /// not valid Unicode. Index `0` is the first argument after the program
    /// name.
    pub fn preprocess_env(&self) -> Result<Vec<String>> {
        self.preprocess_os(std::env::args_os().skip(1))
    }
}

/// Rewrites `args` in one call, treating every input as required.
///
/// `None` stands for an input that was never supplied; an empty slice or
/// collection is fine. Inputs are checked in parameter order and nothing is
/// produced when one is missing.
///
/// # Errors
///
/// Returns [`PreprocessError::InvalidArgument`] naming the first missing
/// input.
///
/// # Examples
///
/// ```rust
/// use args_prep::{PreprocessError, preprocess_args};
///
/// let args = ["-abvalue"];
/// let tokens = preprocess_args(Some(args.as_slice()), Some(Vec::<&str>::new()), Some(["-a", "-ab"]))?;
/// assert_eq!(tokens, ["-ab", "value"]);
///
/// let missing = preprocess_args(Some(args.as_slice()), None::<[&str; 0]>, Some(["-a"]));
/// assert_eq!(missing, Err(PreprocessError::missing("flag_names")));
/// # Ok::<(), PreprocessError>(())
/// ```
pub fn preprocess_args<A, F, FS, S, SS>(
    args: Option<&[A]>,
    flag_names: Option<F>,
    short_names: Option<S>,
) -> Result<Vec<String>>
where
    A: AsRef<str>,
    F: IntoIterator<Item = FS>,
    FS: Into<String>,
    S: IntoIterator<Item = SS>,
    SS: Into<String>,
{
    let tokens = args.ok_or(PreprocessError::missing("args"))?;
    let flags = flag_names.ok_or(PreprocessError::missing("flag_names"))?;
    let shorts = short_names.ok_or(PreprocessError::missing("short_names"))?;
    Ok(ArgsPreprocessor::new(flags, shorts).preprocess(tokens))
}
