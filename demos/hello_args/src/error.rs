//! Error types for the `hello_args` demo.
//!
//! `HelloArgsError` gathers preprocessing, parsing, and configuration
//! failures so `main` can hand a single error to `color-eyre`.

use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum HelloArgsError {
    /// The raw process arguments could not be preprocessed.
    #[error(transparent)]
    Preprocess(#[from] args_prep::PreprocessError),
    /// The preprocessed tokens were rejected by `clap`.
    #[error("failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),
    /// Merging or extracting the configuration layers failed.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Box<figment::Error>),
    /// A configuration file passed with `--config` does not exist.
    #[error("configuration file not found: {path}")]
    MissingConfigFile {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
    },
    /// The working directory cannot be represented as UTF-8.
    #[error("working directory is not valid UTF-8: {}", .0.display())]
    NonUtf8WorkingDirectory(std::path::PathBuf),
    /// Reading the working directory or writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// `clap` reports these as errors so entry points can print them through
/// [`clap::Error::exit`] and keep the zero exit status.
#[must_use]
pub fn is_display_request(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl HelloArgsError {
    /// Returns `true` when the error wraps a `--help` or `--version` request.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        matches!(self, Self::CliParsing(err) if is_display_request(err))
    }
}

impl From<clap::Error> for HelloArgsError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}

impl From<figment::Error> for HelloArgsError {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(Box::new(err))
    }
}

/// Convenience alias for results returned by the demo.
pub type Result<T, E = HelloArgsError> = std::result::Result<T, E>;
