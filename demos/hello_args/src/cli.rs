//! Command-line surface of the `hello_args` demo.
//!
//! Raw process arguments are first normalised by [`ArgsPreprocessor`] so the
//! boolean switches may be written bare (`--debug`) and the short options may
//! carry their value attached (`-uadmin`). `clap` then parses the normalised
//! tokens into [`CommandLine`].

use std::ffi::OsString;

use args_prep::ArgsPreprocessor;
use camino::Utf8PathBuf;
use clap::Parser;
use serde::Serialize;

use crate::error::Result;

/// Options that act as boolean switches.
pub const FLAG_ARGS: [&str; 3] = ["--standalone", "--debug", "--verbose"];

/// Short options whose value may be written attached to the option.
pub const SHORT_ARGS: [&str; 3] = ["-u", "-p", "-c"];

/// Program name used when the argument list is empty.
pub const PROGRAM_NAME: &str = "hello-args";

/// Command-line surface exposed by the demo.
///
/// Serialising a `CommandLine` yields only the settings that were supplied,
/// keyed by their [`AppSettings`](crate::settings::AppSettings) field names,
/// so it can be merged over lower-precedence configuration layers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Parser, Serialize)]
#[command(
    name = "hello-args",
    bin_name = "hello-args",
    about = "Prints application settings layered from files, environment, and CLI",
    version
)]
pub struct CommandLine {
    /// Runs without contacting external services.
    #[arg(long = "standalone", value_name = "BOOL")]
    #[serde(rename = "is_standalone", skip_serializing_if = "Option::is_none")]
    pub standalone: Option<bool>,
    /// Enables debug mode.
    #[arg(long = "debug", value_name = "BOOL")]
    #[serde(rename = "is_debug", skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Emits diagnostic logging on stderr.
    #[arg(long = "verbose", value_name = "BOOL")]
    #[serde(skip)]
    pub verbose: Option<bool>,
    /// User name to connect as.
    #[arg(short = 'u', long = "username", value_name = "NAME")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for the user.
    #[arg(short = 'p', long = "password", value_name = "SECRET")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Reads settings from this file instead of the `appsettings` files.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    #[serde(skip)]
    pub config_path: Option<Utf8PathBuf>,
}

impl CommandLine {
    /// Parses the arguments of the current process.
    ///
    /// # Errors
    ///
    /// Returns an error when an argument is not valid Unicode or when `clap`
    /// rejects the preprocessed tokens, including `--help` and `--version`
    /// requests.
    pub fn try_parse_env() -> Result<Self> {
        let program = std::env::args_os()
            .next()
            .unwrap_or_else(|| OsString::from(PROGRAM_NAME));
        let tokens = preprocessor().preprocess_env()?;
        Self::try_parse_tokens(program, tokens)
    }

    /// Parses `args`, whose first item is the program name.
    ///
    /// Everything after the program name is normalised with [`preprocessor`]
    /// before being handed to `clap`.
    ///
    /// # Errors
    ///
    /// Returns an error when an argument is not valid Unicode or when `clap`
    /// rejects the preprocessed tokens.
    pub fn try_parse_preprocessed<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw = args.into_iter().map(Into::<OsString>::into);
        let program = raw.next().unwrap_or_else(|| OsString::from(PROGRAM_NAME));
        let tokens = preprocessor().preprocess_os(raw)?;
        Self::try_parse_tokens(program, tokens)
    }

    fn try_parse_tokens(program: OsString, tokens: Vec<String>) -> Result<Self> {
        tracing::debug!(count = tokens.len(), "parsing preprocessed arguments");
        let full_args = std::iter::once(program).chain(tokens.into_iter().map(OsString::from));
        Ok(Self::try_parse_from(full_args)?)
    }

    /// Whether diagnostic logging was requested.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

/// Builds the preprocessor for the demo's flag and short options.
#[must_use]
pub fn preprocessor() -> ArgsPreprocessor {
    ArgsPreprocessor::new(FLAG_ARGS, SHORT_ARGS)
}
