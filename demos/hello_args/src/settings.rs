//! Application settings layered from defaults, files, environment, and CLI.
//!
//! Precedence, lowest first:
//!
//! 1. [`AppSettings::default`]
//! 2. `appsettings.toml`, then `appsettings.development.toml`, both optional
//!    and read from the base directory; `--config PATH` replaces the pair
//!    with one required file
//! 3. environment variables prefixed with [`ENV_PREFIX`]
//! 4. values supplied on the command line

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::CommandLine;
use crate::error::{HelloArgsError, Result};

/// Prefix for environment variables, e.g. `HELLO_ARGS_IS_DEBUG=true`.
pub const ENV_PREFIX: &str = "HELLO_ARGS_";

/// Base settings file.
pub const CONFIG_FILE: &str = "appsettings.toml";

/// Settings file layered over [`CONFIG_FILE`].
pub const DEVELOPMENT_CONFIG_FILE: &str = "appsettings.development.toml";

/// Settings consumed by the demo.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppSettings {
    /// Runs without contacting external services.
    pub is_standalone: bool,
    /// Enables debug mode.
    pub is_debug: bool,
    /// User name to connect as.
    pub username: Option<String>,
    /// Password for the user.
    pub password: Option<String>,
}

impl AppSettings {
    /// Loads the settings for `cli`, resolving files against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`HelloArgsError::MissingConfigFile`] when `--config` names a
    /// file that does not exist, and [`HelloArgsError::Configuration`] when a
    /// layer cannot be read or the merged values do not fit the settings.
    pub fn load(cli: &CommandLine, base_dir: &Utf8Path) -> Result<Self> {
        let settings: Self = Self::figment(cli, base_dir)?.extract()?;
        Ok(settings)
    }

    /// Builds the layered [`Figment`] without extracting it.
    ///
    /// # Errors
    ///
    /// Returns [`HelloArgsError::MissingConfigFile`] when `--config` names a
    /// file that does not exist.
    pub fn figment(cli: &CommandLine, base_dir: &Utf8Path) -> Result<Figment> {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        let with_files = match cli.config_path.as_deref() {
            Some(path) => {
                let resolved = resolve(base_dir, path);
                if !resolved.is_file() {
                    return Err(HelloArgsError::MissingConfigFile { path: resolved });
                }
                tracing::debug!(path = %resolved, "reading explicit settings file");
                defaults.merge(Toml::file(resolved))
            }
            None => defaults
                .merge(Toml::file(base_dir.join(CONFIG_FILE)))
                .merge(Toml::file(base_dir.join(DEVELOPMENT_CONFIG_FILE))),
        };
        Ok(with_files
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(cli)))
    }
}

fn resolve(base_dir: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Returns the current working directory as a UTF-8 path.
///
/// # Errors
///
/// Returns [`HelloArgsError::Io`] when the directory cannot be read and
/// [`HelloArgsError::NonUtf8WorkingDirectory`] when it is not valid UTF-8.
pub fn working_directory() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd).map_err(HelloArgsError::NonUtf8WorkingDirectory)
}
