//! Diagnostic logging for the demo.
//!
//! The subscriber is installed before the command line is parsed, so
//! `RUST_LOG` can surface the preprocessor's own events. `--verbose` is only
//! known once parsing succeeds, so the filter sits behind a reload handle and
//! the raised level applies from then on.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle to the installed subscriber's filter.
#[derive(Debug, Clone)]
pub struct Logging {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::new(format!("hello_args={level},args_prep={level}"))
}

/// Installs a stderr `tracing` subscriber at the default `warn` level.
///
/// `RUST_LOG` takes precedence over the default and over
/// [`Logging::set_verbose`].
pub fn init() -> Logging {
    let (filter, from_env) = EnvFilter::try_from_default_env()
        .map_or_else(|_| (default_filter(false), false), |filter| (filter, true));
    let (filter_layer, filter) = reload::Layer::new(filter);
    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Logging { filter, from_env }
}

impl Logging {
    /// Raises the demo and the preprocessor to `debug` when `verbose` is set.
    ///
    /// Does nothing when the filter came from `RUST_LOG`.
    pub fn set_verbose(&self, verbose: bool) {
        if self.from_env || !verbose {
            return;
        }
        if let Err(err) = self.filter.reload(default_filter(true)) {
            tracing::warn!(error = %err, "failed to raise log level");
        }
    }
}
