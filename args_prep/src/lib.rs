//! Normalises raw command-line tokens before they reach a configuration
//! binder.
//!
//! Many key/value binders expect every option to carry an explicit value and
//! do not understand short options with their value glued on. The
//! [`ArgsPreprocessor`] closes that gap in a single pass:
//!
//! - a registered flag such as `--debug` gains an explicit `true` when no
//!   value follows it;
//! - a registered short option such as `-u` is split from its attached value,
//!   so `-uadmin` becomes `-u admin`.
//!
//! Everything else, including `--key=value` tokens, passes through untouched.
//!
//! ```rust
//! use args_prep::ArgsPreprocessor;
//!
//! let preprocessor = ArgsPreprocessor::new(["--debug"], ["-u"]);
//! let tokens = preprocessor.preprocess(&["--debug", "-uadmin"]);
//! assert_eq!(tokens, ["--debug", "true", "-u", "admin"]);
//! ```

mod error;
mod preprocess;

pub use error::{PreprocessError, Result};
pub use preprocess::{
    ArgsPreprocessor, ArgsPreprocessorBuilder, IMPLICIT_FLAG_VALUE, preprocess_args,
};
