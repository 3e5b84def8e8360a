//! Library facade for the `hello_args` demo so integration tests can reuse
//! the command-line surface and the configuration layering.

pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod settings;
