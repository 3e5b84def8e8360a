//! `rstest-bdd` behavioural tests for `args_prep`.
//!
//! The modules defined alongside this entrypoint register the scenario
//! fixture, the step implementations, and bind the feature files so the
//! scenarios run under `cargo test`.

mod fixtures;
mod scenarios;
mod steps;
