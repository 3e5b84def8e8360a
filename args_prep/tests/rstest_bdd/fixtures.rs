//! Shared fixtures for the preprocessing scenarios.

use args_prep::PreprocessError;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Inputs and outcome shared between the steps of one scenario.
///
/// An empty name slot models an input that was never supplied.
#[derive(Debug, Default, ScenarioState)]
pub struct PreprocessContext {
    pub flag_names: Slot<Vec<String>>,
    pub short_names: Slot<Vec<String>>,
    pub outcome: Slot<Result<Vec<String>, PreprocessError>>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn preprocess_context() -> PreprocessContext {
    PreprocessContext::default()
}

/// Splits a whitespace-separated token list from a step.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}
