//! Step definitions for the preprocessing scenarios.

use crate::fixtures::{PreprocessContext, split_tokens};
use anyhow::{Result, anyhow, ensure};
use args_prep::{PreprocessError, preprocess_args};
use rstest_bdd_macros::{given, then, when};

#[given("the flag options {names}")]
fn flag_options(preprocess_context: &PreprocessContext, names: String) {
    preprocess_context.flag_names.set(split_tokens(&names));
}

#[given("no flag options")]
fn no_flag_options(preprocess_context: &PreprocessContext) {
    preprocess_context.flag_names.set(Vec::new());
}

#[given("the short options {names}")]
fn short_options(preprocess_context: &PreprocessContext, names: String) {
    preprocess_context.short_names.set(split_tokens(&names));
}

#[given("no short options")]
fn no_short_options(preprocess_context: &PreprocessContext) {
    preprocess_context.short_names.set(Vec::new());
}

#[when("the tokens {tokens} are preprocessed")]
fn preprocess_tokens(preprocess_context: &PreprocessContext, tokens: String) {
    let args = split_tokens(&tokens);
    let outcome = preprocess_args(
        Some(args.as_slice()),
        preprocess_context.flag_names.get(),
        preprocess_context.short_names.get(),
    );
    preprocess_context.outcome.set(outcome);
}

#[then("the result is {tokens}")]
fn assert_result(preprocess_context: &PreprocessContext, tokens: String) -> Result<()> {
    let outcome = preprocess_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no tokens were preprocessed"))?;
    let actual = outcome.map_err(|err| anyhow!(err))?;
    let expected = split_tokens(&tokens);
    ensure!(
        actual == expected,
        "unexpected tokens {actual:?}; expected {expected:?}"
    );
    Ok(())
}

#[then("preprocessing fails because {parameter} is missing")]
fn assert_missing(preprocess_context: &PreprocessContext, parameter: String) -> Result<()> {
    let outcome = preprocess_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no tokens were preprocessed"))?;
    let Err(err) = outcome else {
        return Err(anyhow!("expected preprocessing to fail"));
    };
    ensure!(
        err.parameter() == Some(parameter.as_str()),
        "unexpected error {err}; expected missing {parameter}"
    );
    ensure!(
        matches!(err, PreprocessError::InvalidArgument { .. }),
        "expected an invalid argument error, got {err}"
    );
    Ok(())
}
