//! Binds the preprocessing feature file to the step registry.

use crate::fixtures::{PreprocessContext, preprocess_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/preprocess.feature",
    fixtures = [preprocess_context: PreprocessContext]
);
