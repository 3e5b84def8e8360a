//! Property tests for the universal guarantees of the preprocessor.

use args_prep::{ArgsPreprocessor, IMPLICIT_FLAG_VALUE};
use proptest::collection::vec;
use proptest::prelude::*;

static FLAGS: [&str; 3] = ["--standalone", "--debug", "--verbose"];
static SHORTS: [&str; 4] = ["-u", "-p", "-c", "-ab"];

fn preprocessor() -> ArgsPreprocessor {
    ArgsPreprocessor::new(FLAGS, SHORTS)
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(FLAGS.as_slice()).prop_map(str::to_owned),
        (prop::sample::select(SHORTS.as_slice()), "[a-z0-9=.-]{0,6}")
            .prop_map(|(short, suffix)| format!("{short}{suffix}")),
        "[-a-z=]{0,6}",
        Just(String::new()),
        Just(String::from("-")),
    ]
}

fn plain_token() -> impl Strategy<Value = String> {
    "([a-z0-9=.][a-z0-9=.-]{0,7})?"
}

proptest! {
    #[test]
    fn output_is_never_shorter(args in vec(token(), 0..16)) {
        let tokens = preprocessor().preprocess(&args);
        prop_assert!(tokens.len() >= args.len());
    }

    #[test]
    fn tokens_without_a_leading_dash_pass_through(args in vec(plain_token(), 0..16)) {
        let tokens = preprocessor().preprocess(&args);
        prop_assert_eq!(tokens, args);
    }

    #[test]
    fn trailing_flag_gains_implicit_value(
        args in vec(token(), 0..8),
        flag in prop::sample::select(FLAGS.as_slice()),
    ) {
        let mut input = args;
        input.push(flag.to_owned());
        let tokens = preprocessor().preprocess(&input);
        prop_assert_eq!(tokens.last().map(String::as_str), Some(IMPLICIT_FLAG_VALUE));
        prop_assert_eq!(tokens.iter().rev().nth(1).map(String::as_str), Some(flag));
    }

    #[test]
    fn flag_before_dash_token_gains_implicit_value(
        flag in prop::sample::select(FLAGS.as_slice()),
        next in "-[a-z-]{0,6}",
    ) {
        let tokens = preprocessor().preprocess(&[flag, next.as_str()]);
        prop_assert_eq!(tokens.first().map(String::as_str), Some(flag));
        prop_assert_eq!(tokens.get(1).map(String::as_str), Some(IMPLICIT_FLAG_VALUE));
    }

    #[test]
    fn attached_short_values_are_split(
        short in prop::sample::select(vec!["-u", "-p", "-c"]),
        value in "[a-z0-9.]{1,12}",
    ) {
        let joined = format!("{short}{value}");
        let tokens = preprocessor().preprocess(&[joined]);
        prop_assert_eq!(tokens, vec![short.to_owned(), value]);
    }

    #[test]
    fn flag_expansion_is_stable(args in vec(token(), 0..16)) {
        let flags_only = ArgsPreprocessor::new(FLAGS, [""; 0]);
        let once = flags_only.preprocess(&args);
        let twice = flags_only.preprocess(&once);
        prop_assert_eq!(once, twice);
    }
}
