//! Longest-prefix lookup over the registered short options.

use std::cmp::Reverse;

/// Outcome of matching a token against the registered short options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortMatch<'a> {
    /// The token is a registered short option with nothing attached.
    Bare,
    /// The token is a registered short option followed by its value.
    Attached {
        /// Registered option that prefixed the token.
        option: &'a str,
        /// Remainder of the token after the option.
        value: &'a str,
    },
}

/// Short option names ordered for longest-prefix matching.
///
/// Names are kept in descending length order. The sort is stable, so names of
/// equal length keep their registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShortOptions {
    names: Vec<String>,
}

impl ShortOptions {
    pub(crate) fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = names.into_iter().map(Into::into).collect();
        ordered.sort_by_key(|name| Reverse(name.len()));
        Self { names: ordered }
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Finds the longest registered option that prefixes `token`.
    ///
    /// Only tokens of at least two characters that start with `-` are
    /// considered; a lone `-` never matches.
    pub(crate) fn match_token<'t>(&'t self, token: &'t str) -> Option<ShortMatch<'t>> {
        if token.len() < 2 || !token.starts_with('-') {
            return None;
        }
        self.names.iter().find_map(|name| {
            token.strip_prefix(name.as_str()).map(|value| {
                if value.is_empty() {
                    ShortMatch::Bare
                } else {
                    ShortMatch::Attached {
                        option: name.as_str(),
                        value,
                    }
                }
            })
        })
    }
}
