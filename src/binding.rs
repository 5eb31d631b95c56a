// SPDX-License-Identifier: MIT

//! `{placeholder}` substitution, applied before evaluation

/// Replace every `{key}` in `text` with `value`
pub fn substitute(text: &str, key: &str, value: &str) -> String {
    text.replace(&format!("{{{}}}", key), value)
}

/// Apply each `(key, value)` binding in order.
///
/// A value that itself contains `{other}` is expanded only if `other`
/// comes later in the iteration.
pub fn substitute_all<'a, I>(text: &str, bindings: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    bindings
        .into_iter()
        .fold(text.to_string(), |acc, (key, value)| {
            substitute(&acc, key, value)
        })
}
