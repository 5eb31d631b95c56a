// SPDX-License-Identifier: MIT

//! Whitespace tokenizer shared by the arithmetic and condition evaluators

/// Split `input` on runs of whitespace.
///
/// Tokens are borrowed slices of the input and are never empty.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Break tokens apart where one of `operators` is glued to its operands.
///
/// `["3+1"]` becomes `["3", "+", "1"]`. Operators are tried in the order
/// given, so callers list longer symbols first. A `+` or `-` opening a piece
/// and followed by a digit or `.` is a sign, as is one right after an
/// exponent marker (`1e-5`).
pub fn split_operators<'a>(tokens: &[&'a str], operators: &[&str]) -> Vec<&'a str> {
    let mut out = Vec::with_capacity(tokens.len());

    for &token in tokens {
        let mut start = 0;
        let mut i = 0;

        while i < token.len() {
            let rest = &token[i..];
            let matched = operators
                .iter()
                .find(|op| rest.starts_with(**op))
                .copied()
                .filter(|op| !is_sign(op, &token[start..i], &rest[op.len()..]));

            match matched {
                Some(op) => {
                    if start < i {
                        out.push(&token[start..i]);
                    }
                    out.push(&token[i..i + op.len()]);
                    i += op.len();
                    start = i;
                }
                None => {
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if start < token.len() {
            out.push(&token[start..]);
        }
    }

    out
}

fn is_sign(op: &str, before: &str, after: &str) -> bool {
    if op != "+" && op != "-" {
        return false;
    }
    let starts_number = after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    if before.is_empty() {
        return starts_number;
    }

    // exponent of a float literal such as 1e-5
    let mut chars = before.chars().rev();
    matches!(chars.next(), Some('e' | 'E'))
        && chars.next().is_some_and(|c| c.is_ascii_digit() || c == '.')
        && starts_number
}
