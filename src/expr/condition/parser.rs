//! Recursive-descent condition parser
//!
//! Parses whitespace-separated expressions like:
//! - `1 <= 2`
//! - `"test" == "test"`
//! - `4 != 0 && true == true`
//!
//! There is no precedence table. `a OP1 b OP2 c` parses as
//! `a OP1 (b OP2 c)`.

use super::ast::{Expression, Literal, Operator};
use crate::expr::tokenizer::{split_operators, tokenize};

/// Parse a condition string into an AST.
///
/// Never fails: unknown tokens become string literals and anything left
/// over after the last operator-connected primary is dropped.
pub fn parse(input: &str) -> Expression {
    let tokens = split_operators(&tokenize(input), &Operator::SYMBOLS);
    let (expr, rest) = parse_tokens(&tokens);
    if !rest.is_empty() {
        log::debug!("Ignoring trailing condition tokens: {:?}", rest);
    }
    expr
}

/// Parse one `condition` from the front of `tokens`.
///
/// Returns the expression and the unconsumed tail.
pub fn parse_tokens<'t, 'a>(tokens: &'t [&'a str]) -> (Expression, &'t [&'a str]) {
    let (left, rest) = parse_primary(tokens);

    if let Some((first, after)) = rest.split_first() {
        if let Ok(op) = first.parse::<Operator>() {
            let (right, rest) = parse_tokens(after);
            return (Expression::binary(left, op, right), rest);
        }
    }

    (left, rest)
}

fn parse_primary<'t, 'a>(tokens: &'t [&'a str]) -> (Expression, &'t [&'a str]) {
    match tokens.split_first() {
        Some((token, rest)) => (Expression::Literal(parse_literal(token)), rest),
        None => (Expression::Literal(Literal::Boolean(false)), tokens),
    }
}

fn parse_literal(token: &str) -> Literal {
    match token {
        "true" => Literal::Boolean(true),
        "false" => Literal::Boolean(false),
        _ => match token.parse::<i64>() {
            Ok(n) => Literal::Integer(n),
            Err(_) => Literal::String(token.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Expression {
        Expression::Literal(Literal::Integer(n))
    }

    fn boolean(b: bool) -> Expression {
        Expression::Literal(Literal::Boolean(b))
    }

    fn string(s: &str) -> Expression {
        Expression::Literal(Literal::String(s.to_string()))
    }

    #[test]
    fn test_parse_simple_comparison() {
        assert_eq!(parse("1 <= 2"), Expression::binary(int(1), Operator::Lte, int(2)));
    }

    #[test]
    fn test_parse_glued_comparison() {
        assert_eq!(parse("1<=2"), Expression::binary(int(1), Operator::Lte, int(2)));
        assert_eq!(
            parse("41!=32"),
            Expression::binary(int(41), Operator::NotEq, int(32))
        );
    }

    #[test]
    fn test_parse_quoted_strings_keep_quotes() {
        assert_eq!(
            parse(r#""test" == "test2""#),
            Expression::binary(string("\"test\""), Operator::Eq, string("\"test2\""))
        );
    }

    #[test]
    fn test_parse_booleans_are_case_sensitive() {
        assert_eq!(parse("true"), boolean(true));
        assert_eq!(parse("false"), boolean(false));
        assert_eq!(parse("True"), string("True"));
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse("-7"), int(-7));
        assert_eq!(parse("+7"), int(7));
        assert_eq!(parse("7.5"), string("7.5"));
    }

    #[test]
    fn test_parse_right_nested_chain() {
        let expr = parse("1 < 2 && true");
        assert_eq!(
            expr,
            Expression::binary(
                int(1),
                Operator::Lt,
                Expression::binary(int(2), Operator::And, boolean(true)),
            )
        );
    }

    #[test]
    fn test_parse_drops_unconnected_tail() {
        let tokens = ["a", "b", "==", "c"];
        let (expr, rest) = parse_tokens(&tokens);
        assert_eq!(expr, string("a"));
        assert_eq!(rest, &["b", "==", "c"]);

        assert_eq!(parse("a b == c"), string("a"));
    }

    #[test]
    fn test_parse_parenthesised_text_is_opaque() {
        // `(4` is followed by `/`, which is not a condition operator
        assert_eq!(parse("(4 / 2 != 0) && (true == true)"), string("(4"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), boolean(false));
        let (expr, rest) = parse_tokens(&[]);
        assert_eq!(expr, boolean(false));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_parse_dangling_operator() {
        // the missing right side falls back to `false`
        assert_eq!(
            parse(r#""test"=="#),
            Expression::binary(string("\"test\""), Operator::Eq, boolean(false))
        );
    }
}
