//! Condition expression evaluator

use super::ast::{Expression, Literal, Operator};
use super::parser::parse;
use crate::error::ConditionError;
use std::cmp::Ordering;

/// Evaluate a condition expression to a boolean.
///
/// Both sides of `&&` and `||` are always evaluated so a malformed right
/// side is reported even when the left side already decides the result.
pub fn evaluate(expr: &Expression) -> Result<bool, ConditionError> {
    match expr {
        Expression::Literal(Literal::Boolean(b)) => Ok(*b),
        Expression::Literal(other) => Err(ConditionError::NonBooleanCondition(other.clone())),
        Expression::Binary { left, op, right } => match op {
            Operator::And => {
                let (l, r) = (evaluate(left)?, evaluate(right)?);
                Ok(l && r)
            }
            Operator::Or => {
                let (l, r) = (evaluate(left)?, evaluate(right)?);
                Ok(l || r)
            }
            Operator::Eq => evaluate_compare(left, right, |o| o == Ordering::Equal),
            Operator::NotEq => evaluate_compare(left, right, |o| o != Ordering::Equal),
            Operator::Gt => evaluate_compare(left, right, |o| o == Ordering::Greater),
            Operator::Lt => evaluate_compare(left, right, |o| o == Ordering::Less),
            Operator::Gte => evaluate_compare(left, right, |o| {
                o == Ordering::Greater || o == Ordering::Equal
            }),
            Operator::Lte => evaluate_compare(left, right, |o| {
                o == Ordering::Less || o == Ordering::Equal
            }),
        },
    }
}

/// Parse and evaluate a condition string
pub fn evaluate_condition(input: &str) -> Result<bool, ConditionError> {
    evaluate(&parse(input))
}

/// Substring test for any condition operator symbol
pub fn has_condition_operator(input: &str) -> bool {
    Operator::SYMBOLS.iter().any(|op| input.contains(op))
}

fn evaluate_compare<F>(
    left: &Expression,
    right: &Expression,
    holds: F,
) -> Result<bool, ConditionError>
where
    F: Fn(Ordering) -> bool,
{
    let ordering = compare(as_literal(left)?, as_literal(right)?)?;
    Ok(holds(ordering))
}

fn as_literal(expr: &Expression) -> Result<&Literal, ConditionError> {
    match expr {
        Expression::Literal(lit) => Ok(lit),
        Expression::Binary { .. } => Err(ConditionError::NotALiteral(expr.to_string())),
    }
}

/// Three-way comparison between literals of the same kind.
///
/// Integers compare numerically, strings lexicographically and booleans
/// with `false < true`.
pub fn compare(left: &Literal, right: &Literal) -> Result<Ordering, ConditionError> {
    match (left, right) {
        (Literal::Integer(l), Literal::Integer(r)) => Ok(l.cmp(r)),
        (Literal::String(l), Literal::String(r)) => Ok(l.cmp(r)),
        (Literal::Boolean(l), Literal::Boolean(r)) => Ok(l.cmp(r)),
        _ => Err(ConditionError::MismatchedComparison {
            left: left.clone(),
            right: right.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_comparison() {
        assert!(evaluate_condition("1<=2").unwrap());
        assert!(evaluate_condition("1==1").unwrap());
        assert!(evaluate_condition("2>1").unwrap());
        assert!(evaluate_condition("41!=32").unwrap());

        assert!(!evaluate_condition("2 <= 1").unwrap());
        assert!(!evaluate_condition("1 > 2").unwrap());
        assert!(evaluate_condition("2 >= 2").unwrap());
        assert!(evaluate_condition("-3 < 2").unwrap());
    }

    #[test]
    fn test_string_comparison() {
        assert!(evaluate_condition(r#""test"=="test""#).unwrap());
        assert!(evaluate_condition(r#""test"!="test2""#).unwrap());
        assert!(evaluate_condition("apple < banana").unwrap());
        assert!(!evaluate_condition("b <= a").unwrap());
    }

    #[test]
    fn test_boolean_comparison() {
        assert!(evaluate_condition("true == true").unwrap());
        assert!(evaluate_condition("false < true").unwrap());
        assert!(evaluate_condition("true >= false").unwrap());
        assert!(!evaluate_condition("false > true").unwrap());
    }

    #[test]
    fn test_literal_true_false() {
        assert!(evaluate_condition("true").unwrap());
        assert!(!evaluate_condition("false").unwrap());
        assert!(!evaluate_condition("").unwrap());
    }

    #[test]
    fn test_logical_operators() {
        assert!(evaluate_condition("true && true").unwrap());
        assert!(!evaluate_condition("true && false").unwrap());
        assert!(evaluate_condition("false || true").unwrap());
        assert!(!evaluate_condition("false || false").unwrap());
    }

    #[test]
    fn test_right_nested_chain() {
        // true && (1 < 2)
        assert!(evaluate_condition("true && 1 < 2").unwrap());
        // false || (true && true)
        assert!(evaluate_condition("false || true && true").unwrap());
    }

    #[test]
    fn test_comparison_against_compound_fails() {
        // 1 == (1 && true)
        let err = evaluate_condition("1 == 1 && true").unwrap_err();
        assert!(matches!(err, ConditionError::NotALiteral(_)));
    }

    #[test]
    fn test_mismatched_types() {
        assert_eq!(
            evaluate_condition("true==1"),
            Err(ConditionError::MismatchedComparison {
                left: Literal::Boolean(true),
                right: Literal::Integer(1),
            })
        );
        assert!(evaluate_condition("1 == one").is_err());
    }

    #[test]
    fn test_bare_literal_is_not_a_condition() {
        assert_eq!(
            evaluate_condition("42"),
            Err(ConditionError::NonBooleanCondition(Literal::Integer(42)))
        );
        assert_eq!(
            evaluate_condition("(4 / 2 != 0) && (true == true)"),
            Err(ConditionError::NonBooleanCondition(Literal::String(
                "(4".to_string()
            )))
        );
    }

    #[test]
    fn test_logical_requires_boolean_sides() {
        assert!(evaluate_condition("true && 1").is_err());
        // no short-circuit: the right side is still checked
        assert!(evaluate_condition("false && 1").is_err());
        assert!(evaluate_condition("true || text").is_err());
    }

    #[test]
    fn test_dangling_operator() {
        // `"test" == false`
        assert!(evaluate_condition(r#""test"=="#).is_err());
    }

    #[test]
    fn test_has_condition_operator() {
        assert!(has_condition_operator("a == b"));
        assert!(has_condition_operator("a!=b"));
        assert!(has_condition_operator("x || y"));
        assert!(has_condition_operator("x && y"));
        assert!(has_condition_operator("1<2"));
        assert!(has_condition_operator("<div>"));
        assert!(!has_condition_operator("hello"));
        assert!(!has_condition_operator("a = b"));
        assert!(!has_condition_operator("3+1"));
    }

    #[test]
    fn test_every_comparison_operator() {
        let cases = [
            ("1 == 1", true),
            ("1 != 1", false),
            ("2 > 1", true),
            ("1 > 1", false),
            ("1 < 2", true),
            ("2 < 2", false),
            ("2 >= 2", true),
            ("1 >= 2", false),
            ("2 <= 2", true),
            ("3 <= 2", false),
        ];
        for (text, expected) in cases {
            assert_eq!(evaluate_condition(text), Ok(expected), "{}", text);
        }
    }

    #[test]
    fn test_compare_ordering() {
        assert_eq!(
            compare(&Literal::Integer(1), &Literal::Integer(2)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            compare(&Literal::Boolean(true), &Literal::Boolean(false)),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            compare(
                &Literal::String("a".to_string()),
                &Literal::String("a".to_string())
            ),
            Ok(Ordering::Equal)
        );
    }
}
