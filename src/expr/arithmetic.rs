// SPDX-License-Identifier: MIT

//! Arithmetic triples: `<number> <op> <number>`

use super::tokenizer::{split_operators, tokenize};
use crate::error::ConditionError;
use std::str::FromStr;

/// Symbols recognised by [`has_arithmetic_operator`].
pub const ARITHMETIC_SYMBOLS: [&str; 4] = ["+", "-", "*", "/"];

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// +
    Add,
    /// -
    Sub,
    /// *
    Mul,
    /// /
    Div,
}

impl ArithmeticOp {
    /// Apply the operator in f64 arithmetic. Division by zero gives inf or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ArithmeticOp::Add => lhs + rhs,
            ArithmeticOp::Sub => lhs - rhs,
            ArithmeticOp::Mul => lhs * rhs,
            ArithmeticOp::Div => lhs / rhs,
        }
    }
}

impl FromStr for ArithmeticOp {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(ArithmeticOp::Add),
            "-" => Ok(ArithmeticOp::Sub),
            "*" => Ok(ArithmeticOp::Mul),
            "/" => Ok(ArithmeticOp::Div),
            other => Err(ConditionError::UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticOp::Add => write!(f, "+"),
            ArithmeticOp::Sub => write!(f, "-"),
            ArithmeticOp::Mul => write!(f, "*"),
            ArithmeticOp::Div => write!(f, "/"),
        }
    }
}

/// Substring test for any of `+ - * /`.
///
/// This is not a parse: hyphenated words, paths and negative numbers all
/// count as operator-bearing.
pub fn has_arithmetic_operator(input: &str) -> bool {
    ARITHMETIC_SYMBOLS.iter().any(|op| input.contains(op))
}

/// Evaluate a single `operand operator operand` triple.
///
/// Returns `None` unless the text splits into exactly three tokens with
/// numeric operands, in which case the caller keeps its original text.
pub fn evaluate_arithmetic(input: &str) -> Option<f64> {
    let tokens = split_operators(&tokenize(input), &ARITHMETIC_SYMBOLS);
    let [lhs, op, rhs] = tokens.as_slice() else {
        return None;
    };

    let lhs: f64 = lhs.parse().ok()?;
    let op: ArithmeticOp = op.parse().ok()?;
    let rhs: f64 = rhs.parse().ok()?;

    Some(op.apply(lhs, rhs))
}
