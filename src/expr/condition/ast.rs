// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree for condition expressions

use crate::error::ConditionError;
use std::str::FromStr;

/// A condition expression
///
/// Trees are right-nested: `left` of a `Binary` node is always a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Binary expression: left op right
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },
    /// Leaf value
    Literal(Literal),
}

impl Expression {
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Binary operators, logical and comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// &&
    And,
    /// ||
    Or,
    /// ==
    Eq,
    /// !=
    NotEq,
    /// >
    Gt,
    /// <
    Lt,
    /// >=
    Gte,
    /// <=
    Lte,
}

impl Operator {
    /// Every operator symbol, longest first so glued tokens split greedily.
    pub const SYMBOLS: [&'static str; 8] = ["&&", "||", "==", "!=", ">=", "<=", ">", "<"];
}

impl FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&&" => Ok(Operator::And),
            "||" => Ok(Operator::Or),
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::NotEq),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            ">=" => Ok(Operator::Gte),
            "<=" => Ok(Operator::Lte),
            other => Err(ConditionError::UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::And => write!(f, "&&"),
            Operator::Or => write!(f, "||"),
            Operator::Eq => write!(f, "=="),
            Operator::NotEq => write!(f, "!="),
            Operator::Gt => write!(f, ">"),
            Operator::Lt => write!(f, "<"),
            Operator::Gte => write!(f, ">="),
            Operator::Lte => write!(f, "<="),
        }
    }
}

/// Literal values in expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    /// Raw token text, quotes and brackets included
    String(String),
}

impl Literal {
    /// Name of the literal's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Boolean(_) => "boolean",
            Literal::Integer(_) => "integer",
            Literal::String(_) => "string",
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Boolean(b) => write!(f, "{} `{}`", self.kind(), b),
            Literal::Integer(n) => write!(f, "{} `{}`", self.kind(), n),
            Literal::String(s) => write!(f, "{} `{}`", self.kind(), s),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Binary { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Expression::Literal(Literal::Boolean(b)) => write!(f, "{}", b),
            Expression::Literal(Literal::Integer(n)) => write!(f, "{}", n),
            Expression::Literal(Literal::String(s)) => write!(f, "{}", s),
        }
    }
}
