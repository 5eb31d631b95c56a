// SPDX-License-Identifier: MIT

//! Typed error handling for bindexpr
//!
//! Arithmetic failures are not errors: `evaluate_arithmetic` returns `None`
//! and callers keep the original text. Everything else that can go wrong is
//! described here with thiserror.

use crate::expr::Literal;
use thiserror::Error;

/// Top-level error type for bindexpr
#[derive(Debug, Error)]
pub enum BindexprError {
    /// Condition evaluation errors
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Unrecognised target type tag
    #[error(transparent)]
    TargetType(#[from] TargetTypeError),

    /// Variable store and loader errors
    #[error("Variable error: {0}")]
    Variable(#[from] VariableError),

    /// Text that is not a `<number> <op> <number>` triple
    #[error("Not an arithmetic triple: {0}")]
    NotArithmetic(String),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A condition tree that cannot produce a boolean.
///
/// The parser accepts every token stream, so these only show up when a
/// tree reaches the evaluator in a shape the grammar does not give meaning to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionError {
    /// An integer or string literal was used where a boolean was expected
    #[error("Expected a boolean condition, found {0}")]
    NonBooleanCondition(Literal),

    /// A comparison operand was itself a compound expression
    #[error("Comparison operand is not a literal: {0}")]
    NotALiteral(String),

    /// Comparison between literals of different kinds
    #[error("Mismatched types in comparison: {left} vs {right}")]
    MismatchedComparison { left: Literal, right: Literal },

    /// Operator symbol outside the recognised set
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Target type tag errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetTypeError {
    #[error("Unknown target type: {0}")]
    Unknown(String),
}

/// Variable store and loader errors
#[derive(Debug, Error)]
pub enum VariableError {
    /// Variable not declared in the store
    #[error("Variable '{name}' not found")]
    UnknownVariable { name: String },

    /// I/O errors while reading a schema file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl VariableError {
    /// Create an unknown variable error
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        Self::UnknownVariable { name: name.into() }
    }
}
