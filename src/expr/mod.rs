// SPDX-License-Identifier: MIT

//! Expression evaluation for variable values
//!
//! - `tokenizer` - whitespace tokens and glued-operator splitting
//! - `arithmetic` - single `<number> <op> <number>` triples
//! - `condition` - right-nested boolean conditions over literals

pub mod arithmetic;
pub mod condition;
pub mod tokenizer;

pub use arithmetic::{evaluate_arithmetic, has_arithmetic_operator, ArithmeticOp};
pub use condition::{
    evaluate, evaluate_condition, has_condition_operator, parse, Expression, Literal, Operator,
};
pub use tokenizer::{split_operators, tokenize};
