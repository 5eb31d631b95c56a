// SPDX-License-Identifier: MIT

//! Condition parsing and evaluation
//!
//! Conditions are whitespace-separated literal comparisons joined by
//! logical operators:
//! - `1 <= 2`
//! - `"on" == "on"`
//! - `4 != 0 && true == true`

mod ast;
mod evaluator;
mod parser;

pub use ast::{Expression, Literal, Operator};
pub use evaluator::{compare, evaluate, evaluate_condition, has_condition_operator};
pub use parser::{parse, parse_tokens};
