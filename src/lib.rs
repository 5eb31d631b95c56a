// SPDX-License-Identifier: MIT

//! Evaluation of dynamic variable values.
//!
//! Raw strings are checked for arithmetic triples (`3 + 1`) and literal
//! conditions (`1 <= 2 && true == true`), evaluated, and formatted back
//! into a string according to the declared [`TargetType`] of the
//! variable that receives them.

pub mod binding;
pub mod error;
pub mod expr;
pub mod policy;
pub mod variable;

pub use binding::{substitute, substitute_all};
pub use error::{BindexprError, ConditionError, TargetTypeError, VariableError};
pub use expr::{
    evaluate, evaluate_arithmetic, evaluate_condition, has_arithmetic_operator,
    has_condition_operator, parse, split_operators, tokenize, ArithmeticOp, Expression, Literal,
    Operator,
};
pub use policy::{resolve_for_type, TargetType};
pub use variable::{VariableDef, VariableLoader, VariableSchema, VariableStore};
