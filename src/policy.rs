// SPDX-License-Identifier: MIT

//! Type-directed resolution of raw variable values
//!
//! A raw value is checked for arithmetic operators first, then for
//! condition operators. The declared [`TargetType`] decides whether the
//! evaluated result is written back or the raw text is kept.

use crate::error::TargetTypeError;
use crate::expr::{
    evaluate_arithmetic, evaluate_condition, has_arithmetic_operator, has_condition_operator,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declared type of a string-backed variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl TargetType {
    /// Format an arithmetic result for this type.
    ///
    /// Returns `None` for types that do not store numbers, and for integer
    /// types when the result is NaN, infinite or outside the `i64` range.
    pub fn format_number(self, value: f64) -> Option<String> {
        match self {
            TargetType::Int => to_i64(value.round()).map(|n| n.to_string()),
            TargetType::Long => to_i64(value.trunc()).map(|n| n.to_string()),
            TargetType::Double => Some(format!("{:?}", value)),
            TargetType::Float => Some(format!("{:?}", value as f32)),
            TargetType::Boolean | TargetType::String => None,
        }
    }
}

/// `value` must already be integral. `i64::MAX as f64` is 2^63, one past the range.
fn to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl FromStr for TargetType {
    type Err = TargetTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BOOLEAN" => Ok(TargetType::Boolean),
            "INT" => Ok(TargetType::Int),
            "LONG" => Ok(TargetType::Long),
            "FLOAT" => Ok(TargetType::Float),
            "DOUBLE" => Ok(TargetType::Double),
            "STRING" => Ok(TargetType::String),
            _ => Err(TargetTypeError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for TargetType {
    type Error = TargetTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetType> for String {
    fn from(value: TargetType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetType::Boolean => write!(f, "BOOLEAN"),
            TargetType::Int => write!(f, "INT"),
            TargetType::Long => write!(f, "LONG"),
            TargetType::Float => write!(f, "FLOAT"),
            TargetType::Double => write!(f, "DOUBLE"),
            TargetType::String => write!(f, "STRING"),
        }
    }
}

/// Resolve `raw` into the string to store in a variable of type `target`.
///
/// Never fails. Anything that does not evaluate, or evaluates to a result
/// the target type does not hold, leaves `raw` unchanged.
pub fn resolve_for_type(raw: &str, target: TargetType) -> String {
    if has_arithmetic_operator(raw) {
        let resolved = evaluate_arithmetic(raw).and_then(|value| target.format_number(value));
        log::debug!("Arithmetic value {:?} for {}: {:?}", raw, target, resolved);
        return resolved.unwrap_or_else(|| raw.to_string());
    }

    if has_condition_operator(raw) {
        if target != TargetType::Boolean {
            return raw.to_string();
        }
        return match evaluate_condition(raw) {
            Ok(result) => result.to_string(),
            Err(e) => {
                log::warn!("Keeping raw value {:?}: {}", raw, e);
                raw.to_string()
            }
        };
    }

    raw.to_string()
}
