// SPDX-License-Identifier: MIT

//! Typed variables backed by strings
//!
//! This module provides:
//! - `VariableSchema` - declares variable names, types and initial values
//! - `VariableStore` - runtime values with the change-variable operation
//! - `VariableLoader` - reads schemas from YAML

mod loader;
mod schema;
mod store;

pub use loader::VariableLoader;
pub use schema::{VariableDef, VariableSchema};
pub use store::VariableStore;
