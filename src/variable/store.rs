// SPDX-License-Identifier: MIT

//! Runtime variable storage

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::schema::VariableSchema;
use crate::binding::substitute_all;
use crate::error::VariableError;
use crate::policy::{resolve_for_type, TargetType};

/// A declared variable and its current string value
#[derive(Debug, Clone, PartialEq)]
struct Slot {
    var_type: TargetType,
    value: String,
}

/// Typed, string-backed variables
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    slots: BTreeMap<String, Slot>,
}

impl VariableStore {
    /// Create a store holding every variable declared in `schema`
    pub fn new(schema: &VariableSchema) -> Self {
        let slots = schema
            .variables
            .iter()
            .map(|(name, def)| {
                (
                    name.clone(),
                    Slot {
                        var_type: def.var_type,
                        value: def.value.clone(),
                    },
                )
            })
            .collect();

        Self { slots }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Declare a variable, replacing any previous declaration with that name
    pub fn declare(&mut self, name: &str, var_type: TargetType, value: impl Into<String>) {
        self.slots.insert(
            name.to_string(),
            Slot {
                var_type,
                value: value.into(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(|slot| slot.value.as_str())
    }

    pub fn target_type(&self, name: &str) -> Option<TargetType> {
        self.slots.get(name).map(|slot| slot.var_type)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store `value` as-is, without substitution or evaluation
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), VariableError> {
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| VariableError::unknown_variable(name))?;
        slot.value = value.into();
        Ok(())
    }

    /// Current `(name, value)` pairs, in name order
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.value.as_str()))
    }

    /// Assign a new raw value to `key`.
    ///
    /// Placeholders are filled from the current values, then the text is
    /// resolved against the variable's declared type. Returns the stored value.
    pub fn change_variable(&mut self, key: &str, raw: &str) -> Result<String, VariableError> {
        let var_type = self
            .target_type(key)
            .ok_or_else(|| VariableError::unknown_variable(key))?;

        let substituted = substitute_all(raw, self.bindings());
        let resolved = resolve_for_type(&substituted, var_type);
        log::debug!("Variable {} ({}) = {:?}", key, var_type, resolved);

        self.set(key, resolved.clone())?;
        Ok(resolved)
    }

    /// Convert the store to a JSON object of name to value
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.slots
                .iter()
                .map(|(name, slot)| (name.clone(), Value::String(slot.value.clone())))
                .collect::<Map<String, Value>>(),
        )
    }
}
