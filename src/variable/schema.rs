// SPDX-License-Identifier: MIT

//! Variable schema definitions

use crate::policy::TargetType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema declaring the variables of a screen or flow
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VariableSchema {
    /// Variable definitions, keyed by name
    #[serde(flatten)]
    pub variables: BTreeMap<String, VariableDef>,
}

/// Definition of a single variable
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VariableDef {
    /// Declared type, matched case-insensitively
    #[serde(rename = "type")]
    pub var_type: TargetType,
    /// Initial value
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_schema_deserialize() {
        let yaml = r#"
            count:
              type: INT
              value: "0"
            visible:
              type: boolean
              value: "false"
            title:
              type: String
        "#;
        let schema: VariableSchema = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(schema.variables.len(), 3);
        assert_eq!(schema.variables["count"].var_type, TargetType::Int);
        assert_eq!(schema.variables["count"].value, "0");
        assert_eq!(schema.variables["visible"].var_type, TargetType::Boolean);
        assert_eq!(schema.variables["title"].var_type, TargetType::String);
        assert_eq!(schema.variables["title"].value, "");
    }

    #[test]
    fn test_all_types() {
        let yaml = r#"
            b: { type: BOOLEAN }
            i: { type: INT }
            l: { type: LONG }
            f: { type: FLOAT }
            d: { type: DOUBLE }
            s: { type: STRING }
        "#;
        let schema: VariableSchema = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(schema.variables["b"].var_type, TargetType::Boolean);
        assert_eq!(schema.variables["i"].var_type, TargetType::Int);
        assert_eq!(schema.variables["l"].var_type, TargetType::Long);
        assert_eq!(schema.variables["f"].var_type, TargetType::Float);
        assert_eq!(schema.variables["d"].var_type, TargetType::Double);
        assert_eq!(schema.variables["s"].var_type, TargetType::String);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let yaml = "x: { type: DECIMAL }";
        let result: Result<VariableSchema, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_upper_case_tags() {
        let def = VariableDef {
            var_type: TargetType::Double,
            value: "1.5".to_string(),
        };
        let yaml = serde_yaml::to_string(&def).unwrap();
        assert!(yaml.contains("type: DOUBLE"));
    }
}
