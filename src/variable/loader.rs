//! Variable loader - YAML file loading and parsing

use super::schema::VariableSchema;
use crate::error::VariableError;
use std::fs;
use std::path::Path;

/// Loads variable schemas from YAML files
pub struct VariableLoader;

impl VariableLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a variable schema from a YAML file
    pub fn load_schema<P: AsRef<Path>>(&self, path: P) -> Result<VariableSchema, VariableError> {
        let path = path.as_ref();
        log::debug!("Loading variables from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a variable schema from a YAML string
    pub fn parse_yaml(content: &str) -> Result<VariableSchema, VariableError> {
        let schema: VariableSchema = serde_yaml::from_str(content)?;
        Ok(schema)
    }
}

impl Default for VariableLoader {
    fn default() -> Self {
        Self::new()
    }
}
