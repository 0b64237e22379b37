//! Function definition types
//!
//! Defines the schema side of the catalog:
//! - Parameter types and declarations
//! - Return specifications
//! - Complete function definitions with builder-style construction

use serde::{Deserialize, Serialize};

/// Declared type of a parameter or return value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// UTF-8 string
    String,
    /// Numeric value
    Number,
    /// True/false flag
    Boolean,
    /// Ordered sequence of values
    Array,
    /// Key-value mapping
    Object,
    /// Unconstrained value
    Any,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Object => "object",
            ParameterType::Any => "any",
        };
        write!(f, "{}", s)
    }
}

/// A single declared parameter of a catalog function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    /// Parameter name
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub ty: ParameterType,
    /// Human-readable description
    pub description: String,
    /// Whether callers must supply a value
    pub required: bool,
}

impl FunctionParameter {
    /// Create a required parameter
    #[inline]
    #[must_use]
    pub fn required(name: impl Into<String>, ty: ParameterType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            description: description.into(),
            required: true,
        }
    }

    /// Create an optional parameter
    #[inline]
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: ParameterType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            description: description.into(),
            required: false,
        }
    }
}

/// Return value specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSpec {
    /// Declared type of the return value
    #[serde(rename = "type")]
    pub ty: ParameterType,
    /// Human-readable description
    pub description: String,
}

impl ReturnSpec {
    /// Create a new return spec
    #[inline]
    #[must_use]
    pub fn new(ty: ParameterType, description: impl Into<String>) -> Self {
        Self {
            ty,
            description: description.into(),
        }
    }
}

/// A catalog function definition
///
/// Immutable once constructed; the catalog owns these for the process
/// lifetime. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Unique function name
    pub name: String,
    /// What the function does
    pub description: String,
    /// Grouping category
    pub category: String,
    /// Declared parameters, in call order
    pub parameters: Vec<FunctionParameter>,
    /// Return specification
    pub returns: ReturnSpec,
    /// Optional usage example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl FunctionDefinition {
    /// Create a new definition with no parameters
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        returns: ReturnSpec,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            parameters: Vec::new(),
            returns,
            example: None,
        }
    }

    /// Append a parameter declaration
    #[inline]
    #[must_use]
    pub fn with_param(mut self, param: FunctionParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Attach a usage example
    #[inline]
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Iterate over required parameters only
    pub fn required_params(&self) -> impl Iterator<Item = &FunctionParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_constructors() {
        let p = FunctionParameter::required("table", ParameterType::String, "Table name");
        assert!(p.required);
        let q = FunctionParameter::optional("limit", ParameterType::Number, "Max results");
        assert!(!q.required);
    }

    #[test]
    fn definition_builder() {
        let def = FunctionDefinition::new(
            "searchDatabase",
            "Perform complex database searches",
            "Data Retrieval",
            ReturnSpec::new(ParameterType::Array, "Search results array"),
        )
        .with_param(FunctionParameter::required("table", ParameterType::String, "Table name"))
        .with_param(FunctionParameter::optional("limit", ParameterType::Number, "Max results"));

        assert_eq!(def.parameters.len(), 2);
        assert_eq!(def.required_params().count(), 1);
        assert!(def.example.is_none());
    }

    #[test]
    fn parameter_type_serde_lowercase() {
        let json = serde_json::to_string(&ParameterType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
    }

    #[test]
    fn parameter_type_display() {
        assert_eq!(ParameterType::Array.to_string(), "array");
        assert_eq!(ParameterType::Any.to_string(), "any");
    }
}
