//! Core types for the planning pipeline
//!
//! Defines the fundamental result types:
//! - Query complexity tiers
//! - Individual function calls with dependency links
//! - The complete processed-query result

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Complexity tier of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Short query with no complex keywords
    Simple,
    /// Medium-length query with no complex keywords
    Medium,
    /// Long query or one carrying complex keywords
    Complex,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        };
        write!(f, "{}", s)
    }
}

/// Format a call id for a 1-based plan position
#[inline]
#[must_use]
pub fn call_id(order: u32) -> String {
    format!("call_{}", order)
}

/// One planned invocation of a catalog function
///
/// Created by the plan assembler, owned by its [`ProcessedQuery`], never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Plan-unique id, formatted `call_<n>`
    pub id: String,
    /// Catalog function name
    pub function: String,
    /// Synthesized argument values, in declaration order
    pub parameters: IndexMap<String, Value>,
    /// Human-readable description of the call
    pub description: String,
    /// 1-based position in the plan
    pub execution_order: u32,
    /// Ids of calls this one depends on, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

/// The complete result of running one query through the pipeline
///
/// Immutable once assembled; a new submission produces a new value rather
/// than mutating the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedQuery {
    /// The raw query text as submitted
    pub query: String,
    /// Coarse intent label
    pub intent: String,
    /// Complexity tier
    pub complexity: Complexity,
    /// Ordered, dependency-annotated calls
    pub function_calls: Vec<FunctionCall>,
    /// Human-readable execution plan
    pub execution_plan: String,
    /// Estimated execution time in seconds
    pub estimated_time: f64,
    /// Confidence score in [0, 1]
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_id_format() {
        assert_eq!(call_id(1), "call_1");
        assert_eq!(call_id(12), "call_12");
    }

    #[test]
    fn complexity_serde_lowercase() {
        let json = serde_json::to_string(&Complexity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Complexity = serde_json::from_str("\"complex\"").unwrap();
        assert_eq!(back, Complexity::Complex);
    }

    #[test]
    fn function_call_omits_absent_dependencies() {
        let call = FunctionCall {
            id: call_id(1),
            function: "searchDatabase".to_string(),
            parameters: IndexMap::new(),
            description: "desc".to_string(),
            execution_order: 1,
            dependencies: None,
        };
        let json = serde_json::to_string(&call).unwrap();
        assert!(!json.contains("dependencies"));
    }
}
