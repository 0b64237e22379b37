//! Simulated model registry
//!
//! A fixed list of model profiles used for display and labeling only; the
//! active profile never alters selection logic.

use serde::Serialize;

/// Descriptive profile of a simulated model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelProfile {
    /// Model name (unique key)
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Parameter-count label, e.g. "7B"
    pub parameters: &'static str,
    /// Advertised capabilities
    pub capabilities: &'static [&'static str],
    /// Providing organization
    pub provider: &'static str,
}

/// The fixed list of available model profiles
pub const MODEL_PROFILES: &[ModelProfile] = &[
    ModelProfile {
        name: "Mistral-7B-Instruct",
        description: "A powerful 7B parameter model optimized for instruction following and function calling",
        parameters: "7B",
        capabilities: &["Function Calling", "Reasoning", "Code Generation", "Text Analysis"],
        provider: "Mistral AI",
    },
    ModelProfile {
        name: "CodeLlama-7B-Instruct",
        description: "Specialized model for code understanding and generation with function calling",
        parameters: "7B",
        capabilities: &["Function Calling", "Code Generation", "API Integration", "Workflow Planning"],
        provider: "Meta",
    },
    ModelProfile {
        name: "Phi-3-Mini-4K-Instruct",
        description: "Compact but powerful model for efficient function calling and reasoning",
        parameters: "3.8B",
        capabilities: &["Function Calling", "Reasoning", "Task Planning", "Data Processing"],
        provider: "Microsoft",
    },
];

/// Look up a profile index by model name
#[must_use]
pub(crate) fn profile_index(name: &str) -> Option<usize> {
    MODEL_PROFILES.iter().position(|m| m.name == name)
}
