//! Parameter synthesis
//!
//! Produces a concrete argument value for every required parameter of a
//! selected function. [`MockSynthesizer`] is an explicit placeholder
//! generator; the [`ParameterSynthesizer`] trait is kept narrow
//! (definition × query → parameter map) so a real model-backed backend is
//! a drop-in replacement.

use async_trait::async_trait;
use callplan_catalog::{FunctionDefinition, ParameterType};
use chrono::Utc;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

/// Pluggable argument synthesis backend
///
/// Async so a real inference call can implement it; the mock implementation
/// never suspends.
#[async_trait]
pub trait ParameterSynthesizer: Send + std::fmt::Debug {
    /// Synthesize a value for every required parameter of `def`
    async fn synthesize(&mut self, def: &FunctionDefinition, query: &str) -> IndexMap<String, Value>;

    /// Backend name (for debugging/logging)
    fn name(&self) -> &'static str;
}

/// Type-directed placeholder generator
///
/// Randomness is injected so tests can seed it and assert exact outputs.
#[derive(Debug)]
pub struct MockSynthesizer<R: Rng> {
    rng: R,
}

impl MockSynthesizer<StdRng> {
    /// Create a synthesizer backed by OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a synthesizer with a fixed seed
    #[inline]
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MockSynthesizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockSynthesizer<R> {
    /// Create a synthesizer from an explicit randomness source
    #[inline]
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn value_for(&mut self, name: &str, ty: ParameterType) -> Value {
        match ty {
            ParameterType::String => {
                if name.contains("date") || name.contains("Date") {
                    Value::String(Utc::now().format("%Y-%m-%d").to_string())
                } else if name.contains("email") || name.contains("Email") {
                    Value::String("user@example.com".to_string())
                } else {
                    Value::String(format!("mock_{}", name))
                }
            }
            ParameterType::Number => {
                let n: i64 = self.rng.random_range(0..100);
                Value::from(n)
            }
            ParameterType::Boolean => Value::Bool(self.rng.random_bool(0.5)),
            ParameterType::Array => json!(["item1", "item2"]),
            ParameterType::Object => json!({ "key": "value" }),
            ParameterType::Any => Value::String("mock_value".to_string()),
        }
    }
}

#[async_trait]
impl<R: Rng + Send + std::fmt::Debug> ParameterSynthesizer for MockSynthesizer<R> {
    async fn synthesize(&mut self, def: &FunctionDefinition, _query: &str) -> IndexMap<String, Value> {
        let mut params = IndexMap::new();
        for param in def.required_params() {
            let value = self.value_for(&param.name, param.ty);
            params.insert(param.name.clone(), value);
        }
        params
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
