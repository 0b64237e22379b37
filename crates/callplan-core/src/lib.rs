//! Callplan Core - query-to-plan pipeline
//!
//! Translates a free-text request into an ordered, dependency-annotated
//! sequence of typed function calls drawn from the fixed catalog:
//! - Classifies intent and complexity
//! - Selects candidate functions by keyword rules
//! - Synthesizes placeholder arguments, type-directed
//! - Assembles and renders the execution plan
//! - Estimates confidence and cost
//!
//! # Example
//!
//! ```rust,no_run
//! use callplan_core::{PlannerConfig, QueryPlanner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = QueryPlanner::new(PlannerConfig::new());
//!
//! let result = planner.submit("send an email to the customer").await?;
//!
//! println!("{}", result.execution_plan);
//! println!("confidence: {:.2}", result.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod assemble;
pub mod classify;
pub mod error;
pub mod estimate;
pub mod model;
pub mod pipeline;
pub mod select;
pub mod synthesize;
pub mod types;

// Re-exports for convenience
pub use assemble::{render_plan, render_script};
pub use classify::{determine_complexity, determine_intent};
pub use error::PlannerError;
pub use model::{ModelProfile, MODEL_PROFILES};
pub use pipeline::{PlannerConfig, QueryPlanner};
pub use select::{KeywordSelector, SelectionStrategy};
pub use synthesize::{MockSynthesizer, ParameterSynthesizer};
pub use types::{call_id, Complexity, FunctionCall, ProcessedQuery};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the planner
    pub use crate::{
        Complexity, FunctionCall, PlannerConfig, PlannerError, ProcessedQuery, QueryPlanner,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn full_flow_over_builtin_catalog() {
        let planner = QueryPlanner::new(PlannerConfig::new().without_latency().with_seed(7));

        let result = planner.submit("retrieve invoices and send a summary").await.unwrap();

        assert!(!result.function_calls.is_empty());
        let catalog = callplan_catalog::FunctionCatalog::builtin();
        for call in &result.function_calls {
            assert!(catalog.find(&call.function).is_some());
        }
    }

    #[test]
    fn types_integration() {
        assert_eq!(determine_intent("fetch the data"), "Data Retrieval");
        assert_eq!(determine_complexity("fetch the data"), Complexity::Simple);
    }
}
