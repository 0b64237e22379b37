//! Testing utilities for the Callplan workspace
//!
//! Shared fixtures and helpers for pipeline tests.

#![allow(missing_docs)]

use callplan_catalog::{FunctionCatalog, FunctionDefinition, ParameterType, ReturnSpec};
use callplan_core::{PlannerConfig, QueryPlanner};
use std::time::Duration;

/// A planner with zero latency and a fixed seed, for deterministic tests.
pub fn setup_test_planner() -> QueryPlanner {
    setup_test_planner_with_seed(42)
}

/// A zero-latency planner with an explicit seed.
pub fn setup_test_planner_with_seed(seed: u64) -> QueryPlanner {
    QueryPlanner::new(PlannerConfig::new().without_latency().with_seed(seed))
}

/// A planner that keeps a short but real latency window, for concurrency tests.
pub fn setup_slow_planner(latency: Duration) -> QueryPlanner {
    QueryPlanner::new(PlannerConfig::new().with_latency(latency, latency).with_seed(42))
}

/// A tiny two-entry catalog for assembler-focused tests.
pub fn tiny_catalog() -> FunctionCatalog {
    FunctionCatalog::new(vec![
        FunctionDefinition::new(
            "alpha",
            "First test function",
            "Testing",
            ReturnSpec::new(ParameterType::Object, "result"),
        ),
        FunctionDefinition::new(
            "beta",
            "Second test function",
            "Testing",
            ReturnSpec::new(ParameterType::Object, "result"),
        ),
    ])
}

/// Queries covering every complexity tier.
pub fn sample_queries() -> Vec<&'static str> {
    vec![
        "send an email",
        "fetch customer data and send a summary report",
        "analyze all metrics and generate a workflow report for every region",
    ]
}
