//! Error types for the planning pipeline
//!
//! The pipeline stages are total functions over well-typed input; the only
//! failures a caller can observe are the single-flight rejection and a
//! selector rule pointing at a function the catalog does not carry.

/// Main planner error type
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Submit called while a query is already in flight
    #[error("already processing a query")]
    Busy,

    /// A selector rule referenced a function missing from the catalog
    ///
    /// The assembler recovers from this by dropping the entry, so with a
    /// consistent rule table it never escapes `submit`.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

impl PlannerError {
    /// Check if the caller can simply retry later
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}
