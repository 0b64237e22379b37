//! Pipeline orchestrator
//!
//! Sequences classification, selection, synthesis, assembly and estimation
//! into one [`ProcessedQuery`]. At most one query may be in flight per
//! planner instance; a second `submit` fails fast with
//! [`PlannerError::Busy`] rather than queueing.

use crate::assemble;
use crate::classify;
use crate::error::PlannerError;
use crate::estimate;
use crate::model::{self, ModelProfile, MODEL_PROFILES};
use crate::select::{KeywordSelector, SelectionStrategy};
use crate::synthesize::{MockSynthesizer, ParameterSynthesizer};
use crate::types::ProcessedQuery;
use callplan_catalog::FunctionCatalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Planner configuration
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Lower bound of the simulated inference latency
    pub min_latency: Duration,
    /// Upper bound of the simulated inference latency
    pub max_latency: Duration,
    /// Fixed seed for synthesis and jitter; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl PlannerConfig {
    /// Create default configuration (2-5 s simulated latency, OS entropy)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a latency window
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.min_latency = min;
        self.max_latency = max;
        self
    }

    /// With no simulated latency (tests)
    #[inline]
    #[must_use]
    pub fn without_latency(self) -> Self {
        self.with_latency(Duration::ZERO, Duration::ZERO)
    }

    /// With a fixed randomness seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_latency: Duration::from_secs(2),
            max_latency: Duration::from_secs(5),
            seed: None,
        }
    }
}

/// Mutable pipeline state, owned by the busy guard
///
/// Holding the lock *is* the busy flag: `try_lock` failure is the Busy
/// signal and the guard's drop releases the planner on every exit path.
#[derive(Debug)]
struct PipelineState {
    synthesizer: Box<dyn ParameterSynthesizer>,
    rng: StdRng,
}

/// The query-to-plan orchestrator
#[derive(Debug)]
pub struct QueryPlanner {
    /// Configuration
    config: PlannerConfig,
    /// Function catalog queried during assembly
    catalog: Arc<FunctionCatalog>,
    /// Candidate selection strategy
    selector: Box<dyn SelectionStrategy>,
    /// Index into [`MODEL_PROFILES`]; display/labeling only
    selected_model: usize,
    /// Single-flight guard around the mutable pipeline state
    state: Mutex<PipelineState>,
}

impl QueryPlanner {
    /// Create a planner over the built-in catalog
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        let synthesizer: Box<dyn ParameterSynthesizer> = match config.seed {
            Some(seed) => Box::new(MockSynthesizer::seeded(seed)),
            None => Box::new(MockSynthesizer::new()),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            catalog: Arc::new(FunctionCatalog::builtin().clone()),
            selector: Box::new(KeywordSelector::new()),
            selected_model: 0,
            state: Mutex::new(PipelineState { synthesizer, rng }),
        }
    }

    /// With a custom catalog
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<FunctionCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// With a custom selection strategy
    #[inline]
    #[must_use]
    pub fn with_selector(mut self, selector: Box<dyn SelectionStrategy>) -> Self {
        self.selector = selector;
        self
    }

    /// With a custom synthesis backend
    #[must_use]
    pub fn with_synthesizer(self, synthesizer: Box<dyn ParameterSynthesizer>) -> Self {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: Mutex::new(PipelineState { synthesizer, rng }),
            ..self
        }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Switch the active model profile; no-op if `name` is unknown
    ///
    /// The profile is used for display and labeling only and never alters
    /// selection logic.
    pub fn set_model(&mut self, name: &str) {
        if let Some(index) = model::profile_index(name) {
            self.selected_model = index;
        } else {
            tracing::debug!(name, "ignoring unknown model name");
        }
    }

    /// The currently selected model profile
    #[inline]
    #[must_use]
    pub fn selected_model(&self) -> &'static ModelProfile {
        &MODEL_PROFILES[self.selected_model]
    }

    /// Whether a query is currently in flight
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.state.try_lock().is_err()
    }

    /// Run one query through the pipeline
    ///
    /// # Errors
    /// - [`PlannerError::Busy`] if another query is already in flight
    pub async fn submit(&self, query: &str) -> Result<ProcessedQuery, PlannerError> {
        // Acquiring the guard transitions Idle -> Processing; dropping it
        // at any exit transitions back.
        let mut state = self.state.try_lock().map_err(|_| PlannerError::Busy)?;

        tracing::info!(query, model = self.selected_model().name, "processing query");

        // Simulated inference latency: the single suspension point.
        let latency = sample_latency(&self.config, &mut state.rng);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let complexity = classify::determine_complexity(query);
        let intent = classify::determine_intent(query);
        tracing::debug!(%complexity, intent, "classified query");

        let selected = self.selector.select(query);
        tracing::debug!(
            count = selected.len(),
            strategy = self.selector.name(),
            "selected candidate functions"
        );

        let names: Vec<&str> = selected.iter().copied().collect();
        let calls =
            assemble::assemble(&names, &self.catalog, state.synthesizer.as_mut(), query).await;
        let execution_plan = assemble::render_plan(&calls);

        let estimated_time = estimate::estimate_time(calls.len(), &mut state.rng);
        let confidence = estimate::estimate_confidence(selected.len());

        tracing::info!(calls = calls.len(), confidence, "query processed");

        Ok(ProcessedQuery {
            query: query.to_string(),
            intent: intent.to_string(),
            complexity,
            function_calls: calls,
            execution_plan,
            estimated_time,
            confidence,
        })
    }
}

impl Default for QueryPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Sample a latency inside the configured window
///
/// Sampling works in whole milliseconds; windows that collapse after
/// truncation take the lower bound instead of sampling an empty range.
fn sample_latency<R: Rng>(config: &PlannerConfig, rng: &mut R) -> Duration {
    let min = config.min_latency.min(config.max_latency);
    let max = config.max_latency.max(config.min_latency);
    let min_ms = min.as_millis() as u64;
    let max_ms = max.as_millis() as u64;
    if min_ms >= max_ms {
        return min;
    }
    Duration::from_millis(rng.random_range(min_ms..max_ms))
}
