//! Frequency-based opponent model
//!
//! Issue weights grow by [`DELTA`] whenever the opponent repeats the value it
//! offered for that issue in its previous bid. Value usage is counted per
//! issue. A bid is scored as the weighted sum of usage ratios.
//!
//! Note that scoring sums the usage ratios of *every* admissible value of
//! each issue, not just the value the scored bid assigns. Since each
//! observation bumps exactly one value per issue, those ratios add up to 1
//! and every bid scores (almost exactly) the sum of the normalized weights.
//! The formula is kept as is; callers comparing candidates with this model
//! should not expect it to discriminate between them.

use crate::error::{ModelError, Result};
use crate::types::{Bid, Domain, IssueId, Value};
use std::collections::BTreeMap;

use super::state::ModelState;
use super::{OpponentModel, ParameterSpec};

/// Weight increment applied when an issue value repeats across consecutive offers
pub const DELTA: f64 = 0.01;

pub const MODEL_NAME: &str = "Simple Frequency Model";

/// Frequency opponent model for a single negotiation session
#[derive(Clone, Debug, Default)]
pub struct FrequencyModel {
    state: ModelState,
}

impl FrequencyModel {
    /// Create an uninitialized model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model already initialized for `domain`
    pub fn with_domain(domain: &Domain) -> Result<Self> {
        let mut model = Self::new();
        model.initialize(domain)?;
        Ok(model)
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Stored weight of `issue` (normalized only as of the last evaluation)
    pub fn weight(&self, issue: IssueId) -> Option<f64> {
        self.state.weight(issue)
    }

    pub fn weights(&self) -> &BTreeMap<IssueId, f64> {
        self.state.weights()
    }

    pub fn normalized_weights(&self) -> BTreeMap<IssueId, f64> {
        self.state.normalized_weights()
    }

    pub fn frequency(&self, issue: IssueId, value: &Value) -> Option<u64> {
        self.state.frequency(issue, value)
    }

    pub fn observation_count(&self) -> u64 {
        self.state.observation_count()
    }

    pub fn last_bid(&self) -> Option<&Bid> {
        self.state.last_bid()
    }
}

impl OpponentModel for FrequencyModel {
    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn parameter_spec(&self) -> Vec<ParameterSpec> {
        Vec::new()
    }

    fn initialize(&mut self, domain: &Domain) -> Result<()> {
        self.state = ModelState::from_domain(domain)?;

        tracing::info!(
            "Initialized {} over {} issues ({} possible bids)",
            MODEL_NAME,
            domain.issue_count(),
            domain.bid_space_size()
        );

        Ok(())
    }

    fn observe(&mut self, bid: &Bid, time: f64) -> Result<()> {
        if let Err(err) = self.state.check_bid(bid) {
            tracing::warn!("Rejected opponent bid {}: {}", bid, err);
            return Err(err);
        }

        for (issue, value) in bid.assignments() {
            self.state.record_value(issue, value);

            // First bid has nothing to repeat
            let repeated = self
                .state
                .last_bid()
                .and_then(|last| last.value(issue))
                .is_some_and(|previous| previous == value);

            if repeated {
                self.state.reinforce(issue, DELTA);
                tracing::debug!("Issue {} held at '{}', reinforcing weight", issue, value);
            }
        }

        self.state.finish_observation(bid);

        tracing::debug!(
            "Observed opponent bid #{} at t={:.3}: {}",
            self.state.observation_count(),
            time,
            bid
        );

        Ok(())
    }

    fn evaluate(&mut self, bid: &Bid) -> Result<f64> {
        if !self.state.is_initialized() {
            return Err(ModelError::NotInitialized);
        }
        if self.state.observation_count() == 0 {
            return Err(ModelError::NoObservations);
        }
        self.state.check_bid(bid)?;

        self.state.normalize();

        let observations = self.state.observation_count() as f64;
        let mut utility = 0.0;

        for issue in bid.issues() {
            let (Some(weight), Some(counts)) =
                (self.state.weight(issue), self.state.frequencies_for(issue))
            else {
                continue;
            };

            for uses in counts.values() {
                utility += weight * (*uses as f64 / observations);
            }
        }

        tracing::debug!("Evaluated {} -> {:.4}", bid, utility);

        Ok(utility)
    }
}
