//! Mutable weight and frequency tables for one negotiation session

use crate::error::{ModelError, Result};
use crate::types::{Bid, Domain, IssueId, Value};
use std::collections::BTreeMap;

/// Per-issue weights, per-value usage counts, the last opponent bid and
/// the number of bids observed so far.
#[derive(Clone, Debug, Default)]
pub struct ModelState {
    weights: BTreeMap<IssueId, f64>,
    frequencies: BTreeMap<IssueId, BTreeMap<Value, u64>>,
    last_bid: Option<Bid>,
    observation_count: u64,
}

impl ModelState {
    /// Fresh state for `domain`: equal weights, all counts zero
    pub fn from_domain(domain: &Domain) -> Result<Self> {
        if domain.is_empty() {
            return Err(ModelError::EmptyDomain);
        }

        let initial_weight = 1.0 / domain.issue_count() as f64;
        let mut weights = BTreeMap::new();
        let mut frequencies = BTreeMap::new();

        for issue in domain.issues() {
            if weights.insert(issue.id, initial_weight).is_some() {
                return Err(ModelError::DuplicateIssue { issue: issue.id });
            }
            let counts = issue.values.iter().map(|v| (v.clone(), 0)).collect();
            frequencies.insert(issue.id, counts);
        }

        Ok(Self {
            weights,
            frequencies,
            last_bid: None,
            observation_count: 0,
        })
    }

    pub fn is_initialized(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Check that `bid` assigns an admissible value to every known issue
    /// and nothing else. Never mutates.
    pub fn check_bid(&self, bid: &Bid) -> Result<()> {
        if !self.is_initialized() {
            return Err(ModelError::NotInitialized);
        }

        if let Some(issue) = bid.issues().find(|id| !self.weights.contains_key(id)) {
            return Err(ModelError::UnknownIssue { issue });
        }

        for (issue, counts) in &self.frequencies {
            let value = bid
                .value(*issue)
                .ok_or(ModelError::UnassignedValue { issue: *issue })?;
            if !counts.contains_key(value) {
                return Err(ModelError::UnknownValue {
                    issue: *issue,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn weight(&self, issue: IssueId) -> Option<f64> {
        self.weights.get(&issue).copied()
    }

    /// Stored weights, normalized only if `normalize` ran since the last
    /// reinforcement
    pub fn weights(&self) -> &BTreeMap<IssueId, f64> {
        &self.weights
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weights divided by their sum, without touching the stored table
    pub fn normalized_weights(&self) -> BTreeMap<IssueId, f64> {
        let sum = self.weight_sum();
        self.weights
            .iter()
            .map(|(issue, weight)| (*issue, weight / sum))
            .collect()
    }

    pub fn frequency(&self, issue: IssueId, value: &Value) -> Option<u64> {
        self.frequencies.get(&issue)?.get(value).copied()
    }

    pub fn frequencies_for(&self, issue: IssueId) -> Option<&BTreeMap<Value, u64>> {
        self.frequencies.get(&issue)
    }

    pub fn frequencies(&self) -> &BTreeMap<IssueId, BTreeMap<Value, u64>> {
        &self.frequencies
    }

    pub fn last_bid(&self) -> Option<&Bid> {
        self.last_bid.as_ref()
    }

    pub fn observation_count(&self) -> u64 {
        self.observation_count
    }

    pub(crate) fn record_value(&mut self, issue: IssueId, value: &Value) {
        if let Some(count) = self
            .frequencies
            .get_mut(&issue)
            .and_then(|counts| counts.get_mut(value))
        {
            *count += 1;
        }
    }

    pub(crate) fn reinforce(&mut self, issue: IssueId, delta: f64) {
        if let Some(weight) = self.weights.get_mut(&issue) {
            *weight += delta;
        }
    }

    pub(crate) fn finish_observation(&mut self, bid: &Bid) {
        self.observation_count += 1;
        self.last_bid = Some(bid.clone());
    }

    /// Divide every stored weight by the current total
    pub(crate) fn normalize(&mut self) {
        let sum = self.weight_sum();
        for weight in self.weights.values_mut() {
            *weight /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Issue;

    fn domain() -> Domain {
        Domain::new(vec![
            Issue::new(1, "price", &["low", "high"]),
            Issue::new(2, "delivery", &["now", "later", "never"]),
            Issue::new(3, "warranty", &["none", "full"]),
            Issue::new(4, "color", &["red", "blue"]),
        ])
    }

    #[test]
    fn test_from_domain_initial_tables() {
        let state = ModelState::from_domain(&domain()).unwrap();

        assert_eq!(state.weights().len(), 4);
        for weight in state.weights().values() {
            assert_eq!(*weight, 0.25);
        }
        assert_eq!(state.frequencies_for(IssueId(2)).unwrap().len(), 3);
        assert_eq!(state.frequency(IssueId(2), &Value::from("later")), Some(0));
        assert!(state.last_bid().is_none());
        assert_eq!(state.observation_count(), 0);
    }

    #[test]
    fn test_empty_domain_rejected() {
        let result = ModelState::from_domain(&Domain::default());
        assert!(matches!(result, Err(ModelError::EmptyDomain)));
    }

    #[test]
    fn test_duplicate_issue_rejected() {
        let domain = Domain::new(vec![
            Issue::new(1, "price", &["low"]),
            Issue::new(1, "price again", &["high"]),
        ]);

        let result = ModelState::from_domain(&domain);
        assert!(matches!(
            result,
            Err(ModelError::DuplicateIssue { issue: IssueId(1) })
        ));
    }

    #[test]
    fn test_check_bid_errors() {
        let state = ModelState::from_domain(&domain()).unwrap();

        let partial = Bid::new().with(1, "low").with(2, "now").with(3, "full");
        assert!(matches!(
            state.check_bid(&partial),
            Err(ModelError::UnassignedValue { issue: IssueId(4) })
        ));

        let extra = partial.clone().with(4, "red").with(5, "oops");
        assert!(matches!(
            state.check_bid(&extra),
            Err(ModelError::UnknownIssue { issue: IssueId(5) })
        ));

        let bad_value = partial.with(4, "green");
        assert!(matches!(
            state.check_bid(&bad_value),
            Err(ModelError::UnknownValue { issue: IssueId(4), .. })
        ));
    }

    #[test]
    fn test_check_bid_uninitialized() {
        let state = ModelState::default();
        let bid = Bid::new().with(1, "low");
        assert!(matches!(state.check_bid(&bid), Err(ModelError::NotInitialized)));
    }

    #[test]
    fn test_normalize_in_place() {
        let mut state = ModelState::from_domain(&domain()).unwrap();
        state.reinforce(IssueId(1), 0.25);

        let view = state.normalized_weights();
        assert!((view[&IssueId(1)] - 0.4).abs() < 1e-12);
        assert_eq!(state.weight(IssueId(1)), Some(0.5));

        state.normalize();
        assert!((state.weight_sum() - 1.0).abs() < 1e-12);
        assert!((state.weight(IssueId(1)).unwrap() - 0.4).abs() < 1e-12);
        assert!((state.weight(IssueId(2)).unwrap() - 0.2).abs() < 1e-12);
    }
}
