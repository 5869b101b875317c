//! Estimated opponent utility space backed by an opponent model

use crate::error::Result;
use crate::types::Bid;
use serde::{Deserialize, Serialize};

use super::OpponentModel;

/// A bid together with its estimated opponent utility
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredBid {
    pub bid: Bid,
    pub utility: f64,
}

/// Utility space view over an opponent model.
///
/// Every lookup goes through [`OpponentModel::evaluate`], so the model's
/// weights are normalized as a side effect.
pub struct OpponentUtilitySpace<'a, M: OpponentModel> {
    model: &'a mut M,
}

impl<'a, M: OpponentModel> OpponentUtilitySpace<'a, M> {
    pub fn new(model: &'a mut M) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Estimated opponent utility of a single bid
    pub fn utility(&mut self, bid: &Bid) -> Result<f64> {
        self.model.evaluate(bid)
    }

    pub fn utilities(&mut self, bids: &[Bid]) -> Result<Vec<f64>> {
        bids.iter().map(|bid| self.model.evaluate(bid)).collect()
    }

    /// Score `bids` and sort them by estimated opponent utility, best first.
    /// Ties keep their input order.
    pub fn rank(&mut self, bids: &[Bid]) -> Result<Vec<ScoredBid>> {
        let mut scored = bids
            .iter()
            .map(|bid| -> Result<ScoredBid> {
                Ok(ScoredBid {
                    bid: bid.clone(),
                    utility: self.model.evaluate(bid)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        scored.sort_by(|a, b| b.utility.total_cmp(&a.utility));
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::{FrequencyModel, ParameterSpec};
    use crate::types::{Domain, Issue};

    /// Scores a bid by how many issues take their first admissible value
    struct FirstValueModel {
        domain: Domain,
    }

    impl OpponentModel for FirstValueModel {
        fn name(&self) -> &'static str {
            "First Value Model"
        }

        fn parameter_spec(&self) -> Vec<ParameterSpec> {
            Vec::new()
        }

        fn initialize(&mut self, domain: &Domain) -> Result<()> {
            self.domain = domain.clone();
            Ok(())
        }

        fn observe(&mut self, _bid: &Bid, _time: f64) -> Result<()> {
            Ok(())
        }

        fn evaluate(&mut self, bid: &Bid) -> Result<f64> {
            let hits = self
                .domain
                .issues()
                .iter()
                .filter(|issue| bid.value(issue.id) == issue.values.first())
                .count();
            Ok(hits as f64)
        }
    }

    fn domain() -> Domain {
        Domain::new(vec![
            Issue::new(1, "price", &["low", "high"]),
            Issue::new(2, "delivery", &["now", "later"]),
        ])
    }

    #[test]
    fn test_rank_orders_best_first() {
        let mut model = FirstValueModel { domain: domain() };
        let mut space = OpponentUtilitySpace::new(&mut model);

        let bids = vec![
            Bid::new().with(1, "high").with(2, "later"),
            Bid::new().with(1, "low").with(2, "now"),
            Bid::new().with(1, "low").with(2, "later"),
        ];

        let ranked = space.rank(&bids).unwrap();
        let utilities: Vec<f64> = ranked.iter().map(|s| s.utility).collect();

        assert_eq!(utilities, vec![2.0, 1.0, 0.0]);
        assert_eq!(ranked[0].bid, bids[1]);
        assert_eq!(space.model_name(), "First Value Model");
    }

    #[test]
    fn test_frequency_model_ties_keep_order() {
        let mut model = FrequencyModel::with_domain(&domain()).unwrap();
        let first = Bid::new().with(1, "low").with(2, "now");
        let second = Bid::new().with(1, "high").with(2, "later");
        model.observe(&first, 0.1).unwrap();

        let mut space = OpponentUtilitySpace::new(&mut model);
        let ranked = space.rank(&[second.clone(), first.clone()]).unwrap();

        assert_eq!(ranked[0].bid, second);
        assert_eq!(ranked[1].bid, first);
        assert!((ranked[0].utility - ranked[1].utility).abs() < 1e-9);
    }

    #[test]
    fn test_utilities_propagate_errors() {
        let mut model = FrequencyModel::with_domain(&domain()).unwrap();
        let mut space = OpponentUtilitySpace::new(&mut model);

        let result = space.utilities(&[Bid::new().with(1, "low").with(2, "now")]);
        assert!(matches!(result, Err(ModelError::NoObservations)));
    }
}
