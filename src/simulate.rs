//! Synthetic opponents for exercising the model without a live negotiation

use crate::error::{ModelError, Result};
use crate::session::{Offer, Transcript};
use crate::types::{Bid, Domain, Issue, IssueId, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Parameters for a generated transcript
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub issues: usize,
    pub values: usize,
    /// Issue numbers the opponent never concedes on
    pub fixed: Vec<u32>,
    pub rounds: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            issues: 3,
            values: 4,
            fixed: vec![1],
            rounds: 40,
            seed: 7,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.issues == 0 {
            return Err(ModelError::InvalidConfig("issues must be at least 1".to_string()));
        }
        if self.values < 2 {
            return Err(ModelError::InvalidConfig("values must be at least 2".to_string()));
        }
        if self.rounds == 0 {
            return Err(ModelError::InvalidConfig("rounds must be at least 1".to_string()));
        }
        if let Some(bad) = self.fixed.iter().find(|&&id| id == 0 || id as usize > self.issues) {
            return Err(ModelError::InvalidConfig(format!(
                "fixed issue {} is outside 1..={}",
                bad, self.issues
            )));
        }
        Ok(())
    }
}

/// Domain with issues `1..=issues`, each admitting `v1..=v<values>`
pub fn uniform_domain(issues: usize, values: usize) -> Domain {
    Domain::new(
        (1..=issues)
            .map(|i| Issue {
                id: IssueId(i as u32),
                name: format!("issue{}", i),
                values: (1..=values).map(|v| Value(format!("v{}", v))).collect(),
            })
            .collect(),
    )
}

/// Opponent that holds some issues at an anchor value and picks the rest
/// uniformly at random
pub struct SyntheticOpponent {
    domain: Domain,
    fixed: BTreeSet<IssueId>,
    anchor: Bid,
    rng: StdRng,
}

impl SyntheticOpponent {
    pub fn new(domain: Domain, fixed: &[u32], seed: u64) -> Result<Self> {
        if domain.is_empty() {
            return Err(ModelError::EmptyDomain);
        }
        if let Some(issue) = domain.issues().iter().find(|issue| issue.values.is_empty()) {
            return Err(ModelError::InvalidConfig(format!(
                "issue {} has no values",
                issue.id
            )));
        }

        let fixed: BTreeSet<IssueId> = fixed.iter().map(|id| IssueId(*id)).collect();
        if let Some(issue) = fixed.iter().find(|id| domain.issue(**id).is_none()) {
            return Err(ModelError::UnknownIssue { issue: *issue });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let anchor = Self::random_bid(&domain, &mut rng);

        Ok(Self {
            domain,
            fixed,
            anchor,
            rng,
        })
    }

    fn random_bid(domain: &Domain, rng: &mut StdRng) -> Bid {
        domain
            .issues()
            .iter()
            .map(|issue| {
                let pick = rng.gen_range(0..issue.values.len());
                (issue.id, issue.values[pick].clone())
            })
            .collect()
    }

    /// The bid the opponent would most like: anchor values everywhere
    pub fn anchor(&self) -> &Bid {
        &self.anchor
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn next_offer(&mut self) -> Bid {
        let free = Self::random_bid(&self.domain, &mut self.rng);
        self.domain
            .issues()
            .iter()
            .filter_map(|issue| {
                let source = if self.fixed.contains(&issue.id) {
                    &self.anchor
                } else {
                    &free
                };
                source.value(issue.id).map(|v| (issue.id, v.clone()))
            })
            .collect()
    }
}

/// Generate a transcript from `config`, with the anchor bid and one random
/// bid as candidates
pub fn generate_transcript(config: &SimulationConfig) -> Result<Transcript> {
    config.validate()?;

    let domain = uniform_domain(config.issues, config.values);
    let mut opponent = SyntheticOpponent::new(domain.clone(), &config.fixed, config.seed)?;

    let offers = (1..=config.rounds)
        .map(|round| Offer {
            bid: opponent.next_offer(),
            time: round as f64 / config.rounds as f64,
        })
        .collect();

    let candidates = vec![opponent.anchor().clone(), opponent.next_offer()];

    tracing::debug!(
        "Generated {} offers over {} issues (fixed: {:?})",
        config.rounds,
        config.issues,
        config.fixed
    );

    Ok(Transcript {
        domain,
        offers,
        candidates,
    })
}
