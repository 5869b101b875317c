//! Replay a transcript through the frequency model

use crate::error::Result;
use crate::model::{FrequencyModel, OpponentModel, OpponentUtilitySpace, ScoredBid};
use crate::types::{IssueId, Value};
use serde::Serialize;
use std::collections::BTreeMap;

use super::transcript::Transcript;

/// Normalized weights after one observed offer
#[derive(Clone, Debug, Serialize)]
pub struct RoundSnapshot {
    pub round: usize,
    pub time: f64,
    pub weights: BTreeMap<IssueId, f64>,
}

/// Final model state and candidate scores after a replay
#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    pub model: String,
    pub observations: u64,
    pub weights: BTreeMap<IssueId, f64>,
    pub frequencies: BTreeMap<IssueId, BTreeMap<Value, u64>>,
    pub candidates: Vec<ScoredBid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundSnapshot>,
}

/// Initialize once, observe every offer in order, then rank the candidates.
/// With `trace` set, a weight snapshot is kept after every offer.
pub fn replay(transcript: &Transcript, trace: bool) -> Result<ReplayReport> {
    transcript.validate()?;

    let mut model = FrequencyModel::new();
    model.initialize(&transcript.domain)?;

    let mut rounds = Vec::new();
    for (round, offer) in transcript.offers.iter().enumerate() {
        model.observe(&offer.bid, offer.time)?;

        if trace {
            rounds.push(RoundSnapshot {
                round: round + 1,
                time: offer.time,
                weights: model.normalized_weights(),
            });
        }
    }

    let candidates = if transcript.candidates.is_empty() {
        Vec::new()
    } else {
        OpponentUtilitySpace::new(&mut model).rank(&transcript.candidates)?
    };

    tracing::info!(
        "Replayed {} offers, scored {} candidates",
        model.observation_count(),
        candidates.len()
    );

    Ok(ReplayReport {
        model: model.name().to_string(),
        observations: model.observation_count(),
        weights: model.normalized_weights(),
        frequencies: model.state().frequencies().clone(),
        candidates,
        rounds,
    })
}
