//! Opponent preference estimation from observed offers

pub mod frequency;
pub mod shared;
pub mod state;
pub mod utility_space;

pub use frequency::{FrequencyModel, DELTA, MODEL_NAME};
pub use shared::SharedModel;
pub use state::ModelState;
pub use utility_space::{OpponentUtilitySpace, ScoredBid};

use crate::error::Result;
use crate::types::{Bid, Domain};
use serde::{Deserialize, Serialize};

/// A tunable parameter declared by an opponent model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub default_value: f64,
    pub description: String,
}

/// Interface a negotiating agent uses to drive an opponent model.
///
/// The host calls `initialize` once per session, `observe` for every
/// opponent offer in arrival order, and `evaluate` whenever it needs the
/// estimated opponent utility of a candidate bid.
pub trait OpponentModel {
    /// Human readable model name
    fn name(&self) -> &'static str;

    /// Tunable parameters understood by this model
    fn parameter_spec(&self) -> Vec<ParameterSpec>;

    /// Reset all state for a new session over `domain`
    fn initialize(&mut self, domain: &Domain) -> Result<()>;

    /// Record the opponent's newest offer. `time` is the session time marker.
    fn observe(&mut self, bid: &Bid, time: f64) -> Result<()>;

    /// Estimated opponent utility of `bid`
    fn evaluate(&mut self, bid: &Bid) -> Result<f64>;
}
