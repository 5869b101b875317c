//! Frequency-based opponent modeling for multi-issue negotiation
//!
//! Estimates an opponent's issue weights and value preferences online from
//! the offers it makes:
//! - per-issue weights reinforced when a value repeats across consecutive offers
//! - per-value usage counts
//! - a utility estimate for any candidate bid

pub mod cli;
pub mod error;
pub mod model;
pub mod session;
pub mod simulate;
pub mod types;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use model::{
    FrequencyModel, ModelState, OpponentModel, OpponentUtilitySpace, ParameterSpec, ScoredBid,
    SharedModel, DELTA,
};
pub use session::{replay, Offer, ReplayReport, Transcript};
pub use types::{Bid, Domain, Issue, IssueId, Value};
