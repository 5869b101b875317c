//! Negotiation session replay driving an opponent model

pub mod replay;
pub mod transcript;

pub use replay::{replay, ReplayReport, RoundSnapshot};
pub use transcript::{Offer, Transcript};
