//! Recorded negotiation sessions

use crate::error::{ModelError, Result};
use crate::types::{Bid, Domain};
use serde::{Deserialize, Serialize};

/// One opponent offer with its normalized session time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub bid: Bid,
    pub time: f64,
}

/// Domain, opponent offers in arrival order, and bids to score afterwards
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub domain: Domain,
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub candidates: Vec<Bid>,
}

impl Transcript {
    pub fn from_json(raw: &str) -> Result<Self> {
        let transcript: Transcript = serde_json::from_str(raw)?;
        transcript.validate()?;
        Ok(transcript)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks; bid contents are checked by the model itself
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() {
            return Err(ModelError::EmptyDomain);
        }

        let mut previous = 0.0;
        for (round, offer) in self.offers.iter().enumerate() {
            if !offer.time.is_finite() || !(0.0..=1.0).contains(&offer.time) {
                return Err(ModelError::InvalidTranscript(format!(
                    "offer {} has time {} outside [0, 1]",
                    round, offer.time
                )));
            }
            if offer.time < previous {
                return Err(ModelError::InvalidTranscript(format!(
                    "offer {} at t={} arrives before t={}",
                    round, offer.time, previous
                )));
            }
            previous = offer.time;
        }

        Ok(())
    }
}
