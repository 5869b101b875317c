//! freqmodel application tying transcripts, replay and output together

use crate::error::Result;
use crate::model::{FrequencyModel, OpponentModel};
use crate::session::{replay, ReplayReport, Transcript};
use crate::simulate::{generate_transcript, SimulationConfig};
use std::fmt::Write;
use std::path::Path;

/// How reports are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main freqmodel application
#[derive(Clone, Debug)]
pub struct FreqModelApp {
    format: OutputFormat,
    trace: bool,
}

impl FreqModelApp {
    pub fn new(format: OutputFormat, trace: bool) -> Self {
        Self { format, trace }
    }

    /// Load and validate a transcript from disk
    pub async fn load_transcript(path: &Path) -> Result<Transcript> {
        let raw = tokio::fs::read_to_string(path).await?;
        let transcript = Transcript::from_json(&raw)?;

        tracing::info!(
            "Loaded transcript {} ({} issues, {} offers)",
            path.display(),
            transcript.domain.issue_count(),
            transcript.offers.len()
        );

        Ok(transcript)
    }

    pub async fn save_transcript(path: &Path, transcript: &Transcript) -> Result<()> {
        tokio::fs::write(path, transcript.to_json()?).await?;
        tracing::info!("Wrote transcript to {}", path.display());
        Ok(())
    }

    /// Replay a transcript file and render the report
    pub async fn replay_file(&self, path: &Path) -> Result<String> {
        let transcript = Self::load_transcript(path).await?;
        let report = replay(&transcript, self.trace)?;
        self.render(&report)
    }

    /// Generate a synthetic transcript, optionally save it, and replay it
    pub async fn simulate(&self, config: &SimulationConfig, out: Option<&Path>) -> Result<String> {
        let transcript = generate_transcript(config)?;

        if let Some(path) = out {
            Self::save_transcript(path, &transcript).await?;
        }

        let report = replay(&transcript, self.trace)?;
        self.render(&report)
    }

    pub fn info(&self) -> Result<String> {
        let model = FrequencyModel::new();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "name": model.name(),
                "parameters": model.parameter_spec(),
            }))?),
            OutputFormat::Text => {
                let mut out = format!("Model: {}\n", model.name());
                let params = model.parameter_spec();
                if params.is_empty() {
                    out.push_str("Parameters: none\n");
                }
                for p in params {
                    let _ = writeln!(out, "  {} = {} ({})", p.name, p.default_value, p.description);
                }
                Ok(out)
            }
        }
    }

    fn render(&self, report: &ReplayReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(render_text(report)),
        }
    }
}

fn render_text(report: &ReplayReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} after {} offers", report.model, report.observations);
    let _ = writeln!(out, "Issue weights:");
    for (issue, weight) in &report.weights {
        let _ = writeln!(out, "  {:>4}  {:.4}", issue, weight);
    }

    let _ = writeln!(out, "Value usage:");
    for (issue, counts) in &report.frequencies {
        let usage: Vec<String> = counts.iter().map(|(v, c)| format!("{}={}", v, c)).collect();
        let _ = writeln!(out, "  {:>4}  {}", issue, usage.join(" "));
    }

    if !report.rounds.is_empty() {
        let _ = writeln!(out, "Weights per round:");
        for snapshot in &report.rounds {
            let weights: Vec<String> = snapshot
                .weights
                .iter()
                .map(|(issue, w)| format!("{}:{:.3}", issue, w))
                .collect();
            let _ = writeln!(
                out,
                "  #{:<3} t={:.3}  {}",
                snapshot.round,
                snapshot.time,
                weights.join(" ")
            );
        }
    }

    if !report.candidates.is_empty() {
        let _ = writeln!(out, "Candidates:");
        for scored in &report.candidates {
            let _ = writeln!(out, "  {:.4}  {}", scored.utility, scored.bid);
        }
    }

    out
}
