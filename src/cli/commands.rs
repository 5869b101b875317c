//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "freqmodel")]
#[command(about = "freqmodel - Frequency-based opponent modeling for multi-issue negotiation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded negotiation transcript (JSON) through the model
    Replay {
        /// Path to the transcript file
        path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Include normalized weights after every offer
        #[arg(short, long)]
        trace: bool,
    },

    /// Generate a synthetic opponent transcript and replay it
    Simulate {
        /// Number of issues
        #[arg(short, long, default_value = "3")]
        issues: usize,

        /// Values per issue
        #[arg(short, long, default_value = "4")]
        values: usize,

        /// Issue numbers the opponent holds fixed (comma separated)
        #[arg(short, long, value_delimiter = ',', default_value = "1")]
        fixed: Vec<u32>,

        /// Number of opponent offers
        #[arg(short, long, default_value = "40")]
        rounds: usize,

        /// RNG seed
        #[arg(short, long, default_value = "7")]
        seed: u64,

        /// Write the generated transcript to this file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Include normalized weights after every offer
        #[arg(short, long)]
        trace: bool,
    },

    /// Show model name and declared parameters
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["freqmodel", "replay", "session.json", "--json"]);
        match cli.command {
            Commands::Replay { path, json, trace } => {
                assert_eq!(path, PathBuf::from("session.json"));
                assert!(json);
                assert!(!trace);
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_parse_simulate_fixed_list() {
        let cli = Cli::parse_from(["freqmodel", "simulate", "--fixed", "1,3", "--rounds", "10"]);
        match cli.command {
            Commands::Simulate {
                fixed,
                rounds,
                issues,
                ..
            } => {
                assert_eq!(fixed, vec![1, 3]);
                assert_eq!(rounds, 10);
                assert_eq!(issues, 3);
            }
            _ => panic!("Wrong command"),
        }
    }
}
