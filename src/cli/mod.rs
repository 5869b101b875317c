//! CLI module for freqmodel

pub mod app;
pub mod commands;

pub use app::{FreqModelApp, OutputFormat};
pub use commands::{Cli, Commands};
