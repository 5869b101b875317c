//! freqmodel CLI binary

use anyhow::Context;
use clap::Parser;
use freqmodel::cli::{Cli, Commands, FreqModelApp, OutputFormat};
use freqmodel::simulate::SimulationConfig;

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Replay { path, json, trace } => {
            tracing::info!("Replaying transcript {}", path.display());

            FreqModelApp::new(output_format(json), trace)
                .replay_file(&path)
                .await
                .with_context(|| format!("failed to replay {}", path.display()))?
        }

        Commands::Simulate {
            issues,
            values,
            fixed,
            rounds,
            seed,
            out,
            json,
            trace,
        } => {
            let config = SimulationConfig {
                issues,
                values,
                fixed,
                rounds,
                seed,
            };
            tracing::info!("Simulating opponent: {:?}", config);

            FreqModelApp::new(output_format(json), trace)
                .simulate(&config, out.as_deref())
                .await
                .context("simulation failed")?
        }

        Commands::Info { json } => FreqModelApp::new(output_format(json), false).info()?,
    };

    println!("{}", output);

    Ok(())
}
