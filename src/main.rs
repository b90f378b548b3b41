use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use modelgraft::artifact::{Artifact, ArtifactType};
use modelgraft::distribute::{distribute, rollback};
use modelgraft::inventory::HttpInventory;
use modelgraft::translate::translate;

#[derive(Parser)]
#[command(name = "modelgraft")]
#[command(about = "Model and VNF catalog loader for a graph inventory store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a model or named-query XML document into a bulk graph payload
    Translate {
        /// Path to the XML document
        file: PathBuf,
    },
    /// Distribute a VNF catalog artifact to the inventory store
    Distribute {
        /// Path to the catalog artifact
        file: PathBuf,
        /// Artifact type tag (vnf-catalog-json or vnf-catalog-xml)
        #[arg(long)]
        format: String,
        /// Inventory store base URL
        #[arg(long)]
        url: String,
        /// Correlation id threaded through logs and store calls
        #[arg(long, default_value = "local")]
        distribution_id: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate { file } => {
            let xml = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let payload = translate(&xml)?;
            println!("{}", payload);
        }
        Commands::Distribute {
            file,
            format,
            url,
            distribution_id,
        } => {
            let payload = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let artifact_type: ArtifactType = format.parse()?;
            let artifact = Artifact::new(artifact_type, payload);

            let store = HttpInventory::new(url)?;
            let outcome = distribute(&[artifact], &distribution_id, &store);
            if !outcome.success {
                let deleted = rollback(&outcome.completed, &distribution_id, &store);
                bail!(
                    "distribution {} failed; rolled back {} of {} created images",
                    distribution_id,
                    deleted,
                    outcome.completed.len()
                );
            }
            println!(
                "distribution {} complete ({} images created)",
                distribution_id,
                outcome.completed.len()
            );
        }
    }

    Ok(())
}
