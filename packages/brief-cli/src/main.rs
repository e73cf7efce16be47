//! Command-line front end for the briefing pipeline.
//!
//! Loads a `.docx` document of country updates, runs the three-stage
//! pipeline against the configured model, and prints the email draft
//! for human review. No email is sent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use briefing::{DocxLoader, OpenAI, Pipeline};

/// Draft a country-update notification email from a Word document.
#[derive(Parser)]
#[command(name = "brief", version)]
struct Args {
    /// Path to the .docx document with country updates
    path: PathBuf,

    /// Chat model to use (default: gpt-4o)
    #[arg(long)]
    model: Option<String>,

    /// Also print the intermediate stage outputs
    #[arg(long)]
    full: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut model = OpenAI::from_env().context("configuring model client")?;
    if let Some(name) = args.model {
        model = model.with_model(name);
    }

    let pipeline = Pipeline::new(model);
    let briefing = pipeline
        .run_document(&DocxLoader::new(), &args.path)
        .await
        .with_context(|| format!("drafting briefing for {}", args.path.display()))?;

    if args.full {
        println!("## Country updates\n\n{}\n", briefing.country_updates);
        println!("## Regional summary\n\n{}\n", briefing.regional_summary);
        println!("## Email draft\n");
    }
    println!("{}", briefing.email_draft);

    Ok(())
}
