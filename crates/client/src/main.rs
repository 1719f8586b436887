//! Terminal client entry point.
mod app;
mod input;
mod presentation;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kit_content::{CatalogIndex, CatalogLoader};

use app::App;

/// Assemble a loadout kit and export its provisioning commands.
#[derive(Parser, Debug)]
#[command(name = "kit-client", version)]
struct Args {
    /// Path to the item catalog JSON document
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Initial kit name used in generated commands
    #[arg(long, default_value = "")]
    kit_name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => CatalogLoader::load_or_empty(path),
        None => {
            tracing::warn!("no catalog supplied, starting with an empty catalog");
            CatalogIndex::empty()
        }
    };

    App::new(catalog, args.kit_name).run()
}
