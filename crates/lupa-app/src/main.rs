//! One-shot builder for the Spanish icon-search map.
//!
//! Takes every icon name we can find and the data from an English to
//! Spanish dictionary and produces a JSON file like
//! `{"spanish term": ["matching-icon", ...], ...}` covering all the
//! icons and as many Spanish terms for them as the data yields. Any
//! data-quality problem aborts the run before output is written.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lupa_core::normalize::DictionaryBuilder;
use lupa_core::{build_search_map, verify_coverage};

mod io;

#[derive(Parser, Debug)]
#[clap(name = "lupa", version, about = "Builds the Spanish search-term map for an icon set.")]
struct Cli {
    /// Directory containing the icon svg assets.
    #[clap(short = 'i', long)]
    icons_dir: PathBuf,

    /// English-Spanish dictionary XML file.
    #[clap(short = 'd', long)]
    dictionary: PathBuf,

    /// File to which the search map is written as compact JSON.
    #[clap(short = 'o', long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // The two inputs are unrelated; load them concurrently and join
    // before aggregation.
    let (icons, raw_entries) = tokio::try_join!(
        io::load_icons(&cli.icons_dir),
        io::load_dictionary(&cli.dictionary),
    )?;

    let mut builder = DictionaryBuilder::new();
    for entry in &raw_entries {
        // Entries without a translation text are skipped entirely.
        if let Some(spanish) = &entry.spanish {
            builder.add_raw(&entry.english, spanish)?;
        }
    }
    builder.apply_overrides(lupa_dictionary::overrides::entries());
    let dictionary = builder.finish();
    tracing::info!("dictionary ready with {} keys", dictionary.len());

    let ignore = lupa_dictionary::ignore::terms();
    let search = build_search_map(&icons, &dictionary, &ignore)?;
    verify_coverage(&search, &icons)?;

    let json = serde_json::to_string(&search).context("serializing search map")?;
    tokio::fs::write(&cli.out, json)
        .await
        .with_context(|| format!("writing {}", cli.out.display()))?;
    tracing::info!("wrote {} search terms to {}", search.len(), cli.out.display());
    Ok(())
}
