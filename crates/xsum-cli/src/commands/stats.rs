use std::error::Error;

use clap::Args;
use serde::Serialize;
use xsum_core::canonical_hash;

use super::AlphabetArgs;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub catalog: AlphabetArgs,
}

#[derive(Debug, Serialize)]
struct CatalogStats {
    alphabet: String,
    base: usize,
    entries: usize,
    max_total: Option<u64>,
    max_total_numeral: Option<String>,
    catalog_hash: String,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let index = args.catalog.build()?;
    // base 2 has no pairs, so the maximum is absent rather than an error here
    let max_total = index.max_total().ok();
    let stats = CatalogStats {
        alphabet: index.alphabet().to_string(),
        base: index.base(),
        entries: index.len(),
        max_total,
        max_total_numeral: max_total.map(|total| index.alphabet().format_numeral(total)),
        catalog_hash: canonical_hash(&index),
    };
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
