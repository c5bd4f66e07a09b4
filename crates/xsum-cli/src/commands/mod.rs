use std::error::Error;

use clap::Args;
use serde::Serialize;
use xsum_core::{Alphabet, IndexConfig, RenderedCrossSum, SubsetSumIndex};

pub mod demo;
pub mod plan;
pub mod query;
pub mod stats;
pub mod version;

/// Alphabet selection shared by commands that build a catalog.
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Digit characters of the numeral base, zero first.
    #[arg(long, conflicts_with = "base")]
    pub alphabet: Option<String>,
    /// Numeral base using the standard `0-9A-Za-z+/` characters.
    #[arg(long)]
    pub base: Option<usize>,
    /// Largest base for which full enumeration is attempted.
    #[arg(long, default_value_t = IndexConfig::default().max_base)]
    pub max_base: usize,
}

impl AlphabetArgs {
    pub fn build(&self) -> Result<SubsetSumIndex, Box<dyn Error>> {
        let alphabet = match (&self.alphabet, self.base) {
            (Some(symbols), _) => Alphabet::new(symbols)?,
            (None, Some(base)) => Alphabet::with_base(base)?,
            (None, None) => Alphabet::default(),
        };
        Ok(SubsetSumIndex::generate_with(alphabet, self.max_base)?)
    }
}

#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub label: String,
    pub count: usize,
    pub entries: Vec<RenderedCrossSum>,
}

pub fn view_report(label: &str, view: &SubsetSumIndex) -> Result<ViewReport, Box<dyn Error>> {
    let entries = view
        .iter()
        .map(|entry| view.render(entry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ViewReport {
        label: label.to_string(),
        count: entries.len(),
        entries,
    })
}

pub fn print_views(reports: &[ViewReport], json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        if !report.label.is_empty() {
            println!("{}:", report.label);
        }
        for entry in &report.entries {
            println!("  {entry}");
        }
    }
    Ok(())
}
