use std::error::Error;

use clap::Args;
use tracing::info;
use xsum_core::QuerySpec;

use super::{print_views, view_report, AlphabetArgs};

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub catalog: AlphabetArgs,
    /// Total, written as a numeral in the catalog's base.
    #[arg(long)]
    pub total: Option<String>,
    /// Exact number of addends.
    #[arg(long)]
    pub cardinality: Option<usize>,
    /// Characters of the digits every match must contain.
    #[arg(long)]
    pub digits: Option<String>,
    /// Emit the view as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &QueryArgs) -> Result<(), Box<dyn Error>> {
    let index = args.catalog.build()?;
    let query = QuerySpec {
        label: String::new(),
        total: args.total.clone(),
        cardinality: args.cardinality,
        digits: args.digits.clone(),
    };
    let view = index.filter(&query.to_filter(index.alphabet())?);
    info!(base = index.base(), matches = view.len(), "query complete");
    print_views(&[view_report("", &view)?], args.json)
}
