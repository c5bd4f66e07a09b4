use std::error::Error;

use clap::Args;
use xsum_core::QueryPlan;

use super::{print_views, view_report};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Emit the views as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let views = QueryPlan::dozenal_demo().evaluate()?;
    let reports = views
        .iter()
        .map(|(label, view)| view_report(label, view))
        .collect::<Result<Vec<_>, _>>()?;
    print_views(&reports, args.json)
}
