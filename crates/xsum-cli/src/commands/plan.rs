use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use xsum_core::QueryPlan;

use super::{print_views, view_report};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// YAML query plan (`index` settings plus a list of `queries`).
    #[arg(long)]
    pub config: PathBuf,
    /// Emit the views as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &PlanArgs) -> Result<(), Box<dyn Error>> {
    let plan = load_plan(&args.config)?;
    let views = plan.evaluate()?;
    let reports = views
        .iter()
        .map(|(label, view)| view_report(label, view))
        .collect::<Result<Vec<_>, _>>()?;
    print_views(&reports, args.json)
}

fn load_plan(path: &Path) -> Result<QueryPlan, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
