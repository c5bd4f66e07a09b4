use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    demo::{self, DemoArgs},
    plan::{self, PlanArgs},
    query::{self, QueryArgs},
    stats::{self, StatsArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "xsum", about = "Cross-sum catalog explorer")]
struct Cli {
    /// Emit debug logging for enumeration and filtering.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the built-in dozenal walkthrough.
    Demo(DemoArgs),
    /// Print one filtered view of a catalog.
    Query(QueryArgs),
    /// Evaluate every view listed in a YAML query plan.
    Plan(PlanArgs),
    /// Summarise a full catalog as JSON.
    Stats(StatsArgs),
    /// Print the tool version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("xsum=debug,xsum_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xsum=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Demo(args) => demo::run(&args),
        Command::Query(args) => query::run(&args),
        Command::Plan(args) => plan::run(&args),
        Command::Stats(args) => stats::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
