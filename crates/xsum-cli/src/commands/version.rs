use std::error::Error;

use clap::Args;
use serde::Serialize;
use xsum_core::provenance::CATALOG_SCHEMA;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including the catalog schema version.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    catalog_schema: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        catalog_schema: format!(
            "{}.{}.{}",
            CATALOG_SCHEMA.major, CATALOG_SCHEMA.minor, CATALOG_SCHEMA.patch
        ),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
