use anyhow::{Context, Result};
use csv_table_core::parse_file;

use cppalo_convert::inspect::{build_address_report, build_service_report};
use cppalo_convert::report::render_inspect;

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let table = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let report = if args.service {
        build_service_report(&table)?
    } else {
        build_address_report(&table)?
    };

    match args.format {
        OutputFormat::Text => println!("{}", render_inspect(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
