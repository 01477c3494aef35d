use std::path::Path;

use anyhow::{Context, Result};
use csv_table_core::parse_file;

use cppalo_convert::channels::{ChannelLayout, ObjectCategory};
use cppalo_convert::classify::{host_objects, network_objects, service_objects};
use cppalo_convert::convert::{
    convert_hosts, convert_networks, convert_services, CategoryConversion, Protocol,
};
use cppalo_convert::masks::{default_mask_table, load_mask_table, MaskTable};
use cppalo_convert::report::{render_diversions, render_summary};
use cppalo_convert::summary::summarize;

use crate::cli::{ConvertArgs, OutputFormat};

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let masks = resolve_mask_table(args.mask_table.as_deref())?;

    let objects = parse_file(&args.objects)
        .with_context(|| format!("failed to parse {}", args.objects.display()))?;
    let layout = ChannelLayout::new(args.output_dir.clone(), args.review_dir.clone());

    let host_run = convert_hosts(&host_objects(&objects)?);
    layout.write(ObjectCategory::Host, &host_run)?;

    let network_run = convert_networks(&network_objects(&objects)?, &masks).with_context(|| {
        format!(
            "network object conversion failed for {}",
            args.objects.display()
        )
    })?;
    layout.write(ObjectCategory::Network, &network_run)?;

    let tcp_run = convert_service_file(args.tcp_services.as_deref(), Protocol::Tcp, &layout)?;
    let udp_run = convert_service_file(args.udp_services.as_deref(), Protocol::Udp, &layout)?;

    if args.verbose {
        if !host_run.diversions.is_empty() {
            println!("{}", render_diversions("host", &host_run.diversions));
        }
        if !network_run.diversions.is_empty() {
            println!("{}", render_diversions("network", &network_run.diversions));
        }
    }

    let summary = summarize(&host_run, &network_run, tcp_run.as_ref(), udp_run.as_ref());
    match args.format {
        OutputFormat::Text => println!("{}", render_summary(summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Convert one protocol's service export, when a file was supplied.
///
/// Each protocol runs from its own source table; nothing here reads the
/// other protocol's rows.
fn convert_service_file(
    path: Option<&Path>,
    protocol: Protocol,
    layout: &ChannelLayout,
) -> Result<Option<CategoryConversion>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let table =
        parse_file(path).with_context(|| format!("failed to parse {}", path.display()))?;
    let run = convert_services(&service_objects(&table)?, protocol);

    let category = match protocol {
        Protocol::Tcp => ObjectCategory::TcpService,
        Protocol::Udp => ObjectCategory::UdpService,
    };
    layout.write(category, &run)?;

    Ok(Some(run))
}

fn resolve_mask_table(path: Option<&Path>) -> Result<MaskTable> {
    match path {
        Some(path) => load_mask_table(path)
            .with_context(|| format!("failed to load mask table {}", path.display())),
        None => Ok(default_mask_table()),
    }
}
