use colored::Colorize;

use crate::convert::Diversion;
use crate::inspect::InspectReport;
use crate::summary::{self, ConversionSummary};

/// Render the post-run summary line for terminal output.
pub fn render_summary(summary: ConversionSummary) -> String {
    summary::render(summary).cyan().to_string()
}

/// Render diverted rows for terminal output, one line per row.
pub fn render_diversions(label: &str, diversions: &[Diversion]) -> String {
    let mut out = Vec::new();
    for diversion in diversions {
        out.push(format!(
            "{} {}",
            format!("REVIEW {label}").yellow(),
            diversion.render()
        ));
    }
    out.join("\n")
}

/// Render an inspect census line.
pub fn render_inspect(report: &InspectReport) -> String {
    format!(
        "inspect rows={} hosts={} networks={} services={} unclassified={}",
        report.rows, report.hosts, report.networks, report.services, report.unclassified
    )
}
