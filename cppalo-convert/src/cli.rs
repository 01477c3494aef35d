use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cppalo-convert")]
#[command(about = "Convert Check Point object exports into Palo Alto set commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert an object export into per-category set-command files.
    Convert(ConvertArgs),
    /// Show a classification census of a single export table.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Address-object export CSV (Name, IPv4, Mask columns).
    pub objects: PathBuf,
    /// TCP service export CSV (Name, Port columns).
    #[arg(long)]
    pub tcp_services: Option<PathBuf>,
    /// UDP service export CSV (Name, Port columns).
    #[arg(long)]
    pub udp_services: Option<PathBuf>,
    /// Directory for accepted set-command files.
    #[arg(long, default_value = "converted")]
    pub output_dir: PathBuf,
    /// Directory for per-category review files.
    #[arg(long, default_value = "review")]
    pub review_dir: PathBuf,
    /// Optional mask-table TOML override. Defaults to the embedded table.
    #[arg(long)]
    pub mask_table: Option<PathBuf>,
    /// Output format for the run summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Echo diverted rows on stdout as they are routed.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Export CSV to inspect.
    pub file: PathBuf,
    /// Treat the file as a protocol-specific service export.
    #[arg(long)]
    pub service: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
