use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use selekt::SelectOutcome;

/// Interactive dropdown select for the terminal.
#[derive(Debug, Parser)]
#[command(name = "selekt", version, about)]
pub struct CliArgs {
    /// JSON file holding the option/group sequence.
    #[arg(short, long, value_name = "FILE", env = "SELEKT_OPTIONS")]
    pub options: PathBuf,

    /// Allow selecting several options, shown as chips.
    #[arg(short, long)]
    pub multiple: bool,

    /// Offer a "Create ..." prompt when the search matches nothing.
    #[arg(short = 't', long)]
    pub tag_creation: bool,

    /// Simulate a slow creation backend with the given latency.
    #[arg(long, value_name = "MS", conflicts_with = "tag_creation")]
    pub slow_create: Option<u64>,

    /// Text shown while nothing is selected.
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Message shown when the dropdown has nothing to offer.
    #[arg(long)]
    pub no_data_message: Option<String>,

    /// Pre-selected option value; repeat for multi-select.
    #[arg(long = "value", value_name = "VALUE")]
    pub values: Vec<String>,

    /// Start with the dropdown already expanded.
    #[arg(long)]
    pub expanded: bool,

    /// Output format for the final selection.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

/// One `value<TAB>name` line per selected option.
pub fn print_plain(outcome: &SelectOutcome) {
    for (value, name) in outcome.values.iter().zip(&outcome.names) {
        println!("{value}\t{name}");
    }
}

pub fn print_json(outcome: &SelectOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
