mod cli;

use std::fs;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use selekt::{
    CreateOptionHandler, InitialValue, OptionEntry, SelectConfig, SelectOption, SelectState,
    TagCreation, slugify,
};

use crate::cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};

fn main() -> Result<ExitCode> {
    let cli = parse_cli();
    selekt::logging::initialize();

    let entries = load_entries(&cli)?;
    let mut state = SelectState::new(entries, build_config(&cli));

    let outcome = selekt::run(&mut state)?;
    match cli.output {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }
    Ok(if outcome.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_entries(cli: &CliArgs) -> Result<Vec<OptionEntry>> {
    let raw = fs::read_to_string(&cli.options)
        .with_context(|| format!("failed to read options file {}", cli.options.display()))?;
    serde_json::from_str(&raw).with_context(|| {
        format!(
            "options file {} is not a valid option/group sequence",
            cli.options.display()
        )
    })
}

fn build_config(cli: &CliArgs) -> SelectConfig {
    let tag_creation = match cli.slow_create {
        Some(ms) => TagCreation::Handler(slow_creator(ms)),
        None if cli.tag_creation => TagCreation::Enabled,
        None => TagCreation::Disabled,
    };
    let initial_value = match cli.values.as_slice() {
        [] => InitialValue::None,
        [value] if !cli.multiple => InitialValue::Single(value.clone()),
        values => InitialValue::Many(values.to_vec()),
    };

    let mut config = SelectConfig {
        multiple: cli.multiple,
        tag_creation,
        initial_value,
        expanded_initially: cli.expanded,
        ..SelectConfig::default()
    };
    if let Some(placeholder) = &cli.placeholder {
        config.placeholder = placeholder.clone();
    }
    if let Some(message) = &cli.no_data_message {
        config.no_data_message = message.clone();
    }
    config
}

/// Creation handler that sleeps before answering, to exercise the pending
/// throbber and cancellation paths interactively.
fn slow_creator(ms: u64) -> Box<dyn CreateOptionHandler> {
    Box::new(move |name: &str| -> Result<SelectOption> {
        thread::sleep(Duration::from_millis(ms));
        Ok(SelectOption::new(name, slugify(name)))
    })
}
