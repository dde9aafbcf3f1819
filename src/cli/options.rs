//! Options command handler.
//!
//! Lists the reference profile of every architecture the engine knows.

use super::check_config;
use crate::config::AppConfig;
use crate::model::{ArchitectureProfile, lookup, profiles};
use crate::pipeline::{OutputTarget, exit_codes, resolve_format, should_use_color, write_output};
use crate::reports::create_reporter;
use anyhow::Result;

/// Run the options command.
///
/// With `only` set, lists just that option; an unknown identifier is an
/// error.
pub fn run_options(config: &AppConfig, only: Option<&str>) -> Result<i32> {
    check_config(config)?;

    let selected: Vec<ArchitectureProfile> = match only {
        Some(key) => vec![lookup(key)?],
        None => profiles().collect(),
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = resolve_format(config.output.format, &target);
    let reporter = create_reporter(format, should_use_color(config.output.no_color, &target));
    let report = reporter.generate_options_report(&selected)?;
    write_output(&report, &target, config.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}
