//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler takes the effective configuration (defaults, config file and
//! command-line overrides already merged) and returns the process exit code.

mod metrics;
mod options;
mod project;
mod recommend;

pub use metrics::run_metrics;
pub use options::run_options;
pub use project::run_project;
pub use recommend::run_recommend;

use crate::config::{AppConfig, Validatable};
use crate::error::AdvisorError;
use crate::pipeline::{
    Evaluation, OutputTarget, evaluate, resolve_format, should_use_color, write_output,
};
use crate::reports::{ReportConfig, ReportKind, create_reporter};
use anyhow::Result;

/// Reject configurations that fail validation, logging every problem.
fn check_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("{error}");
    }
    let details = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(AdvisorError::config(details).into())
}

/// Validate, evaluate, render a report of `kind` and write it to the
/// configured target.
fn evaluate_and_emit(config: &AppConfig, kind: ReportKind) -> Result<Evaluation> {
    check_config(config)?;
    let evaluation = evaluate(config)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = resolve_format(config.output.format, &target);
    let colored = should_use_color(config.output.no_color, &target);
    tracing::debug!("Rendering {:?} report as {format}", kind);

    let reporter = create_reporter(format, colored);
    let report = reporter.generate_evaluation_report(&evaluation, &ReportConfig::new(kind))?;
    write_output(&report, &target, config.behavior.quiet)?;

    Ok(evaluation)
}
