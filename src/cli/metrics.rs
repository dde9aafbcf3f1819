//! Metrics command handler.

use super::evaluate_and_emit;
use crate::config::AppConfig;
use crate::pipeline::exit_codes;
use crate::reports::ReportKind;
use anyhow::Result;

/// Print cost, carbon, security, availability and overall score for every
/// option.
pub fn run_metrics(config: &AppConfig) -> Result<i32> {
    evaluate_and_emit(config, ReportKind::Metrics)?;
    Ok(exit_codes::SUCCESS)
}
