//! Recommend command handler.
//!
//! Implements the `recommend` subcommand: score every option, pick the
//! winner and explain why.

use super::evaluate_and_emit;
use crate::config::AppConfig;
use crate::pipeline::exit_codes;
use crate::reports::ReportKind;
use anyhow::Result;

/// Run the recommend command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_recommend(config: &AppConfig) -> Result<i32> {
    let evaluation = evaluate_and_emit(config, ReportKind::Recommendation)?;
    let rec = &evaluation.recommendation;

    if let Some(threshold) = config.behavior.min_score
        && rec.score < threshold
    {
        tracing::error!(
            "Recommended score {:.2} is below minimum threshold {:.2}",
            rec.score,
            threshold
        );
        return Ok(exit_codes::BELOW_MIN_SCORE);
    }

    Ok(exit_codes::SUCCESS)
}
