//! Project command handler.
//!
//! Cumulative monthly cost and total cost of ownership per option.

use super::evaluate_and_emit;
use crate::config::AppConfig;
use crate::pipeline::exit_codes;
use crate::reports::ReportKind;
use anyhow::Result;

/// Run the projection command.
pub fn run_project(config: &AppConfig) -> Result<i32> {
    let evaluation = evaluate_and_emit(config, ReportKind::Projection)?;
    tracing::debug!(
        "Projected {} options over {} months / {} years",
        evaluation.projections.len(),
        config.behavior.projection_months,
        config.behavior.tco_years
    );
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;

    #[test]
    fn test_project_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("projection.json");
        let config = AppConfig::builder()
            .projection(6, 3)
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();

        assert_eq!(run_project(&config).unwrap(), exit_codes::SUCCESS);
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        let rds = &json["projections"][0];
        assert_eq!(rds["cumulative_monthly"].as_array().unwrap().len(), 6);
        assert_eq!(rds["total_cost_of_ownership"], 21060.0);
    }

    #[test]
    fn test_project_rejects_zero_years() {
        let config = AppConfig::builder().projection(12, 0).quiet(true).build();
        assert!(run_project(&config).is_err());
    }
}
