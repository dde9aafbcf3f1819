//! Markdown report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportKind};
use crate::model::{ArchitectureProfile, profile};
use crate::pipeline::Evaluation;
use crate::scoring::BENCHMARK_SCORE;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_metrics_table(out: &mut String, evaluation: &Evaluation) -> std::fmt::Result {
        writeln!(out, "## Comparison")?;
        writeln!(out)?;
        writeln!(
            out,
            "| Option | Monthly Cost ($) | Annual Cost ($) | Monthly Carbon (kg CO₂) | Annual Carbon (kg CO₂) | Security | Availability (%) | Score |"
        )?;
        writeln!(out, "|---|---:|---:|---:|---:|---:|---:|---:|")?;
        for s in evaluation.metrics.values() {
            let name = if s.architecture == evaluation.recommendation.architecture_key {
                format!("**{}**", s.name)
            } else {
                s.name.clone()
            };
            writeln!(
                out,
                "| {name} | {:.2} | {:.2} | {:.2} | {:.2} | {} | {:.2} | {:.2} |",
                s.monthly_cost,
                s.annual_cost,
                s.monthly_carbon,
                s.annual_carbon,
                s.security_score,
                s.availability,
                s.overall_score
            )?;
        }
        Ok(())
    }

    fn write_projection(out: &mut String, evaluation: &Evaluation) -> std::fmt::Result {
        writeln!(out, "## Cost Projection")?;
        writeln!(out)?;
        let months = evaluation
            .projections
            .first()
            .map_or(0, |p| p.cumulative_monthly.len());
        let years = evaluation.projections.first().map_or(0, |p| p.years);

        write!(out, "| Option |")?;
        for month in 1..=months {
            write!(out, " M{month} |")?;
        }
        writeln!(out, " TCO ({years}y) |")?;
        write!(out, "|---|")?;
        for _ in 0..=months {
            write!(out, "---:|")?;
        }
        writeln!(out)?;

        for p in &evaluation.projections {
            write!(out, "| {} |", profile(p.architecture).name)?;
            for value in &p.cumulative_monthly {
                write!(out, " {value:.2} |")?;
            }
            writeln!(out, " {:.2} |", p.total_cost_of_ownership)?;
        }
        Ok(())
    }

    fn write_recommendation(
        out: &mut String,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        let rec = &evaluation.recommendation;
        writeln!(out, "## Recommendation")?;
        writeln!(out)?;
        writeln!(
            out,
            "**{}** scores **{:.2}/100** ({} band, {:+.2} vs benchmark of {BENCHMARK_SCORE}).",
            rec.recommended_name,
            rec.score,
            rec.band.label(),
            rec.delta_from_benchmark()
        )?;
        writeln!(out)?;
        writeln!(out, "> {}", rec.reason)?;
        writeln!(out)?;

        Self::write_metrics_table(out, evaluation)?;

        if config.include_insights {
            let insights = &evaluation.insights;
            writeln!(out)?;
            writeln!(out, "## Insights")?;
            writeln!(out)?;
            writeln!(
                out,
                "- Lowest cost: {} (saves ${:.2}/year vs {})",
                profile(insights.cheapest).name,
                insights.potential_annual_savings,
                profile(insights.most_expensive).name
            )?;
            writeln!(
                out,
                "- Lowest carbon: {} (saves {:.2} kg CO₂/year vs {})",
                profile(insights.greenest).name,
                insights.annual_carbon_savings,
                profile(insights.highest_emitter).name
            )?;
            writeln!(
                out,
                "- Carbon difference equals {:.2} trees absorbing CO₂ for a year",
                insights.trees_equivalent_to_savings
            )?;
        }
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}", config.kind.title())?;
        writeln!(out)?;
        let [cost, carbon, security] = evaluation.weights.as_percentages();
        writeln!(
            out,
            "Workload: {} GB storage, {}M requests/month. Priorities: cost {cost}%, carbon {carbon}%, security {security}%.",
            evaluation.workload.storage_gb, evaluation.workload.requests_millions
        )?;
        writeln!(out)?;

        match config.kind {
            ReportKind::Recommendation => Self::write_recommendation(&mut out, evaluation, config)?,
            ReportKind::Metrics => Self::write_metrics_table(&mut out, evaluation)?,
            ReportKind::Projection => Self::write_projection(&mut out, evaluation)?,
        }

        Ok(out)
    }

    fn generate_options_report(
        &self,
        profiles: &[ArchitectureProfile],
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# Available Architectures")?;

        for p in profiles {
            writeln!(out)?;
            writeln!(out, "## {} (`{}`)", p.name, p.architecture)?;
            writeln!(out)?;
            writeln!(out, "{}", p.description)?;
            writeln!(out)?;
            writeln!(out, "| Security dimension | Score |")?;
            writeln!(out, "|---|---:|")?;
            for (label, value) in p.security.dimensions() {
                writeln!(out, "| {label} | {value} |")?;
            }
            writeln!(out, "| **Overall** | **{}** |", p.security.total)?;
            writeln!(out)?;
            writeln!(out, "Availability: {}%", p.availability)?;
            writeln!(out)?;
            writeln!(out, "Use cases:")?;
            for use_case in p.use_cases {
                writeln!(out, "- {use_case}")?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
