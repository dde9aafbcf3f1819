//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportKind};
use crate::model::{ArchitectureProfile, profile};
use crate::pipeline::Evaluation;
use crate::scoring::{BENCHMARK_SCORE, ScoreBand};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::High => "green",
        ScoreBand::Medium => "yellow",
        ScoreBand::Low => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str, evaluation: &Evaluation) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(60).as_str(), "dim"));
        lines.push(format!(
            "{}    {} GB storage, {}M requests/month",
            self.color("Workload:", "cyan"),
            evaluation.workload.storage_gb,
            evaluation.workload.requests_millions
        ));
        let [cost, carbon, security] = evaluation.weights.as_percentages();
        lines.push(format!(
            "{}  cost {cost}%, carbon {carbon}%, security {security}%",
            self.color("Priorities:", "cyan"),
        ));
        lines.push(String::new());
    }

    fn comparison_table(&self, lines: &mut Vec<String>, evaluation: &Evaluation) {
        lines.push(self.color("Comparison:", "bold"));
        lines.push(format!(
            "  {:<22} {:>10} {:>11} {:>10} {:>8} {:>8} {:>7}",
            "Option", "$/month", "$/year", "kg CO₂/mo", "Security", "Uptime%", "Score"
        ));
        for snapshot in evaluation.metrics.values() {
            let is_winner = snapshot.architecture == evaluation.recommendation.architecture_key;
            let name = if is_winner {
                self.color(&format!("{:<22}", snapshot.name), "green")
            } else {
                format!("{:<22}", snapshot.name)
            };
            lines.push(format!(
                "  {name} {:>10.2} {:>11.2} {:>10.2} {:>8} {:>8.2} {:>7.2}",
                snapshot.monthly_cost,
                snapshot.annual_cost,
                snapshot.monthly_carbon,
                snapshot.security_score,
                snapshot.availability,
                snapshot.overall_score,
            ));
        }
    }

    fn recommendation_section(
        &self,
        lines: &mut Vec<String>,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) {
        let rec = &evaluation.recommendation;
        let score = format!("{:.2}/100", rec.score);
        lines.push(format!(
            "{} {} ({}, {})",
            self.color("Recommended:", "bold"),
            self.color(&rec.recommended_name, "green"),
            self.color(&score, band_color(rec.band)),
            rec.band.label()
        ));
        lines.push(format!("  {}", rec.reason));
        let delta = rec.delta_from_benchmark();
        let delta_color = if delta >= 0.0 { "green" } else { "red" };
        lines.push(format!(
            "  {} vs benchmark ({BENCHMARK_SCORE})",
            self.color(&format!("{delta:+.2}"), delta_color)
        ));
        for (arch, score) in rec.runners_up() {
            lines.push(self.color(
                &format!("  {}: {score:.2}", profile(arch).name),
                "dim",
            ));
        }
        lines.push(String::new());

        self.comparison_table(lines, evaluation);

        if config.include_insights {
            let insights = &evaluation.insights;
            lines.push(String::new());
            lines.push(self.color("Insights:", "bold"));
            lines.push(format!(
                "  Lowest cost:       {} (saves ${:.2}/year vs {})",
                profile(insights.cheapest).name,
                insights.potential_annual_savings,
                profile(insights.most_expensive).name
            ));
            lines.push(format!(
                "  Lowest carbon:     {} (saves {:.2} kg CO₂/year vs {})",
                profile(insights.greenest).name,
                insights.annual_carbon_savings,
                profile(insights.highest_emitter).name
            ));
            lines.push(format!(
                "  Carbon difference: equivalent to {:.2} trees/year",
                insights.trees_equivalent_to_savings
            ));
        }
    }

    fn projection_section(&self, lines: &mut Vec<String>, evaluation: &Evaluation) {
        lines.push(self.color("Cumulative cost:", "bold"));
        for projection in &evaluation.projections {
            let last = projection.cumulative_monthly.last().copied().unwrap_or(0.0);
            lines.push(format!(
                "  {:<22} ${last:>10.2} after {} months",
                profile(projection.architecture).name,
                projection.cumulative_monthly.len()
            ));
        }
        lines.push(String::new());
        lines.push(self.color("Total cost of ownership:", "bold"));
        for projection in &evaluation.projections {
            lines.push(format!(
                "  {:<22} ${:>10.2} over {} years",
                profile(projection.architecture).name,
                projection.total_cost_of_ownership,
                projection.years
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, config.kind.title(), evaluation);

        match config.kind {
            ReportKind::Recommendation => {
                self.recommendation_section(&mut lines, evaluation, config);
            }
            ReportKind::Metrics => self.comparison_table(&mut lines, evaluation),
            ReportKind::Projection => self.projection_section(&mut lines, evaluation),
        }

        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        profiles: &[ArchitectureProfile],
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color("Available Architectures", "bold"));
        lines.push(self.color("─".repeat(60).as_str(), "dim"));

        for p in profiles {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                self.color(p.name, "bold"),
                self.color(&format!("[{}]", p.architecture), "dim")
            ));
            lines.push(format!("  {}", p.description));
            lines.push(format!(
                "  {} ${:.2} + ${}/GB + ${}/M requests",
                self.color("Pricing:", "cyan"),
                p.pricing.base_cost,
                p.pricing.cost_per_gb,
                p.pricing.cost_per_million_requests
            ));
            lines.push(format!(
                "  {}  {} + {}/GB + {}/M requests (kg CO₂/month)",
                self.color("Carbon:", "cyan"),
                p.carbon.base_carbon,
                p.carbon.carbon_per_gb,
                p.carbon.carbon_per_million_requests
            ));
            let breakdown = p
                .security
                .dimensions()
                .iter()
                .map(|(label, value)| format!("{label} {value}"))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "  {} {} ({breakdown})",
                self.color("Security:", "cyan"),
                p.security.total
            ));
            lines.push(format!(
                "  {} {}%",
                self.color("Availability:", "cyan"),
                p.availability
            ));
            lines.push(format!(
                "  {} {}",
                self.color("Use cases:", "cyan"),
                p.use_cases.join(", ")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output with aligned columns
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn metrics_rows(&self, lines: &mut Vec<String>, evaluation: &Evaluation) {
        lines.push(self.color(
            &format!(
                "{:<18} {:>10} {:>11} {:>10} {:>11} {:>8} {:>8} {:>7}",
                "OPTION",
                "$/MONTH",
                "$/YEAR",
                "CO2/MONTH",
                "CO2/YEAR",
                "SECURITY",
                "UPTIME%",
                "SCORE"
            ),
            "bold",
        ));
        lines.push("─".repeat(90));
        for s in evaluation.metrics.values() {
            let row = format!(
                "{:<18} {:>10.2} {:>11.2} {:>10.2} {:>11.2} {:>8} {:>8.2} {:>7.2}",
                s.architecture.key(),
                s.monthly_cost,
                s.annual_cost,
                s.monthly_carbon,
                s.annual_carbon,
                s.security_score,
                s.availability,
                s.overall_score
            );
            if s.architecture == evaluation.recommendation.architecture_key {
                lines.push(self.color(&row, "green"));
            } else {
                lines.push(row);
            }
        }
    }

    fn projection_rows(&self, lines: &mut Vec<String>, evaluation: &Evaluation) {
        let months = evaluation
            .projections
            .first()
            .map_or(0, |p| p.cumulative_monthly.len());
        let years = evaluation.projections.first().map_or(0, |p| p.years);
        lines.push(self.color(
            &format!(
                "{:<18} {:>14} {:>14}",
                "OPTION",
                format!("{months}-MONTH $"),
                format!("TCO {years}Y $")
            ),
            "bold",
        ));
        lines.push("─".repeat(48));
        for p in &evaluation.projections {
            let cumulative = p.cumulative_monthly.last().copied().unwrap_or(0.0);
            lines.push(format!(
                "{:<18} {:>14.2} {:>14.2}",
                p.architecture.key(),
                cumulative,
                p.total_cost_of_ownership
            ));
        }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        match config.kind {
            ReportKind::Recommendation | ReportKind::Metrics => {
                self.metrics_rows(&mut lines, evaluation);
            }
            ReportKind::Projection => self.projection_rows(&mut lines, evaluation),
        }

        // Footer
        if config.kind == ReportKind::Recommendation {
            let rec = &evaluation.recommendation;
            lines.push(String::new());
            lines.push(format!(
                "Recommended: {} | Score: {:.2} ({}) | Benchmark: {BENCHMARK_SCORE} ({:+.2})",
                rec.architecture_key,
                rec.score,
                rec.band.label(),
                rec.delta_from_benchmark()
            ));
        }

        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        profiles: &[ArchitectureProfile],
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(
            &format!(
                "{:<18} {:<22} {:>8} {:>8} {:>10}",
                "KEY", "NAME", "SECURITY", "UPTIME%", "BASE $/MO"
            ),
            "bold",
        ));
        lines.push("─".repeat(70));
        for p in profiles {
            lines.push(format!(
                "{:<18} {:<22} {:>8} {:>8.2} {:>10.2}",
                p.architecture.key(),
                p.name,
                p.security.total,
                p.availability,
                p.pricing.base_cost
            ));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
