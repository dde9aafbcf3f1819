//! Report generation for evaluation results.
//!
//! This module provides multiple output formats:
//! - Summary: Colored terminal output
//! - Table: Aligned tabular terminal output
//! - JSON: Structured data for programmatic integration
//! - Markdown: Tables for documentation and pull requests

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportKind};

use crate::model::ArchitectureProfile;
use crate::pipeline::Evaluation;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an evaluation according to `config.kind`
    fn generate_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the reference profiles of the available options
    fn generate_options_report(
        &self,
        profiles: &[ArchitectureProfile],
    ) -> Result<String, ReportError>;

    /// Write an evaluation report to a writer
    fn write_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_evaluation_report(evaluation, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a reporter for a concrete format.
///
/// `Auto` must be resolved beforehand; it falls back to the summary.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Table => {
            if colored {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Summary | ReportFormat::Auto => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
    }
}
