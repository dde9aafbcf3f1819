//! Output handling for reports.
//!
//! Provides utilities for auto-detecting output format and writing reports.

use crate::error::AdvisorError;
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Resolve `Auto` to a concrete format.
///
/// Interactive terminals get the summary; pipes and files get JSON.
#[must_use]
pub fn resolve_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto => {
            if target.is_terminal() {
                ReportFormat::Summary
            } else {
                ReportFormat::Json
            }
        }
        other => other,
    }
}

/// Determine if color should be used based on flags, environment and target
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && target.is_terminal()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            std::io::Write::write_all(&mut stdout, content.as_bytes())
                .and_then(|()| std::io::Write::write_all(&mut stdout, b"\n"))
                .context("Failed to write output to stdout")?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| AdvisorError::io(path.clone(), e))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/advice.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_resolve_format_non_auto() {
        let target = OutputTarget::Stdout;
        assert_eq!(
            resolve_format(ReportFormat::Markdown, &target),
            ReportFormat::Markdown
        );
        assert_eq!(
            resolve_format(ReportFormat::Summary, &target),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_resolve_format_file_target() {
        let target = OutputTarget::File(PathBuf::from("/tmp/advice.json"));
        assert_eq!(
            resolve_format(ReportFormat::Auto, &target),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_no_color_for_files_or_flag() {
        let file = OutputTarget::File(PathBuf::from("/tmp/x"));
        assert!(!should_use_color(false, &file));
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent-dir/out.txt"));
        let err = write_output("hello", &target, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdvisorError>(),
            Some(AdvisorError::Io { .. })
        ));
    }
}
