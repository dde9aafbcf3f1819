//! Pipeline orchestration: config → engine → evaluation → rendered output.
//!
//! Shared by the CLI command handlers so each one only decides what to
//! render.

mod evaluate;
mod output;

pub use evaluate::{Evaluation, build_engine, evaluate};
pub use output::{OutputTarget, resolve_format, should_use_color, write_output};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The recommended option scored below the requested minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
