//! Run-level warning and error accounting.
//!
//! Nothing during discovery or rendering aborts the run. Each recoverable
//! problem is logged and counted here, and the process exit status is derived
//! from the final count.

use std::fmt::Display;

/// Counter of non-fatal problems seen during one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: usize,
    errors: usize,
}

impl Diagnostics {
    /// Create a counter with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and count a warning.
    pub fn warning(&mut self, message: impl Display) {
        tracing::warn!("{}", message);
        self.warnings += 1;
    }

    /// Log and count an error.
    pub fn error(&mut self, message: impl Display) {
        tracing::error!("{}", message);
        self.errors += 1;
    }

    /// Number of warnings recorded.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Number of errors recorded.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Whether the run should finish with a failure status.
    pub fn has_problems(&self) -> bool {
        self.warnings + self.errors > 0
    }
}
