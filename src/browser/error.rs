//! Error type for capability backends.

use thiserror::Error;

/// Failure reported by a host-side capability (cookie store, session store,
/// or navigator).
#[derive(Debug, Error)]
#[error("{operation} failed: {reason}")]
pub struct CapabilityError {
    operation: &'static str,
    reason: String,
}

impl CapabilityError {
    /// Creates an error for the named capability operation.
    #[must_use]
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }

    /// The capability operation that failed (e.g. `"cookie expire"`).
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Host-provided failure description.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
