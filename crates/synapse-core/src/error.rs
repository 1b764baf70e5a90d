//! Error types for the Synapse framework.

/// Result type alias for Synapse operations.
pub type Result<T> = std::result::Result<T, SynapseError>;

/// Main error type for the Synapse framework.
#[derive(Debug, thiserror::Error)]
pub enum SynapseError {
    /// A hierarchy membership assertion did not hold
    #[error(
        "assertion failed: expected `{expected}` among the ancestors of `{subject}` (found: {})",
        .found.join(", ")
    )]
    AssertionFailure {
        subject: String,
        expected: String,
        found: Vec<String>,
    },
}

impl SynapseError {
    /// Create a new assertion failure
    pub fn assertion_failure(
        subject: impl Into<String>,
        expected: impl Into<String>,
        found: Vec<String>,
    ) -> Self {
        Self::AssertionFailure {
            subject: subject.into(),
            expected: expected.into(),
            found,
        }
    }

    /// Check if this is an assertion failure
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailure { .. })
    }
}
