//! Errors reported when a scenario observes unexpected state.

use thiserror::Error;

/// A scenario check that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The value read through a lens differs from the expected one.
    #[error("{scenario}: expected {expected:?}, found {actual:?}")]
    UnexpectedValue {
        /// Name of the failing scenario.
        scenario: &'static str,
        /// The value the scenario expected.
        expected: String,
        /// The value actually observed.
        actual: String,
    },

    /// A node on the updated path kept its identity.
    #[error("{scenario}: node `{node}` on the updated path was not copied")]
    NodeNotCopied {
        /// Name of the failing scenario.
        scenario: &'static str,
        /// Path of the node, relative to the root.
        node: &'static str,
    },

    /// A node off the updated path lost its identity.
    #[error("{scenario}: node `{node}` off the updated path was not shared")]
    NodeNotShared {
        /// Name of the failing scenario.
        scenario: &'static str,
        /// Path of the node, relative to the root.
        node: &'static str,
    },
}

/// Result type for scenario checks.
pub type ProfileResult<T> = Result<T, ProfileError>;
