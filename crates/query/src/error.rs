//! Error types for WHERE-clause construction
//!
//! Every error is raised synchronously at the call that violates the
//! builder contract. Rendering a successfully built tree cannot fail.

/// Result type alias for query building operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for WHERE-clause building
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Operator/value arity mismatch at comparison construction
    #[error("Invalid comparison on column '{column}': {reason}")]
    InvalidComparison { column: String, reason: String },

    /// Attempt to attach a parameter into a subtree that already contains it
    #[error("Cyclic composition: a WHERE parameter cannot be attached to its own subtree")]
    CyclicComposition,
}

impl QueryError {
    pub(crate) fn invalid_comparison(column: &str, reason: &str) -> Self {
        QueryError::InvalidComparison {
            column: column.to_string(),
            reason: reason.to_string(),
        }
    }
}
