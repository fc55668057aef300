//! Leaf comparisons: `column operator value`

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::types::{format_value, QueryOperator};
use crate::error::{QueryError, QueryResult};

/// An atomic predicate of the form `column operator value`.
///
/// Immutable once constructed and exclusively owned by the
/// [`WhereParameter`](super::where_parameter::WhereParameter) that holds it.
/// The scalar value lives in `value`, membership and range operands in
/// `values`; the validating constructor guarantees the two match the
/// operator's arity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    column: String,
    operator: QueryOperator,
    value: Option<Value>,
    values: Vec<Value>,
}

impl Comparison {
    /// Build a comparison, validating operator/value arity.
    ///
    /// Returns [`QueryError::InvalidComparison`] when a unary operator is
    /// given a value, a membership operator is given a scalar or an empty
    /// list, a range operator is not given exactly two bounds, or a binary
    /// operator is missing its scalar.
    pub fn new(
        column: &str,
        operator: QueryOperator,
        value: Option<Value>,
        values: Vec<Value>,
    ) -> QueryResult<Self> {
        let reason = if operator.is_unary() {
            if value.is_some() || !values.is_empty() {
                Some("unary operator takes no value")
            } else {
                None
            }
        } else if operator.is_membership() {
            if value.is_some() {
                Some("membership operator takes a value list, not a scalar")
            } else if values.is_empty() {
                Some("membership operator requires a non-empty value list")
            } else {
                None
            }
        } else if operator.is_range() {
            if value.is_some() || values.len() != 2 {
                Some("range operator requires exactly two bounds")
            } else {
                None
            }
        } else if value.is_none() || !values.is_empty() {
            Some("operator requires a single scalar value")
        } else {
            None
        };

        if let Some(reason) = reason {
            tracing::debug!("Rejected comparison on column '{}': {}", column, reason);
            return Err(QueryError::invalid_comparison(column, reason));
        }

        Ok(Self {
            column: column.to_string(),
            operator,
            value,
            values,
        })
    }

    /// Single-scalar comparison; arity is correct by shape.
    pub(crate) fn scalar(column: &str, operator: QueryOperator, value: Value) -> Self {
        Self {
            column: column.to_string(),
            operator,
            value: Some(value),
            values: Vec::new(),
        }
    }

    /// Valueless comparison (null tests); arity is correct by shape.
    pub(crate) fn unary(column: &str, operator: QueryOperator) -> Self {
        Self {
            column: column.to_string(),
            operator,
            value: None,
            values: Vec::new(),
        }
    }

    /// Two-bound comparison (BETWEEN); arity is correct by shape.
    pub(crate) fn range(column: &str, operator: QueryOperator, low: Value, high: Value) -> Self {
        Self {
            column: column.to_string(),
            operator,
            value: None,
            values: vec![low, high],
        }
    }

    /// Column identifier or expression
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The comparison operator
    pub fn operator(&self) -> QueryOperator {
        self.operator
    }

    /// Scalar operand, if the operator takes one
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// List operands for membership and range operators
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.is_unary() {
            return write!(f, "{} {}", self.column, self.operator);
        }
        if self.operator.is_membership() {
            let list: Vec<String> = self.values.iter().map(format_value).collect();
            return write!(f, "{} {} ({})", self.column, self.operator, list.join(", "));
        }
        if let [low, high] = self.values.as_slice() {
            return write!(
                f,
                "{} {} {} AND {}",
                self.column,
                self.operator,
                format_value(low),
                format_value(high)
            );
        }
        match &self.value {
            Some(value) => write!(f, "{} {} {}", self.column, self.operator, format_value(value)),
            None => write!(f, "{} {}", self.column, self.operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_comparison_renders() {
        let cmp = Comparison::new("age", QueryOperator::GreaterThan, Some(json!(18)), vec![])
            .expect("valid comparison");
        assert_eq!(cmp.to_string(), "age > 18");
    }

    #[test]
    fn test_membership_comparison_renders_parenthesized_list() {
        let cmp = Comparison::new(
            "status",
            QueryOperator::In,
            None,
            vec![json!("active"), json!("pending")],
        )
        .expect("valid comparison");
        assert_eq!(cmp.to_string(), "status IN (active, pending)");
    }

    #[test]
    fn test_unary_comparison_renders_without_value() {
        let cmp =
            Comparison::new("deleted_at", QueryOperator::IsNull, None, vec![]).expect("valid");
        assert_eq!(cmp.to_string(), "deleted_at IS NULL");
    }

    #[test]
    fn test_between_comparison_renders_bounds() {
        let cmp = Comparison::new(
            "age",
            QueryOperator::Between,
            None,
            vec![json!(18), json!(65)],
        )
        .expect("valid");
        assert_eq!(cmp.to_string(), "age BETWEEN 18 AND 65");
    }

    #[test]
    fn test_unary_operator_rejects_value() {
        let err = Comparison::new("deleted_at", QueryOperator::IsNull, Some(json!(1)), vec![])
            .expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));
    }

    #[test]
    fn test_membership_operator_rejects_scalar() {
        let err = Comparison::new("id", QueryOperator::In, Some(json!(1)), vec![])
            .expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));
    }

    #[test]
    fn test_membership_operator_rejects_empty_list() {
        let err =
            Comparison::new("id", QueryOperator::In, None, vec![]).expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));
    }

    #[test]
    fn test_binary_operator_requires_scalar() {
        let err =
            Comparison::new("age", QueryOperator::Equal, None, vec![]).expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));

        let err = Comparison::new("age", QueryOperator::Equal, Some(json!(1)), vec![json!(2)])
            .expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));
    }

    #[test]
    fn test_between_requires_two_bounds() {
        let err = Comparison::new("age", QueryOperator::Between, None, vec![json!(18)])
            .expect_err("arity mismatch");
        assert!(matches!(err, QueryError::InvalidComparison { .. }));
    }

    #[test]
    fn test_accessors_expose_structured_parts() {
        let cmp = Comparison::new("name", QueryOperator::Like, Some(json!("a%")), vec![])
            .expect("valid");
        assert_eq!(cmp.column(), "name");
        assert_eq!(cmp.operator(), QueryOperator::Like);
        assert_eq!(cmp.value(), Some(&json!("a%")));
        assert!(cmp.values().is_empty());
    }
}
