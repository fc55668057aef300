//! Query Builder Types - Operators and value formatting for WHERE clauses

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Query operator types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueryOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    Between,
}

impl QueryOperator {
    /// Operator takes no value (null tests)
    pub fn is_unary(&self) -> bool {
        matches!(self, QueryOperator::IsNull | QueryOperator::IsNotNull)
    }

    /// Operator takes an ordered list of values (set membership)
    pub fn is_membership(&self) -> bool {
        matches!(self, QueryOperator::In | QueryOperator::NotIn)
    }

    /// Operator takes exactly two bounds
    pub fn is_range(&self) -> bool {
        matches!(self, QueryOperator::Between)
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOperator::Equal => write!(f, "="),
            QueryOperator::NotEqual => write!(f, "!="),
            QueryOperator::GreaterThan => write!(f, ">"),
            QueryOperator::GreaterThanOrEqual => write!(f, ">="),
            QueryOperator::LessThan => write!(f, "<"),
            QueryOperator::LessThanOrEqual => write!(f, "<="),
            QueryOperator::Like => write!(f, "LIKE"),
            QueryOperator::NotLike => write!(f, "NOT LIKE"),
            QueryOperator::In => write!(f, "IN"),
            QueryOperator::NotIn => write!(f, "NOT IN"),
            QueryOperator::IsNull => write!(f, "IS NULL"),
            QueryOperator::IsNotNull => write!(f, "IS NOT NULL"),
            QueryOperator::Between => write!(f, "BETWEEN"),
        }
    }
}

/// Format a value in its literal textual form.
///
/// No quoting or escaping happens here; a dialect layer that consumes the
/// rendered predicate (or the structured tree) is responsible for both.
pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "NULL".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(QueryOperator::Equal.to_string(), "=");
        assert_eq!(QueryOperator::NotEqual.to_string(), "!=");
        assert_eq!(QueryOperator::GreaterThan.to_string(), ">");
        assert_eq!(QueryOperator::GreaterThanOrEqual.to_string(), ">=");
        assert_eq!(QueryOperator::LessThan.to_string(), "<");
        assert_eq!(QueryOperator::LessThanOrEqual.to_string(), "<=");
        assert_eq!(QueryOperator::Like.to_string(), "LIKE");
        assert_eq!(QueryOperator::NotLike.to_string(), "NOT LIKE");
        assert_eq!(QueryOperator::In.to_string(), "IN");
        assert_eq!(QueryOperator::NotIn.to_string(), "NOT IN");
        assert_eq!(QueryOperator::IsNull.to_string(), "IS NULL");
        assert_eq!(QueryOperator::IsNotNull.to_string(), "IS NOT NULL");
        assert_eq!(QueryOperator::Between.to_string(), "BETWEEN");
    }

    #[test]
    fn test_operator_arity_classes() {
        assert!(QueryOperator::IsNull.is_unary());
        assert!(QueryOperator::IsNotNull.is_unary());
        assert!(!QueryOperator::Equal.is_unary());

        assert!(QueryOperator::In.is_membership());
        assert!(QueryOperator::NotIn.is_membership());
        assert!(!QueryOperator::Like.is_membership());

        assert!(QueryOperator::Between.is_range());
        assert!(!QueryOperator::In.is_range());
    }

    #[test]
    fn test_format_value_literal_forms() {
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(2.5)), "2.5");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(null)), "NULL");
        // Strings are emitted raw; quoting belongs to the dialect layer
        assert_eq!(format_value(&json!("alice")), "alice");
    }
}
