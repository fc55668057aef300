//! WHERE parameter tree - builder and renderer for boolean filter expressions

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use super::comparison::Comparison;
use super::conjunction::{Conjunction, ConjunctionKind};
use super::types::QueryOperator;
use crate::error::{QueryError, QueryResult};

/// A node in a WHERE-clause expression tree.
///
/// A node is an optional leaf [`Comparison`] plus an ordered, append-only
/// list of AND/OR-tagged child subtrees. Children are appended with
/// [`and`](Self::and)/[`or`](Self::or), which mutate in place and return the
/// node for fluent chaining. Rendering is pure and idempotent: the leaf text
/// (or `TRUE` when there is no leaf) followed by each child's tagged,
/// parenthesized subtree in attachment order.
///
/// ```
/// use sift_query::WhereParameter;
///
/// let mut filter = WhereParameter::where_eq("x", 1);
/// filter
///     .or(WhereParameter::where_eq("y", 2))?
///     .and(WhereParameter::where_eq("z", 3))?;
/// assert_eq!(filter.to_sql(), "x = 1 OR (y = 2) AND (z = 3)");
/// # Ok::<(), sift_query::QueryError>(())
/// ```
///
/// The rendered string is a predicate fragment, not a complete statement,
/// and carries no quoting or escaping; consumers that need either should
/// walk [`comparison`](Self::comparison)/[`children`](Self::children)
/// instead of re-parsing the text.
#[derive(Debug, Clone, Serialize)]
pub struct WhereParameter {
    #[serde(skip)]
    node_id: Uuid,
    condition: Option<Comparison>,
    children: Vec<Conjunction>,
}

impl Default for WhereParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl WhereParameter {
    /// Empty node: no condition, no children. Renders `TRUE`, the neutral
    /// element for AND-composition, so it composes safely as a no-op.
    pub fn new() -> Self {
        Self {
            node_id: Uuid::new_v4(),
            condition: None,
            children: Vec::new(),
        }
    }

    /// Leaf node holding an already-built comparison
    pub fn with_comparison(comparison: Comparison) -> Self {
        Self {
            node_id: Uuid::new_v4(),
            condition: Some(comparison),
            children: Vec::new(),
        }
    }

    /// Leaf node from a `(column, operator, value)` triple.
    ///
    /// Propagates [`QueryError::InvalidComparison`] from the comparison's
    /// arity validation; see [`Comparison::new`].
    pub fn condition(
        column: &str,
        operator: QueryOperator,
        value: Option<Value>,
        values: Vec<Value>,
    ) -> QueryResult<Self> {
        Ok(Self::with_comparison(Comparison::new(
            column, operator, value, values,
        )?))
    }

    /// Wrapper node: empty leaf plus `existing` as a single AND child.
    ///
    /// The rendering therefore always begins with `TRUE AND (`. That
    /// redundant identity term is intentional: it keeps the wrapped text a
    /// syntactically valid standalone predicate. Callers that want the bare
    /// subtree should use `existing` directly instead of wrapping it.
    pub fn wrap(existing: WhereParameter) -> Self {
        let mut wrapper = Self::new();
        wrapper
            .children
            .push(Conjunction::new(ConjunctionKind::And, existing));
        wrapper
    }

    /// Append an AND-tagged child, returning `self` for chaining.
    ///
    /// Fails with [`QueryError::CyclicComposition`] when `other` transitively
    /// contains this node (node identity survives `clone`, so attaching a
    /// clone of a tree back into one of its own nodes is also rejected).
    pub fn and(&mut self, other: WhereParameter) -> QueryResult<&mut Self> {
        self.attach(ConjunctionKind::And, other)
    }

    /// Append an OR-tagged child, returning `self` for chaining
    pub fn or(&mut self, other: WhereParameter) -> QueryResult<&mut Self> {
        self.attach(ConjunctionKind::Or, other)
    }

    fn attach(&mut self, kind: ConjunctionKind, other: WhereParameter) -> QueryResult<&mut Self> {
        if other.contains(self.node_id) {
            tracing::debug!(
                "Rejected {} composition: subtree already contains the target node",
                kind
            );
            return Err(QueryError::CyclicComposition);
        }
        self.children.push(Conjunction::new(kind, other));
        Ok(self)
    }

    fn contains(&self, node_id: Uuid) -> bool {
        self.node_id == node_id
            || self
                .children
                .iter()
                .any(|conjunction| conjunction.child().contains(node_id))
    }

    /// Read-only view of the leaf comparison, if any
    pub fn comparison(&self) -> Option<&Comparison> {
        self.condition.as_ref()
    }

    /// Read-only view of the composed children, in attachment order
    pub fn children(&self) -> &[Conjunction] {
        &self.children
    }

    /// Render the tree to its textual predicate form.
    ///
    /// Pure and infallible; repeated calls on an unmodified tree yield
    /// identical output.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    // --- leaf constructors, one per operator ---

    /// Leaf node with equality comparison
    pub fn where_eq<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::Equal,
            value.into(),
        ))
    }

    /// Leaf node with not-equal comparison
    pub fn where_ne<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::NotEqual,
            value.into(),
        ))
    }

    /// Leaf node with greater-than comparison
    pub fn where_gt<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::GreaterThan,
            value.into(),
        ))
    }

    /// Leaf node with greater-than-or-equal comparison
    pub fn where_gte<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::GreaterThanOrEqual,
            value.into(),
        ))
    }

    /// Leaf node with less-than comparison
    pub fn where_lt<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::LessThan,
            value.into(),
        ))
    }

    /// Leaf node with less-than-or-equal comparison
    pub fn where_lte<T: Into<Value>>(column: &str, value: T) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::LessThanOrEqual,
            value.into(),
        ))
    }

    /// Leaf node with LIKE pattern match
    pub fn where_like(column: &str, pattern: &str) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::Like,
            Value::String(pattern.to_string()),
        ))
    }

    /// Leaf node with NOT LIKE pattern match
    pub fn where_not_like(column: &str, pattern: &str) -> Self {
        Self::with_comparison(Comparison::scalar(
            column,
            QueryOperator::NotLike,
            Value::String(pattern.to_string()),
        ))
    }

    /// Leaf node with IN membership; the list must be non-empty
    pub fn where_in<T: Into<Value>>(column: &str, values: Vec<T>) -> QueryResult<Self> {
        Ok(Self::with_comparison(Comparison::new(
            column,
            QueryOperator::In,
            None,
            values.into_iter().map(Into::into).collect(),
        )?))
    }

    /// Leaf node with NOT IN membership; the list must be non-empty
    pub fn where_not_in<T: Into<Value>>(column: &str, values: Vec<T>) -> QueryResult<Self> {
        Ok(Self::with_comparison(Comparison::new(
            column,
            QueryOperator::NotIn,
            None,
            values.into_iter().map(Into::into).collect(),
        )?))
    }

    /// Leaf node with IS NULL test
    pub fn where_null(column: &str) -> Self {
        Self::with_comparison(Comparison::unary(column, QueryOperator::IsNull))
    }

    /// Leaf node with IS NOT NULL test
    pub fn where_not_null(column: &str) -> Self {
        Self::with_comparison(Comparison::unary(column, QueryOperator::IsNotNull))
    }

    /// Leaf node with BETWEEN bounds
    pub fn where_between<T: Into<Value>>(column: &str, start: T, end: T) -> Self {
        Self::with_comparison(Comparison::range(
            column,
            QueryOperator::Between,
            start.into(),
            end.into(),
        ))
    }
}

impl fmt::Display for WhereParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.condition {
            Some(comparison) => write!(f, "{}", comparison)?,
            None => write!(f, "TRUE")?,
        }
        for conjunction in &self.children {
            write!(f, "{}", conjunction)?;
        }
        Ok(())
    }
}
