//! AND/OR composition edges between WHERE parameters

use serde::Serialize;
use std::fmt;

use super::where_parameter::WhereParameter;

/// How a child subtree composes with its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConjunctionKind {
    And,
    Or,
}

impl fmt::Display for ConjunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConjunctionKind::And => write!(f, "AND"),
            ConjunctionKind::Or => write!(f, "OR"),
        }
    }
}

/// A composition tag attached to an exclusively owned child subtree.
///
/// Only produced by [`WhereParameter::and`], [`WhereParameter::or`] and
/// [`WhereParameter::wrap`]; there is no public constructor. Rendering is a
/// pure function of the kind and the child: the child is always
/// parenthesized, so mixed AND/OR chains at the same nesting level stay
/// unambiguous no matter how many siblings a node has.
#[derive(Debug, Clone, Serialize)]
pub struct Conjunction {
    kind: ConjunctionKind,
    child: WhereParameter,
}

impl Conjunction {
    pub(crate) fn new(kind: ConjunctionKind, child: WhereParameter) -> Self {
        Self { kind, child }
    }

    /// The composition tag
    pub fn kind(&self) -> ConjunctionKind {
        self.kind
    }

    /// The composed child subtree
    pub fn child(&self) -> &WhereParameter {
        &self.child
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} ({})", self.kind, self.child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ConjunctionKind::And.to_string(), "AND");
        assert_eq!(ConjunctionKind::Or.to_string(), "OR");
    }

    #[test]
    fn test_conjunction_wraps_child_in_parentheses() {
        let child = WhereParameter::where_eq("x", 1);
        let and = Conjunction::new(ConjunctionKind::And, child.clone());
        assert_eq!(and.to_string(), " AND (x = 1)");

        let or = Conjunction::new(ConjunctionKind::Or, child);
        assert_eq!(or.to_string(), " OR (x = 1)");
    }
}
