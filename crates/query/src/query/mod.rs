//! WHERE-clause expression trees - leaf comparisons composed with AND/OR

pub mod comparison;
pub mod conjunction;
pub mod types;
pub mod where_parameter;

// Re-export main types (minimal exports to avoid conflicts)
pub use comparison::Comparison;
pub use conjunction::{Conjunction, ConjunctionKind};
pub use types::QueryOperator;
pub use where_parameter::WhereParameter;
