//! # sift-query: WHERE-clause expression trees
//!
//! Builds and renders boolean filter expressions for query construction:
//! callers assemble a tree of `column operator value` comparisons combined
//! with AND/OR composition, and the tree renders itself to a textual
//! predicate fragment.
//!
//! This crate deliberately stops at the tree: it does not parse SQL, execute
//! queries, validate columns against a schema, or escape values. Dialect
//! layers downstream consume either the rendered text or the structured
//! nodes (see [`WhereParameter::comparison`] and [`WhereParameter::children`])
//! and apply their own quoting and parameter binding.

pub mod error;
pub mod query;


// Re-export core types
pub use error::*;
pub use query::*;
