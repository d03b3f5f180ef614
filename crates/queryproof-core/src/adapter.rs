use crate::{error::EngineError, expr::QueryExpr};
use std::{fmt::Debug, hash::Hash};

///
/// SystemAdapter
///
/// The boundary to a system under test. The engine consumes this trait and
/// never implements it: one implementation exists per store, owning the
/// native query type, the record type, connectivity, and any configuration
/// (candidate-value catalogs, timeouts, truncation policy).
///
/// Native queries must be closed under the store's own AND/OR/NOT
/// combinators so that `compile` can translate any well-formed
/// [`QueryExpr`]. Records need equality and hashing for the oracle's set
/// semantics; both types need `Debug` so violation diagnostics always have
/// something to render.
///

pub trait SystemAdapter {
    /// The store's native query representation.
    type Query: Clone + Debug;

    /// One result record returned by the store.
    type Record: Eq + Hash + Debug;

    /// Produce one randomly chosen primitive query. May be stateful and
    /// seeded for reproducibility.
    fn build_leaf(&mut self) -> Result<Self::Query, EngineError>;

    /// Translate an expression tree into a native query: the store's
    /// AND/OR/NOT combinators at inner nodes, the leaf payload passed
    /// through unchanged.
    ///
    /// Fails with [`EngineError::MalformedExpr`] on wrong child arity and
    /// with [`EngineError::Compile`] when the store cannot negate an
    /// operand.
    fn compile(&self, expr: &QueryExpr<Self::Query>) -> Result<Self::Query, EngineError>;

    /// Run a compiled query, returning all matching records. Truncation
    /// policy, timeouts, and retries are the adapter's concern; a partial
    /// result must be surfaced as an error rather than returned silently.
    fn execute(&mut self, query: &Self::Query) -> Result<Vec<Self::Record>, EngineError>;

    /// Render a native query for diagnostics.
    fn describe_query(&self, query: &Self::Query) -> String {
        format!("{query:?}")
    }

    /// Render a result collection for diagnostics.
    fn describe_results(&self, results: &[Self::Record]) -> String {
        format!("{results:?}")
    }
}
