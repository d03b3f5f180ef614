use crate::{document::Document, filter::Filter, options::FieldOptions};
use queryproof_core::{EngineError, QueryExpr, SystemAdapter};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

///
/// MemStore
///
/// An in-process document store wired up as a [`SystemAdapter`]: it owns a
/// fixed corpus of documents, a flattened catalog of candidate leaf
/// queries, and a seedable RNG for drawing leaves. Queries execute as a
/// linear scan, so results are exact and the engine's invariants must hold
/// — any reported violation points at the adapter or the engine, which is
/// what makes this store useful as a reference harness.
///

#[derive(Debug)]
pub struct MemStore {
    docs: Vec<Document>,
    catalog: Vec<Filter>,
    rng: ChaCha8Rng,
}

impl MemStore {
    /// Create a store with an entropy-derived seed.
    pub fn new(docs: Vec<Document>, options: &FieldOptions) -> Result<Self, EngineError> {
        Self::with_rng(docs, options, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Create a deterministic store: leaf choice replays under the same
    /// seed.
    pub fn with_seed(
        docs: Vec<Document>,
        options: &FieldOptions,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_rng(docs, options, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(
        docs: Vec<Document>,
        options: &FieldOptions,
        rng: ChaCha8Rng,
    ) -> Result<Self, EngineError> {
        let catalog = options.catalog();
        if catalog.is_empty() {
            return Err(EngineError::catalog(
                "field options produced no candidate leaf queries",
            ));
        }

        Ok(Self { docs, catalog, rng })
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }
}

impl SystemAdapter for MemStore {
    type Query = Filter;
    type Record = Document;

    fn build_leaf(&mut self) -> Result<Filter, EngineError> {
        let index = self.rng.random_range(0..self.catalog.len());

        Ok(self.catalog[index].clone())
    }

    fn compile(&self, expr: &QueryExpr<Filter>) -> Result<Filter, EngineError> {
        match expr {
            QueryExpr::Leaf(filter) => Ok(filter.clone()),
            QueryExpr::And(children) => {
                if children.len() < 2 {
                    return Err(EngineError::malformed(format!(
                        "AND node requires at least 2 children, found {}",
                        children.len()
                    )));
                }

                let compiled: Result<Vec<_>, _> =
                    children.iter().map(|child| self.compile(child)).collect();

                Ok(Filter::All(compiled?))
            }
            QueryExpr::Or(children) => {
                if children.len() < 2 {
                    return Err(EngineError::malformed(format!(
                        "OR node requires at least 2 children, found {}",
                        children.len()
                    )));
                }

                let compiled: Result<Vec<_>, _> =
                    children.iter().map(|child| self.compile(child)).collect();

                Ok(Filter::Any(compiled?))
            }
            QueryExpr::Not(child) => Ok(Filter::Nor(Box::new(self.compile(child)?))),
        }
    }

    fn execute(&mut self, query: &Filter) -> Result<Vec<Document>, EngineError> {
        debug!(query = %self.describe_query(query), "executing filter scan");

        Ok(self
            .docs
            .iter()
            .filter(|doc| query.matches(doc))
            .cloned()
            .collect())
    }

    fn describe_query(&self, query: &Filter) -> String {
        serde_json::to_string(query).unwrap_or_else(|_| format!("{query:?}"))
    }

    fn describe_results(&self, results: &[Document]) -> String {
        let ids: Vec<u64> = results.iter().map(|doc| doc.id).collect();

        format!("{ids:?}")
    }
}

///
/// TESTS
///
