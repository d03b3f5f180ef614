//! Metamorphic testing for query-capable stores: generate random boolean
//! query trees, derive logically related partners, and check that the
//! store's answers respect the relation between them.
//!
//! ## Crate layout
//! - `core`: the expression tree, oracle, adapter boundary, and the
//!   metamorphic check orchestrator.
//! - `memstore`: the reference in-process document store adapter.
//!
//! The `prelude` module exposes the working vocabulary for drivers: build
//! an adapter, hand it to a [`core::QueryTestingService`], run checks,
//! read violation counts.

pub use queryproof_core as core;
pub use queryproof_memstore as memstore;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::{
            DEFAULT_MAX_LEAF, DEFAULT_MIN_LEAF, DEFAULT_TEST_COUNT, EngineError, QueryExpr,
            QueryTestingService, ResultOracle, SetOracle, SystemAdapter,
        },
        memstore::{Cmp, Document, FieldOptions, Filter, MemStore, Value},
    };
}
