//! Core engine for Queryproof: the boolean query-expression tree and its
//! algebraic transformations, the result oracle, the adapter boundary to a
//! system under test, and the orchestrator that drives randomized
//! metamorphic checks.
//!
//! The engine never learns what a "query" or a "record" is: it combines
//! opaque primitive queries with AND/OR/NOT, hands trees to a
//! [`SystemAdapter`] for compilation and execution, and asks a
//! [`ResultOracle`] whether the two result collections of a trial satisfy
//! the relation under test. A broken relation is counted and logged, never
//! raised.

pub mod adapter;
pub mod error;
pub mod expr;
pub mod oracle;
pub mod service;

pub use adapter::SystemAdapter;
pub use error::EngineError;
pub use expr::QueryExpr;
pub use oracle::{ResultOracle, SetOracle};
pub use service::{
    DEFAULT_MAX_LEAF, DEFAULT_MIN_LEAF, DEFAULT_TEST_COUNT, QueryTestingService,
};
