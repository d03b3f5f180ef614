//! In-process document store adapter for the Queryproof engine.
//!
//! This crate is the reference [`SystemAdapter`] implementation: an exact,
//! linear-scan store whose native query is a small filter algebra closed
//! under AND/OR/NOT, plus a JSON-configurable catalog of candidate leaf
//! queries. Because evaluation is exact, every metamorphic check run
//! against it must report zero violations — which makes it both the
//! workspace's end-to-end harness and a template for real store adapters.
//!
//! [`SystemAdapter`]: queryproof_core::SystemAdapter

pub mod document;
pub mod filter;
pub mod options;
pub mod store;
pub mod value;

pub use document::Document;
pub use filter::{Cmp, Filter};
pub use options::FieldOptions;
pub use store::MemStore;
pub use value::Value;
