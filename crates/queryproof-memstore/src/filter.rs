use crate::{document::Document, value::Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Cmp
///
/// Comparators available to a filter clause.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    StartsWith,
    EndsWith,
}

///
/// Filter
///
/// The store's native query form: a clause algebra closed under AND, OR
/// and NOT, which is what the engine's compile contract requires. `Nor` is
/// the negation combinator, in the style of document-store query DSLs.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Clause {
        field: String,
        cmp: Cmp,
        value: Value,
    },
    All(Vec<Self>),
    Any(Vec<Self>),
    Nor(Box<Self>),
}

impl Filter {
    /// Create a single clause: `field cmp value`.
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self::Clause {
            field: field.into(),
            cmp,
            value: value.into(),
        }
    }

    /// Evaluate this filter against one document.
    ///
    /// Clause semantics are strict: a clause only matches when the field
    /// is present and the comparator holds for the actual value's type.
    /// Missing fields and type mismatches never match, for any comparator.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::Clause { field, cmp, value } => doc
                .field(field)
                .is_some_and(|actual| clause_matches(actual, *cmp, value)),
            Self::All(filters) => filters.iter().all(|f| f.matches(doc)),
            Self::Any(filters) => filters.iter().any(|f| f.matches(doc)),
            Self::Nor(filter) => !filter.matches(doc),
        }
    }
}

fn clause_matches(actual: &Value, cmp: Cmp, candidate: &Value) -> bool {
    match cmp {
        Cmp::Eq => actual == candidate,
        Cmp::Ne => actual != candidate,
        Cmp::Lt => actual.same_type_cmp(candidate) == Some(Ordering::Less),
        Cmp::Lte => matches!(
            actual.same_type_cmp(candidate),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Cmp::Gt => actual.same_type_cmp(candidate) == Some(Ordering::Greater),
        Cmp::Gte => matches!(
            actual.same_type_cmp(candidate),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Cmp::Contains => match (actual.as_text(), candidate.as_text()) {
            (Some(text), Some(needle)) => text.contains(needle),
            _ => false,
        },
        Cmp::StartsWith => match (actual.as_text(), candidate.as_text()) {
            (Some(text), Some(prefix)) => text.starts_with(prefix),
            _ => false,
        },
        Cmp::EndsWith => match (actual.as_text(), candidate.as_text()) {
            (Some(text), Some(suffix)) => text.ends_with(suffix),
            _ => false,
        },
    }
}

///
/// TESTS
///
