use crate::{
    filter::{Cmp, Filter},
    value::Value,
};
use derive_more::{Deref, DerefMut};
use queryproof_core::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// FieldOptions
///
/// The leaf-query catalog configuration: field name → comparator →
/// candidate values. Every (field, comparator, value) combination becomes
/// one candidate primitive query the store can hand out as a tree leaf.
///
/// Deserializable from JSON in the shape
///
/// ```json
/// {
///   "age":  { "gte": [18, 65], "lt": [40] },
///   "name": { "starts_with": ["a", "b"] }
/// }
/// ```
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldOptions(pub BTreeMap<String, BTreeMap<Cmp, Vec<Value>>>);

impl FieldOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parse a catalog configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json)
            .map_err(|err| EngineError::catalog(format!("invalid field options: {err}")))
    }

    /// Add one candidate value for `field cmp`, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.0
            .entry(field.into())
            .or_default()
            .entry(cmp)
            .or_default()
            .push(value.into());
        self
    }

    /// Flatten the configuration into the candidate clause catalog,
    /// one filter per (field, comparator, value) combination.
    #[must_use]
    pub fn catalog(&self) -> Vec<Filter> {
        self.0
            .iter()
            .flat_map(|(field, by_cmp)| {
                by_cmp.iter().flat_map(|(cmp, values)| {
                    values
                        .iter()
                        .map(|value| Filter::clause(field.clone(), *cmp, value.clone()))
                })
            })
            .collect()
    }
}

///
/// TESTS
///
