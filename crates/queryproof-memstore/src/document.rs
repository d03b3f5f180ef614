use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Document
///
/// One record of the in-memory store: a stable numeric id plus a sorted
/// field map. The id is what diagnostics render; field contents stay out
/// of the logs.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Document {
    pub id: u64,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let doc = Document::new(7).with("name", "ada").with("age", 36);

        assert_eq!(doc.id, 7);
        assert_eq!(doc.field("name"), Some(&Value::from("ada")));
        assert_eq!(doc.field("age"), Some(&Value::Int(36)));
        assert_eq!(doc.field("missing"), None);
    }
}
