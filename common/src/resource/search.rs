//! Client-side, case-insensitive substring search.

use super::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub field: String,
    pub text: String,
}

impl SearchQuery {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A record without the field behaves as if the field were empty.
pub fn matches<R: Resource>(record: &R, field: &str, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    record
        .field_value(field)
        .unwrap_or_default()
        .to_lowercase()
        .contains(&text.to_lowercase())
}

pub fn filter<'a, R: Resource>(records: &'a [R], field: &str, text: &str) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches(*record, field, text))
        .collect()
}
