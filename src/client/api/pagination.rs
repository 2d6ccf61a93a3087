//! Normalization of the panel's list envelopes.
//!
//! List endpoints answer with
//! `{"object": "list", "data": [...], "meta": {"pagination": {...}}}` and every item is a
//! fractal object `{"object": "server", "attributes": {...}}`. Missing pieces degrade to
//! defaults instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginationMeta {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            total: 0,
            count: 0,
            per_page: 0,
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationMeta {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationMeta::default(),
        }
    }
}

impl<T> Paginated<T> {
    /// Converts every item, stopping at the first failure.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Paginated<U>, E> {
        Ok(Paginated {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?,
            pagination: self.pagination,
        })
    }
}

/// Splits a list envelope into its items and pagination metadata.
///
/// `data` is always a vector: absent or non-sequence `data` yields an empty one. Each
/// item is unwrapped with [`unwrap_item`]. Metadata is read from `meta.pagination`,
/// field by field, so partial metadata keeps whatever is valid.
pub fn extract_pagination(envelope: &Value) -> Paginated<Value> {
    let items = envelope
        .get("data")
        .and_then(Value::as_array)
        .map(|items| items.iter().cloned().map(unwrap_item).collect())
        .unwrap_or_default();

    let defaults = PaginationMeta::default();
    let pagination = match envelope.pointer("/meta/pagination") {
        Some(meta) => PaginationMeta {
            total: read_count(meta, "total").unwrap_or(defaults.total),
            count: read_count(meta, "count").unwrap_or(defaults.count),
            per_page: read_count(meta, "per_page").unwrap_or(defaults.per_page),
            current_page: read_count(meta, "current_page")
                .filter(|page| *page > 0)
                .unwrap_or(defaults.current_page),
            total_pages: read_count(meta, "total_pages")
                .filter(|pages| *pages > 0)
                .unwrap_or(defaults.total_pages),
        },
        None => defaults,
    };

    Paginated { items, pagination }
}

/// `{"object": "...", "attributes": {...}}` -> `{...}`. Anything else is returned as is.
pub fn unwrap_item(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("object").is_some_and(Value::is_string)
                && map.get("attributes").is_some_and(Value::is_object) =>
        {
            map.remove("attributes").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn read_count(meta: &Value, key: &str) -> Option<u64> {
    match meta.get(key)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests a complete list envelope.
    ///
    /// Verifies items are unwrapped from their fractal wrapper and every pagination
    /// field is read.
    ///
    /// Expected: two attribute objects and the given metadata
    #[test]
    fn extracts_full_envelope() {
        let envelope = json!({
            "object": "list",
            "data": [
                { "object": "backup", "attributes": { "uuid": "a", "name": "first" } },
                { "object": "backup", "attributes": { "uuid": "b", "name": "second" } }
            ],
            "meta": { "pagination": {
                "total": 42, "count": 2, "per_page": 20, "current_page": 2, "total_pages": 3
            } }
        });

        let page = extract_pagination(&envelope);

        assert_eq!(page.items, vec![json!({ "uuid": "a", "name": "first" }), json!({ "uuid": "b", "name": "second" })]);
        assert_eq!(
            page.pagination,
            PaginationMeta { total: 42, count: 2, per_page: 20, current_page: 2, total_pages: 3 }
        );
        assert!(page.pagination.has_next());
        assert!(page.pagination.has_previous());
    }

    /// Tests envelopes without `data`.
    ///
    /// Expected: empty items, never absent, and default metadata
    #[test]
    fn missing_data_yields_empty_items() {
        for envelope in [json!({}), json!({ "data": null }), json!({ "data": "nope" }), Value::Null] {
            let page = extract_pagination(&envelope);
            assert!(page.items.is_empty());
            assert_eq!(page.pagination, PaginationMeta::default());
        }
    }

    /// Tests partially malformed metadata.
    ///
    /// Verifies string numbers are coerced, invalid fields fall back to defaults and
    /// a zero page number is treated as missing.
    ///
    /// Expected: valid fields kept, others defaulted
    #[test]
    fn malformed_metadata_degrades_to_defaults() {
        let envelope = json!({
            "data": [],
            "meta": { "pagination": { "total": "15", "per_page": "x", "current_page": 0, "total_pages": 2.0 } }
        });

        let meta = extract_pagination(&envelope).pagination;

        assert_eq!(meta.total, 15);
        assert_eq!(meta.count, 0);
        assert_eq!(meta.per_page, 0);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 2);
        assert!(meta.has_next());
        assert!(!meta.has_previous());
    }

    /// Tests that non-fractal values are not unwrapped.
    ///
    /// Expected: plain objects and objects with non-object attributes are unchanged
    #[test]
    fn unwrap_item_requires_fractal_shape() {
        let plain = json!({ "uuid": "a", "attributes": { "x": 1 } });
        assert_eq!(unwrap_item(plain.clone()), plain);

        let scalar_attributes = json!({ "object": "stats", "attributes": 3 });
        assert_eq!(unwrap_item(scalar_attributes.clone()), scalar_attributes);
    }
}
