//! Decoder for Yahoo's fragment-array JSON encoding.
//!
//! Yahoo represents a logical object as an array of single-purpose fragments,
//! for example a player is
//! `[[{"player_key": ..}, {"name": {..}}, ..], {"selected_position": [..]}]`,
//! and a list as an object carrying `count` plus entries keyed `"0"`, `"1"`, ...
//! Fragment order is not stable between responses, so every lookup scans.

use serde_json::Value;
use std::collections::BTreeMap;

/// View a value as a flat list of object fragments.
///
/// Arrays are flattened recursively, a lone object is a single fragment and
/// scalars yield nothing.
pub fn fragments(value: &Value) -> Vec<&serde_json::Map<String, Value>> {
    let mut out = Vec::new();
    collect_fragments(value, &mut out);
    out
}

fn collect_fragments<'a>(value: &'a Value, out: &mut Vec<&'a serde_json::Map<String, Value>>) {
    match value {
        Value::Object(map) => out.push(map),
        Value::Array(items) => {
            for item in items {
                collect_fragments(item, out);
            }
        }
        _ => {}
    }
}

/// Value stored under `key` in the first fragment that has it.
pub fn find_fragment<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    fragments(value).into_iter().find_map(|f| f.get(key))
}

/// Locate the named collection among `value`'s fragments.
///
/// Returns `None` when no fragment carries `key`; callers treat that as an
/// empty list unless the collection is a required envelope.
pub fn extract_collection<'a>(value: &'a Value, key: &str) -> Option<Collection<'a>> {
    find_fragment(value, key).map(Collection)
}

/// A `count` + numerically indexed collection, or a plain JSON array.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a>(&'a Value);

impl<'a> Collection<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Declared entry count; 0 when missing or not numeric.
    pub fn count(&self) -> usize {
        match self.0 {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.get("count").and_then(coerce_usize).unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether the collection declares its size (arrays always do).
    pub fn has_count(&self) -> bool {
        match self.0 {
            Value::Array(_) => true,
            Value::Object(map) => map.contains_key("count"),
            _ => false,
        }
    }

    /// Entries at indices `0..count`, in index order. Missing indices are
    /// skipped and keys outside that range are ignored.
    ///
    /// Only keys present in the object are visited, so the work is bounded by
    /// the payload size rather than the declared count.
    pub fn entries(&self) -> Vec<&'a Value> {
        let count = self.count();
        match self.0 {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => {
                let mut indexed: Vec<(usize, &'a Value)> = map
                    .iter()
                    .filter_map(|(k, v)| index_key(k).map(|i| (i, v)))
                    .filter(|(i, _)| *i < count)
                    .collect();
                indexed.sort_by_key(|(i, _)| *i);
                indexed.into_iter().map(|(_, v)| v).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Entries at `"0"`, `"1"`, ... up to the first missing index.
    ///
    /// For wrappers such as a team's `roster` that carry indexed entries but
    /// no `count`. A declared `count` still bounds the walk.
    pub fn consecutive_entries(&self) -> Vec<&'a Value> {
        match self.0 {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => {
                let limit = if self.has_count() {
                    self.count()
                } else {
                    map.len()
                };
                (0..limit.min(map.len()))
                    .map_while(|i| map.get(i.to_string().as_str()))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Each entry unwrapped from its `{leaf_key: ...}` wrapper.
    ///
    /// An entry without the wrapper key is returned as-is.
    pub fn leaves(&self, leaf_key: &str) -> Vec<&'a Value> {
        self.entries()
            .into_iter()
            .map(|entry| find_fragment(entry, leaf_key).unwrap_or(entry))
            .collect()
    }
}

/// Canonical decimal index keys only: `"0"`, `"12"`, never `"01"` or `"+1"`.
fn index_key(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && !key.is_empty());
    if canonical && key.bytes().all(|b| b.is_ascii_digit()) {
        key.parse().ok()
    } else {
        None
    }
}

/// Coerce a JSON number or numeric string into a `usize`.
pub fn coerce_usize(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a JSON number or numeric string into a `u32`.
pub fn coerce_u32(value: &Value) -> Option<u32> {
    coerce_usize(value).and_then(|n| u32::try_from(n).ok())
}

/// Flat property bag produced by [`merge_fields`].
#[derive(Debug, Default)]
pub struct FieldBag<'a> {
    fields: BTreeMap<&'static str, &'a Value>,
}

impl<'a> FieldBag<'a> {
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).copied()
    }

    /// Non-empty string value of a field.
    pub fn str(&self, field: &str) -> Option<&'a str> {
        self.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fold a fragment array into a bag holding only `fields`.
///
/// The first fragment carrying a field wins; later duplicates are ignored.
/// Fields not listed never enter the bag.
pub fn merge_fields<'a>(value: &'a Value, fields: &[&'static str]) -> FieldBag<'a> {
    fragments(value)
        .into_iter()
        .fold(FieldBag::default(), |mut bag, fragment| {
            for field in fields {
                if let Some(v) = fragment.get(*field) {
                    bag.fields.entry(*field).or_insert(v);
                }
            }
            bag
        })
}
