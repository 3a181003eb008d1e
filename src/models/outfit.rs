use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Columns kept by the strict loader
pub const OUTFIT_COLUMNS: [&str; 7] = [
    "event",
    "season",
    "topwear",
    "bottomwear",
    "footwear",
    "accessories",
    "gender",
];

/// A single clothing combination tagged with an event and a season
///
/// Keys are lower-cased column names. Empty cells are never stored, so a
/// missing key and an empty cell read the same through [`OutfitRow::get`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OutfitRow {
    fields: BTreeMap<String, String>,
}

impl OutfitRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a column, or `""` when the row has none
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn event(&self) -> &str {
        self.get("event")
    }

    pub fn season(&self) -> &str {
        self.get("season")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn insert(&mut self, column: String, value: String) {
        self.fields.insert(column, value);
    }
}

impl<K, V> FromIterator<(K, V)> for OutfitRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The in-memory outfit dataset, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<OutfitRow>,
}

impl Dataset {
    pub fn new(rows: Vec<OutfitRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OutfitRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
