//! JSON encoding of reference tables.
//!
//! The file shape is `{ "<year>": { "<month>": { "startDate": "YYYY-MM-DD",
//! "endDate": "YYYY-MM-DD" } } }` with 1- or 2-digit month keys. Objects
//! are read and written in document order, which becomes table order.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::CalendarError;
use crate::table::ReferenceTable;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// A JSON object kept as key/value pairs in document order.
#[derive(Debug)]
struct Ordered<V>(Vec<(String, V)>);

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V: Default> Ordered<V> {
    /// Returns the value under `key`, appending a default one if absent.
    fn entry(&mut self, key: String) -> &mut V {
        let pos = match self.0.iter().position(|(k, _)| *k == key) {
            Some(pos) => pos,
            None => {
                self.0.push((key, V::default()));
                self.0.len() - 1
            }
        };
        &mut self.0[pos].1
    }
}

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry()? {
                    pairs.push(pair);
                }
                Ok(Ordered(pairs))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

type RawTable = Ordered<Ordered<RawRange>>;

fn parse_year(key: &str) -> Result<i32, CalendarError> {
    key.parse().map_err(|_| CalendarError::InvalidKey {
        key: key.to_string(),
    })
}

fn parse_month(key: &str) -> Result<u32, CalendarError> {
    if key.is_empty() || key.len() > 2 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidKey {
            key: key.to_string(),
        });
    }
    key.parse().map_err(|_| CalendarError::InvalidKey {
        key: key.to_string(),
    })
}

impl ReferenceTable {
    /// Parses a table from its JSON representation.
    ///
    /// Entries keep the document's key order, so reverse lookups resolve
    /// overlapping spans to the month written first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Format`] for malformed JSON or dates,
    /// [`CalendarError::InvalidKey`] for non-numeric keys, and any error
    /// from [`ReferenceTable::from_entries`] (a key repeated in the
    /// document is a [`CalendarError::DuplicateEntry`]).
    pub fn from_json_str(s: &str) -> Result<Self, CalendarError> {
        let raw: RawTable = serde_json::from_str(s).map_err(|e| CalendarError::Format {
            reason: e.to_string(),
        })?;

        let mut rows = Vec::new();
        for (year_key, months) in &raw.0 {
            let year = parse_year(year_key)?;
            for (month_key, range) in &months.0 {
                let month = parse_month(month_key)?;
                rows.push((year, month, range.start_date, range.end_date));
            }
        }

        let table = Self::from_entries(rows)?;
        debug!(entries = table.len(), "reference table parsed");
        Ok(table)
    }

    /// Reads and parses a JSON table file.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Io`] if the file cannot be read, otherwise
    /// the errors of [`ReferenceTable::from_json_str`].
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_json_file(path: &Path) -> Result<Self, CalendarError> {
        let text = std::fs::read_to_string(path).map_err(|e| CalendarError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    /// Serializes the table in the same shape it is read from, with
    /// zero-padded month keys.
    ///
    /// Years appear in order of their first entry and months in table order
    /// within each year, so a table whose years are not interleaved reloads
    /// in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Format`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, CalendarError> {
        let mut raw = RawTable::default();
        for entry in self.iter() {
            raw.entry(entry.year().to_string()).0.push((
                format!("{:02}", entry.month()),
                RawRange {
                    start_date: entry.range().start(),
                    end_date: entry.range().end(),
                },
            ));
        }
        serde_json::to_string_pretty(&raw).map_err(|e| CalendarError::Format {
            reason: e.to_string(),
        })
    }
}
