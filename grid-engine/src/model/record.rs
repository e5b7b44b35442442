//! Row capability trait and the dynamic record row

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::Value;
use crate::error::GridError;

/// Identity of a row for list-diffing purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Integer `id` field.
    Int(i64),
    /// String `id` field.
    Str(String),
    /// Fallback when the row carries no id: its index in the row store.
    Position(usize),
}

impl RowKey {
    /// Derives a key from an `id` field value, if it has a usable shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(RowKey::Int(*v)),
            Value::String(s) if !s.is_empty() => Some(RowKey::Str(s.clone())),
            Value::Null | Value::Json(_) => None,
            Value::String(_) => None,
            other => Some(RowKey::Str(other.to_string())),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(v) => write!(f, "{}", v),
            RowKey::Str(s) => f.write_str(s),
            RowKey::Position(i) => write!(f, "#{}", i),
        }
    }
}

/// Minimal capability the engine needs from a row: string-keyed field lookup.
///
/// The engine never inspects rows beyond this, so any page can pair its own
/// row type with its own column set.
///
/// # Example
///
/// ```
/// use grid_engine::model::{GridRow, RowKey, Value};
///
/// struct Transfer {
///     id: i64,
///     amount: i64,
/// }
///
/// impl GridRow for Transfer {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(self.id.into()),
///             "amount" => Some(self.amount.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let t = Transfer { id: 7, amount: 120 };
/// assert_eq!(t.row_id(), Some(RowKey::Int(7)));
/// ```
pub trait GridRow {
    /// Returns the value of the named field, if the row has it.
    fn field(&self, name: &str) -> Option<Value>;

    /// Identity of this row. Defaults to the `id` field.
    fn row_id(&self) -> Option<RowKey> {
        self.field("id").and_then(|v| RowKey::from_value(&v))
    }
}

/// Key of `row` at `position`, falling back to positional identity.
pub fn row_key<R: GridRow>(row: &R, position: usize) -> RowKey {
    row.row_id().unwrap_or(RowKey::Position(position))
}

/// An open-ended record row.
///
/// Records hold field values as a `HashMap<String, Value>` and deserialize
/// from any JSON object, which is the shape the data-fetch layer delivers.
///
/// # Example
///
/// ```
/// use grid_engine::model::{Record, Value};
///
/// let record = Record::new()
///     .set("id", 1i64)
///     .set("name", "Contoso");
///
/// assert_eq!(record.get("name"), Some(&Value::from("Contoso")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, GridError> {
        match value {
            serde_json::Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(GridError::invalid_record(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value, builder style.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl GridRow for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Record::from_json(value).map_err(serde::de::Error::custom)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
