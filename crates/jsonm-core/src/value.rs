//! The JSON value model.
//!
//! [`Value`] is a closed sum type, so exactly one variant is active at a time
//! and replacing it drops the previous payload. Arrays and objects store their
//! contents in a [`Sequence`], which keeps insertion order and permits
//! duplicates. Object keys are not deduplicated: lookups resolve to the first
//! matching entry in iteration order.

use crate::error::{JsonError, Result};
use crate::sequence::{Iter, IterMut, Sequence};

/// One `(key, value)` member of an object.
pub type Entry = (String, Value);

/// A JSON document node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Sequence<Value>),
    /// Key-value pairs in insertion order; keys may repeat.
    Object(Sequence<Entry>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Name of the active variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    /// Replace the current payload with an empty array.
    pub fn set_array(&mut self) {
        *self = Value::Array(Sequence::new());
    }

    /// Replace the current payload with an empty object.
    pub fn set_object(&mut self) {
        *self = Value::Object(Sequence::new());
    }

    /// Move the payload out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn get_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn get_bool_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn get_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn get_number_mut(&mut self) -> Result<&mut f64> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn get_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn get_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Number of elements or entries. Fails on scalars.
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(entries) => Ok(entries.len()),
            other => Err(other.mismatch("array or object")),
        }
    }

    /// Insert `value` before the first element of an array.
    pub fn push_front(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_sequence_mut()?.push_front(value.into());
        Ok(())
    }

    /// Append `value` after the last element of an array.
    pub fn push_back(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_sequence_mut()?.push_back(value.into());
        Ok(())
    }

    /// Prepend a `(key, value)` entry to an object.
    ///
    /// Existing entries with the same key are left in place, so the new entry
    /// shadows them for [`get`](Self::get).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.as_entries_mut()?
            .push_front((key.into(), value.into()));
        Ok(())
    }

    /// Value of the first entry whose key equals `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Mutable value of the first entry whose key equals `key`.
    ///
    /// On a miss a `Null` entry is inserted at the front of the object and a
    /// reference to it is returned.
    pub fn get_or_insert(&mut self, key: &str) -> Result<&mut Value> {
        let entries = self.as_entries_mut()?;
        let position = match entries.iter().position(|(k, _)| k == key) {
            Some(position) => position,
            None => {
                entries.push_front((key.to_string(), Value::Null));
                0
            }
        };
        Ok(&mut entries[position].1)
    }

    /// Forward iterator over array elements.
    pub fn elements(&self) -> Result<Iter<'_, Value>> {
        match self {
            Value::Array(items) => Ok(items.iter()),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn elements_mut(&mut self) -> Result<IterMut<'_, Value>> {
        Ok(self.as_sequence_mut()?.iter_mut())
    }

    /// Forward iterator over object entries in insertion order.
    pub fn entries(&self) -> Result<Iter<'_, Entry>> {
        Ok(self.as_entries()?.iter())
    }

    pub fn entries_mut(&mut self) -> Result<IterMut<'_, Entry>> {
        Ok(self.as_entries_mut()?.iter_mut())
    }

    fn as_sequence_mut(&mut self) -> Result<&mut Sequence<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    fn as_entries(&self) -> Result<&Sequence<Entry>> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(other.mismatch("object")),
        }
    }

    fn as_entries_mut(&mut self) -> Result<&mut Sequence<Entry>> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(other.mismatch("object")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

impl From<Sequence<Value>> for Value {
    fn from(items: Sequence<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Sequence<Entry>> for Value {
    fn from(entries: Sequence<Entry>) -> Self {
        Value::Object(entries)
    }
}
