//! Typed option values and the ordered option map.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single option value from a `#| key: value` line.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ConfigValue {
    /// Coerce the raw text after the colon into a typed value.
    ///
    /// `true`/`false` (any case) become booleans, integer and finite float
    /// literals become numbers, and anything else is a string with one pair
    /// of matching surrounding quotes removed. Integer literals outside the
    /// `i64` range stay strings rather than losing precision as floats.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Integer(n);
        }
        if is_integer_literal(raw) {
            return Self::String(raw.to_string());
        }
        if let Ok(f) = raw.parse::<f64>() {
            // "inf" and "nan" parse as floats but are not numbers to a YAML reader
            if f.is_finite() {
                return Self::Float(f);
            }
        }

        Self::String(strip_matching_quotes(raw).to_string())
    }

    /// Returns the boolean if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn strip_matching_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Options parsed from a cell, in the order they appeared.
///
/// Re-inserting a key replaces the earlier value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl CellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Boolean option lookup. Present but non-boolean values count as absent.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, ConfigValue)> for CellConfig {
    fn from_iter<I: IntoIterator<Item = (K, ConfigValue)>>(iter: I) -> Self {
        let mut config = CellConfig::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

impl Serialize for CellConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
