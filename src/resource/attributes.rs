//! Attribute Bag
//!
//! The named scalar inputs a caller supplies to identify one resource.

use crate::error::{ResourceError, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute naming the resource kind
pub const RESOURCE_TYPE_ATTR: &str = "resource_type";
/// Attribute holding the resource's own name
pub const RESOURCE_NAME_ATTR: &str = "resource_name";
/// Attribute holding the owning project id
pub const PROJECT_ID_ATTR: &str = "project_id";
/// Attribute holding a zone or region
pub const RESOURCE_LOCATION_ATTR: &str = "resource_location";

/// Mapping from attribute name to scalar value
///
/// Ordered so that serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeBag(BTreeMap<String, String>);

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from a JSON object of scalars
    ///
    /// Strings are trimmed, numbers and booleans use their JSON text,
    /// nulls are skipped. Arrays and objects are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ResourceError::InvalidAttribute {
                name: "<root>".to_string(),
                reason: "expected an object of attributes".to_string(),
            });
        };

        let mut bag = Self::new();
        for (name, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.trim().to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ResourceError::InvalidAttribute {
                        name: name.clone(),
                        reason: "expected a scalar value".to_string(),
                    });
                }
            };
            bag.insert(name, text);
        }

        Ok(bag)
    }

    /// Parse a `key=value` pair, trimming both sides
    /// e.g., "project_id=my-project" -> ("project_id", "my-project")
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(ResourceError::InvalidAttribute {
                name: pair.to_string(),
                reason: "expected key=value".to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ResourceError::InvalidAttribute {
                name: pair.to_string(),
                reason: "attribute name is empty".to_string(),
            });
        }

        Ok((key.to_string(), value.trim().to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value of `name` if present and not blank
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Fill in every attribute of `defaults` not already set here
    pub fn merge_defaults(&mut self, defaults: &AttributeBag) {
        for (name, value) in &defaults.0 {
            self.0.entry(name.clone()).or_insert_with(|| value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AttributeBag {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Config files and attribute files share the scalar intake of [`AttributeBag::from_json`]
impl<'de> Deserialize<'de> for AttributeBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AttributeBag::from_json(&value).map_err(de::Error::custom)
    }
}
