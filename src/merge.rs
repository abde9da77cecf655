//! Merging resolved aliases with a host's existing alias configuration
//!
//! Resolved aliases always come first; existing aliases follow in their own
//! order. Nothing is deduplicated.

use alias_pattern::Alias;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Alias configuration as a host may already hold it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistingAliases {
    /// Ordered alias records
    List(Vec<Alias>),
    /// `find -> replacement` pairs in declaration order
    Map(Vec<(String, String)>),
}

impl ExistingAliases {
    /// Convert to an alias list, leaving `self` untouched.
    pub fn normalize(&self) -> Vec<Alias> {
        match self {
            ExistingAliases::List(aliases) => aliases.clone(),
            ExistingAliases::Map(pairs) => pairs
                .iter()
                .map(|(find, replacement)| Alias::literal(find.as_str(), replacement.as_str()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExistingAliases::List(aliases) => aliases.len(),
            ExistingAliases::Map(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Alias>> for ExistingAliases {
    fn from(aliases: Vec<Alias>) -> Self {
        ExistingAliases::List(aliases)
    }
}

impl Serialize for ExistingAliases {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExistingAliases::List(aliases) => aliases.serialize(serializer),
            ExistingAliases::Map(pairs) => {
                let map: Map<String, Value> = pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                map.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for ExistingAliases {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => {
                let aliases = serde_json::from_value(Value::Array(items)).map_err(D::Error::custom)?;
                Ok(ExistingAliases::List(aliases))
            }
            Value::Object(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (find, replacement) in map {
                    match replacement {
                        Value::String(s) => pairs.push((find, s)),
                        other => {
                            return Err(D::Error::custom(format!(
                                "alias '{}' must map to a string, got {}",
                                find, other
                            )))
                        }
                    }
                }
                Ok(ExistingAliases::Map(pairs))
            }
            other => Err(D::Error::custom(format!(
                "alias configuration must be a list or a mapping, got {}",
                other
            ))),
        }
    }
}

/// `incoming` followed by the normalized `existing`.
pub fn merge(existing: Option<&ExistingAliases>, incoming: &[Alias]) -> Vec<Alias> {
    let normalized = existing.map(ExistingAliases::normalize).unwrap_or_default();

    let mut merged = Vec::with_capacity(incoming.len() + normalized.len());
    merged.extend_from_slice(incoming);
    merged.extend(normalized);
    merged
}
