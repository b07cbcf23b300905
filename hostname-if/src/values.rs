use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One value of a declarative configuration item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Integer(i64),
    Text(String),
    List(Vec<Option<String>>),
    /// An explicitly unset value (`null`).
    Absent,
}

/// Keyed configuration items, as read from an input document.
pub type ConfigValues = BTreeMap<String, ConfigValue>;

impl ConfigValue {
    /// Whether the value means "not provided".
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.iter().all(|item| item_is_absent(item)),
            Self::Integer(_) => false,
        }
    }

    /// Flatten into a list of strings, dropping absent entries.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Integer(value) => vec![value.to_string()],
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => vec![text.clone()],
            Self::List(items) => items
                .iter()
                .filter(|item| !item_is_absent(item))
                .flatten()
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::List(_) => f.write_str(&self.to_list().join(" ")),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(|v| Some(v.to_string())).collect())
    }
}

fn item_is_absent(item: &Option<String>) -> bool {
    item.as_deref().map_or(true, str::is_empty)
}
