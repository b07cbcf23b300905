//! rc.conf-style settings for carp(4) interfaces.

use crate::error::ConfigError;
use crate::values::ConfigValues;

const REQUIRED_ITEMS: &[&str] = &["id", "address", "device"];
const OPTIONAL_ITEMS: &[&str] = &["advbase", "advskew", "pass"];

/// A validated carp(4) interface description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarpConfig {
    values: ConfigValues,
}

impl CarpConfig {
    /// Drop unset items, then require `id`, `address` and `device` and
    /// reject anything outside the known items.
    pub fn from_values(values: &ConfigValues) -> Result<Self, ConfigError> {
        let values: ConfigValues = values
            .iter()
            .filter(|(_, value)| !value.is_absent())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        for required in REQUIRED_ITEMS {
            if !values.contains_key(*required) {
                return Err(ConfigError::MissingRequired(required.to_string()));
            }
        }

        let known = |key: &str| REQUIRED_ITEMS.contains(&key) || OPTIONAL_ITEMS.contains(&key);
        if let Some(unknown) = values.keys().find(|key| !known(key.as_str())) {
            return Err(ConfigError::UnknownItem(unknown.clone()));
        }

        Ok(Self { values })
    }

    /// Rendered tokens. Only the virtual host id is emitted; `address` and
    /// `device` are validated but not rendered.
    pub fn values(&self) -> Vec<String> {
        self.values
            .get("id")
            .map(|id| vec![format!("vhid {id}")])
            .unwrap_or_default()
    }

    pub fn content(&self) -> String {
        self.values().join(" ")
    }
}
