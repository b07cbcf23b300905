use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hostname_if::{driver_name, CarpConfig, ConfigError, ConfigValue, ConfigValues, InterfaceConfig};
use serde::Deserialize;
use thiserror::Error;

/// Declarative description of the interfaces of one host.
///
/// ```toml
/// [interfaces.em0]
/// description = "uplink"
/// addresses = ["192.0.2.10/24", "dhcp"]
///
/// [carp.carp0]
/// id = 1
/// address = "192.0.2.1/24"
/// device = "em0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    #[serde(default)]
    pub interfaces: BTreeMap<String, ConfigValues>,
    #[serde(default)]
    pub carp: BTreeMap<String, ConfigValues>,
}

/// Errors returned when loading an input document.
#[derive(Debug, Error)]
pub enum InputLoadError {
    #[error("failed to read input document {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse input document {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("failed to parse input document {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Load an input document; `.json` files are read as JSON, anything else
/// as TOML.
pub fn load_document(path: &Path) -> Result<InputDocument, InputLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| InputLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&raw, path.display().to_string())
    } else {
        parse_toml(&raw, path.display().to_string())
    }
}

pub fn parse_toml(raw: &str, path: String) -> Result<InputDocument, InputLoadError> {
    toml::from_str(raw).map_err(|source| InputLoadError::Toml { path, source })
}

pub fn parse_json(raw: &str, path: String) -> Result<InputDocument, InputLoadError> {
    serde_json::from_str(raw).map_err(|source| InputLoadError::Json { path, source })
}

impl InputDocument {
    /// Build the interface description for `ifname`.
    ///
    /// When no `type` is given, the driver name derived from the interface
    /// name is used.
    pub fn interface_config(&self, ifname: &str) -> Option<Result<InterfaceConfig, ConfigError>> {
        let values = self.interfaces.get(ifname)?;
        let mut values = values.clone();
        if values.get("type").map_or(true, ConfigValue::is_absent) {
            values.insert(
                "type".to_string(),
                ConfigValue::Text(driver_name(ifname).to_string()),
            );
        }
        Some(InterfaceConfig::from_values(&values))
    }

    pub fn carp_config(&self, ifname: &str) -> Option<Result<CarpConfig, ConfigError>> {
        self.carp.get(ifname).map(CarpConfig::from_values)
    }
}
