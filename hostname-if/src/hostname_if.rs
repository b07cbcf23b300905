//! Assembly of complete hostname.if(5) documents.

use std::collections::BTreeSet;

use crate::address::AddressClassifier;
use crate::device::DeviceClass;
use crate::error::{ConfigError, FormatError};
use crate::inet::InetFormatter;
use crate::passthrough::PassthroughFormatter;
use crate::values::{ConfigValue, ConfigValues};
use crate::version::VersionResolver;

const KNOWN_ITEMS: &[&str] = &[
    "description",
    "desc",
    "type",
    "options",
    "addresses",
    "raw_values",
    "mtu",
];
const LIST_ITEMS: &[&str] = &["options", "addresses", "raw_values"];
const CONTENT_ITEMS: &[&str] = &["addresses", "raw_values", "options", "description", "mtu"];

/// Declarative description of one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceConfig {
    pub description: Option<String>,
    pub device_type: String,
    pub addresses: Vec<String>,
    pub raw_values: Vec<String>,
    pub options: Vec<String>,
    pub mtu: Option<i64>,
}

impl InterfaceConfig {
    /// Validate keyed input and build the interface description.
    ///
    /// `desc` is accepted as a spelling of `description`. A provided `mtu`
    /// is appended to the options as `mtu <value>`.
    pub fn from_values(values: &ConfigValues) -> Result<Self, ConfigError> {
        for (key, value) in values {
            if !KNOWN_ITEMS.contains(&key.as_str()) {
                return Err(ConfigError::UnknownItem(key.clone()));
            }
            if matches!(value, ConfigValue::List(_)) && !LIST_ITEMS.contains(&key.as_str()) {
                return Err(ConfigError::NotSingleValue(key.clone()));
            }
        }

        let provided = |key: &str| values.get(key).filter(|value| !value.is_absent());
        let list = |key: &str| provided(key).map(ConfigValue::to_list).unwrap_or_default();

        let description = provided("description")
            .or_else(|| provided("desc"))
            .map(ToString::to_string);
        let mtu = provided("mtu").map(|value| parse_integer("mtu", value)).transpose()?;

        let has_content = description.is_some()
            || mtu.is_some()
            || ["addresses", "raw_values", "options"]
                .iter()
                .any(|&key| provided(key).is_some());
        if !has_content {
            return Err(ConfigError::MissingOneOf(CONTENT_ITEMS.to_vec()));
        }

        let mut options = list("options");
        if let Some(mtu) = mtu {
            options.push(format!("mtu {mtu}"));
        }

        Ok(Self {
            description,
            device_type: provided("type").map(ToString::to_string).unwrap_or_default(),
            addresses: list("addresses"),
            raw_values: list("raw_values"),
            options,
            mtu,
        })
    }

    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::of(&self.device_type)
    }
}

fn parse_integer(key: &str, value: &ConfigValue) -> Result<i64, ConfigError> {
    match value {
        ConfigValue::Integer(n) => Ok(*n),
        ConfigValue::Text(text) => text.trim().parse().map_err(|_| ConfigError::NotInteger {
            key: key.to_string(),
            value: text.clone(),
        }),
        other => Err(ConfigError::NotInteger {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Renders [`InterfaceConfig`]s into hostname.if content.
pub struct HostnameIf<'a> {
    classifier: &'a dyn AddressClassifier,
    version: &'a dyn VersionResolver,
}

impl<'a> HostnameIf<'a> {
    pub fn new(classifier: &'a dyn AddressClassifier, version: &'a dyn VersionResolver) -> Self {
        Self {
            classifier,
            version,
        }
    }

    /// The ordered, deduplicated lines of the file.
    ///
    /// Generic devices run their addresses through both the strict and the
    /// lenient formatter; the duplicate lines that produces are removed here.
    pub fn lines(&self, config: &InterfaceConfig) -> Result<Vec<String>, FormatError> {
        let mut lines = Vec::new();

        if !config.addresses.is_empty() {
            let inet = InetFormatter::new(self.classifier, self.version);
            lines.extend(inet.format(&config.addresses)?);
        }

        let class = config.device_class();
        if class.is_verbatim() {
            tracing::debug!(device_type = %config.device_type, ?class, "using raw values verbatim");
            lines.extend(config.raw_values.iter().cloned());
        } else {
            tracing::debug!(device_type = %config.device_type, "formatting generic interface");
            let passthrough = PassthroughFormatter::new(self.classifier);
            lines.extend(passthrough.format(&config.addresses));
            lines.extend(passthrough.format(&config.raw_values));
        }

        if !config.options.is_empty() {
            let first = take_first(&mut lines);
            lines.insert(0, format!("{first} {}", config.options.join(" ")));
        }

        if let Some(description) = &config.description {
            let description = format!("description \"{description}\"");
            if config.options.is_empty() {
                lines.insert(0, description);
            } else {
                let first = take_first(&mut lines);
                lines.insert(0, format!("{first} {description}"));
            }
        }

        let total = lines.len();
        let lines = dedup_preserving_order(lines);
        tracing::debug!(total, unique = lines.len(), "assembled hostname.if lines");
        Ok(lines)
    }

    /// The file content: unique lines joined by newlines, leading whitespace
    /// trimmed.
    pub fn content(&self, config: &InterfaceConfig) -> Result<String, FormatError> {
        let lines = self.lines(config)?;
        Ok(lines.join("\n").trim_start().to_string())
    }
}

fn take_first(lines: &mut Vec<String>) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        lines.remove(0)
    }
}

fn dedup_preserving_order(lines: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
