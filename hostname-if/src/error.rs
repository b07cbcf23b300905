use thiserror::Error;

/// Errors raised while validating declarative interface input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A mandatory key was not provided (or only provided as a sentinel).
    #[error("{0} is a required configuration item")]
    MissingRequired(String),
    /// A key outside the accepted set was provided.
    #[error("unknown configuration item found: {0}")]
    UnknownItem(String),
    /// A list was given for a key that only takes one value.
    #[error("configuration item {0} takes a single value, not a list")]
    NotSingleValue(String),
    /// A key that must hold an integer held something else.
    #[error("configuration item {key} must be an integer, got '{value}'")]
    NotInteger { key: String, value: String },
    /// None of the content-bearing keys were provided.
    #[error("at least one of {} must be provided", .0.join(", "))]
    MissingOneOf(Vec<&'static str>),
}

/// Errors raised while turning address tokens into hostname.if lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A token in the address list is neither a keyword nor an IP address.
    #[error("addr is '{token}': not a dynamic addressing keyword or IP address")]
    NotAnAddress { token: String },
}
