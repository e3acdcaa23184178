//! Editor configuration
//!
//! Configuration is a small versioned JSON document. Every field has a
//! default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid editor configuration: {0}")]
    Invalid(String),

    #[error("Unsupported editor configuration version: {0}")]
    UnsupportedVersion(u32),
}

/// When the editor hands serialized text to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitPolicy {
    /// Emit only when the canonical text differs from what the host already has
    #[default]
    OnChange,
    /// Emit on every render and every mutation
    Always,
}

/// What to do with a Number edit that is not an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberParsePolicy {
    /// Refuse the edit; nothing is stored or emitted
    #[default]
    Reject,
    /// Store the Number default (`0`)
    StoreDefault,
}

/// Record editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Version of the configuration format
    pub version: u32,
    /// Emission policy
    pub emit_policy: EmitPolicy,
    /// Number parse failure policy
    pub number_parse: NumberParsePolicy,
    /// Prefix of the 1-based item header ("Item 1")
    pub item_label_prefix: String,
    /// Label of the insert control
    pub add_label: String,
}

impl EditorConfig {
    /// Current version of the configuration format
    pub const CURRENT_VERSION: u32 = 1;

    /// Creates the default configuration
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            emit_policy: EmitPolicy::default(),
            number_parse: NumberParsePolicy::default(),
            item_label_prefix: "Item".to_string(),
            add_label: "Add item".to_string(),
        }
    }

    /// Sets the emission policy
    pub fn with_emit_policy(mut self, policy: EmitPolicy) -> Self {
        self.emit_policy = policy;
        self
    }

    /// Sets the number parse policy
    pub fn with_number_parse(mut self, policy: NumberParsePolicy) -> Self {
        self.number_parse = policy;
        self
    }

    /// Parses a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if config.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }

        Ok(config)
    }

    /// Header label for the record at `index`
    pub fn item_label(&self, index: usize) -> String {
        format!("{} {}", self.item_label_prefix, index + 1)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
