//! # Record Types
//!
//! This crate defines the field schema for the record list editor.
//!
//! ## Philosophy
//!
//! - **Schema from the host**: Field names, labels, kinds and option sets are supplied externally
//! - **Ordered**: Schema order is rendering order and iteration order
//! - **Typed values**: Every field kind maps to exactly one value variant
//! - **Testable**: Schema interpretation is pure and has no I/O
//!
//! ## Example
//!
//! ```ignore
//! use record_types::{FieldKind, Schema};
//!
//! let schema = Schema::from_json(
//!     r#"[{"propertyName":"active","label":"Active","type":3}]"#,
//! )?;
//! assert_eq!(schema.field("active").unwrap().kind, FieldKind::Checkbox);
//! ```

pub mod options;
pub mod value;

pub use options::{decode_options, OptionEntry};
pub use value::{default_for, FieldValue};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors raised while interpreting a host field schema
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Duplicate field name: {0}")]
    DuplicateFieldName(String),

    #[error("Unknown field kind ordinal: {0}")]
    UnknownFieldKind(u8),

    #[error("Invalid field configuration: {0}")]
    InvalidConfig(String),
}

/// Schema result
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Kind of a record field
///
/// Determines the value variant and the editing widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Integer input
    Number,
    /// Single choice from decoded options
    Dropdown,
    /// Boolean toggle
    Checkbox,
    /// Single encoded choice stored as text
    Checkboxes,
    /// Single encoded choice stored as text
    RadioGroup,
}

impl FieldKind {
    /// All kinds in host ordinal order
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Dropdown,
        FieldKind::Checkbox,
        FieldKind::Checkboxes,
        FieldKind::RadioGroup,
    ];

    /// Maps the host's integer field type to a kind
    pub fn from_ordinal(ordinal: u8) -> SchemaResult<Self> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(SchemaError::UnknownFieldKind(ordinal))
    }

    /// Returns the host's integer field type for this kind
    pub fn ordinal(self) -> u8 {
        match self {
            FieldKind::Text => 0,
            FieldKind::Number => 1,
            FieldKind::Dropdown => 2,
            FieldKind::Checkbox => 3,
            FieldKind::Checkboxes => 4,
            FieldKind::RadioGroup => 5,
        }
    }

    /// Returns true for kinds that carry an options spec
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldKind::Dropdown | FieldKind::Checkboxes | FieldKind::RadioGroup
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "Text"),
            FieldKind::Number => write!(f, "Number"),
            FieldKind::Dropdown => write!(f, "Dropdown"),
            FieldKind::Checkbox => write!(f, "Checkbox"),
            FieldKind::Checkboxes => write!(f, "Checkboxes"),
            FieldKind::RadioGroup => write!(f, "RadioGroup"),
        }
    }
}

/// Host configuration for a single field, as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Record key the field is stored under
    pub property_name: String,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Field kind ordinal
    #[serde(rename = "type")]
    pub kind: u8,
    /// Encoded options (`value;label|value;label`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

/// A single field of the record schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Record key
    pub name: String,
    /// Display label
    pub label: String,
    /// Field kind
    pub kind: FieldKind,
    /// Encoded options, only meaningful for choice kinds
    pub options_spec: Option<String>,
}

impl FieldDescriptor {
    /// Creates a field descriptor without options
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            options_spec: None,
        }
    }

    /// Sets the encoded options spec
    pub fn with_options(mut self, spec: impl Into<String>) -> Self {
        self.options_spec = Some(spec.into());
        self
    }

    /// Decodes the options for choice kinds; other kinds have none
    pub fn options(&self) -> Vec<OptionEntry> {
        if self.kind.is_choice() {
            decode_options(self.options_spec.as_deref())
        } else {
            Vec::new()
        }
    }

    /// Returns the default value for this field
    pub fn default_value(&self) -> FieldValue {
        default_for(self.kind)
    }

    fn from_config(config: &FieldConfig) -> SchemaResult<Self> {
        Ok(Self {
            name: config.property_name.clone(),
            label: config.label.clone(),
            kind: FieldKind::from_ordinal(config.kind)?,
            options_spec: config.options.clone(),
        })
    }
}

/// Ordered, validated field schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Creates a schema with no fields
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a schema from descriptors, checking name rules
    pub fn new(fields: Vec<FieldDescriptor>) -> SchemaResult<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Builds a schema from the host's field configuration
    pub fn from_configs(configs: &[FieldConfig]) -> SchemaResult<Self> {
        let fields = configs
            .iter()
            .map(FieldDescriptor::from_config)
            .collect::<SchemaResult<Vec<_>>>()?;
        Self::new(fields)
    }

    /// Parses the host's field configuration from JSON
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let configs: Vec<FieldConfig> =
            serde_json::from_str(json).map_err(|e| SchemaError::InvalidConfig(e.to_string()))?;
        Self::from_configs(&configs)
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterates fields in schema order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Returns the fields as a slice
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
