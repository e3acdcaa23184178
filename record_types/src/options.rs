//! Option list decoding for choice fields
//!
//! Options are encoded as `value;label` entries joined by `|`.

use std::fmt;

const ENTRY_SEPARATOR: char = '|';
const LABEL_SEPARATOR: char = ';';

/// A decoded choice option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Stored value
    pub value: String,
    /// Display label, `None` when the entry had no `;`
    pub label: Option<String>,
}

impl OptionEntry {
    /// Creates an option entry
    pub fn new(value: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            value: value.into(),
            label: label.map(str::to_string),
        }
    }

    /// Returns true if the entry was missing its label separator
    pub fn is_malformed(&self) -> bool {
        self.label.is_none()
    }

    /// Label to show, blank when the entry had none
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl fmt::Display for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Decodes an options spec into ordered entries
///
/// Absent or empty specs yield no options. Anything after a second `;` in an
/// entry is dropped. Duplicate values are kept.
pub fn decode_options(spec: Option<&str>) -> Vec<OptionEntry> {
    let spec = match spec {
        Some(spec) if !spec.is_empty() => spec,
        _ => return Vec::new(),
    };

    spec.split(ENTRY_SEPARATOR)
        .map(|entry| {
            let mut parts = entry.split(LABEL_SEPARATOR);
            let value = parts.next().unwrap_or_default();
            OptionEntry::new(value, parts.next())
        })
        .collect()
}
