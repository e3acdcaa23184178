//! Per-render input from the host form field

use serde::{Deserialize, Serialize};

/// Everything the host passes in on each render
///
/// Apart from `value` and `error_message`, these are copied into the view
/// without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostProps {
    /// Stored serialized records
    pub value: Option<String>,
    /// Host-declared error; when set the editor shows only the error
    pub error_message: Option<String>,
    /// Field label
    pub label: String,
    /// Help text shown under the label
    pub explanation_text: Option<String>,
    /// Whether the host marks the field required
    pub required: bool,
    /// Tooltip text
    pub tooltip: Option<String>,
    /// Whether the host considers the current value invalid
    pub invalid: bool,
    /// Validation message shown when invalid
    pub validation_message: Option<String>,
}

impl HostProps {
    /// Creates empty props
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stored value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the explanation text
    pub fn with_explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation_text = Some(text.into());
        self
    }

    /// Sets a host error
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Returns true if a host error is present
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
