//! Renderable view structures
//!
//! These are what the binder produces. Hosts map them onto real widgets.

use record_types::{FieldKind, OptionEntry};
use serde_json::Number;

/// Input type hint for text-style inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Checkbox,
    Radio,
}

/// Value-editing widget for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Single string input
    TextInput { value: String, input_type: InputType },
    /// Integer input; `None` when the stored value is not a number
    NumberInput { value: Option<Number> },
    /// Boolean toggle
    Toggle { checked: bool },
    /// Single-choice selector
    Select {
        options: Vec<OptionEntry>,
        selected: Option<String>,
        clearable: bool,
    },
}

/// A bound field: schema metadata plus its widget
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWidget {
    /// Record key
    pub name: String,
    /// Display label
    pub label: String,
    /// Field kind
    pub kind: FieldKind,
    /// Widget carrying the current value
    pub widget: Widget,
}

/// Element inside a record block
#[derive(Debug, Clone, PartialEq)]
pub enum ItemElement {
    Field(FieldWidget),
    /// Visual divider between fields
    Separator,
}

/// One record's block
#[derive(Debug, Clone, PartialEq)]
pub struct RecordItemView {
    /// Position of the record
    pub index: usize,
    /// 1-based header label ("Item 1")
    pub header: String,
    /// Position the delete control removes
    pub delete_index: usize,
    /// Fields with separators between them
    pub elements: Vec<ItemElement>,
}

impl RecordItemView {
    /// Iterates the field widgets, skipping separators
    pub fn fields(&self) -> impl Iterator<Item = &FieldWidget> {
        self.elements.iter().filter_map(|element| match element {
            ItemElement::Field(field) => Some(field),
            ItemElement::Separator => None,
        })
    }

    /// Finds a field widget by name
    pub fn field(&self, name: &str) -> Option<&FieldWidget> {
        self.fields().find(|field| field.name == name)
    }
}

/// The normal editor view
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsView {
    pub label: String,
    pub explanation_text: Option<String>,
    pub tooltip: Option<String>,
    pub required: bool,
    pub invalid: bool,
    pub validation_message: Option<String>,
    /// One block per record, in order
    pub items: Vec<RecordItemView>,
    /// Label of the insert control
    pub add_label: String,
}

/// The inert view shown when the host reports an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub label: String,
    pub explanation: Option<String>,
    pub message: String,
}

/// Result of a render
#[derive(Debug, Clone, PartialEq)]
pub enum EditorView {
    Records(RecordsView),
    Error(ErrorView),
}

impl EditorView {
    /// Returns true for the error view
    pub fn is_error(&self) -> bool {
        matches!(self, EditorView::Error(_))
    }

    /// Returns the record blocks; the error view has none
    pub fn items(&self) -> &[RecordItemView] {
        match self {
            EditorView::Records(view) => &view.items,
            EditorView::Error(_) => &[],
        }
    }
}
