//! Presentation binder
//!
//! Maps each record and schema field to a widget by field kind. No logic
//! beyond kind dispatch lives here.

use crate::config::EditorConfig;
use crate::view::{FieldWidget, InputType, ItemElement, RecordItemView, Widget};
use record_store::Record;
use record_types::{FieldDescriptor, FieldKind, FieldValue, Schema};

/// Builds the widget for one field of a record
pub fn bind_field(field: &FieldDescriptor, record: &Record) -> FieldWidget {
    let value = record.get(&field.name);

    let widget = match field.kind {
        FieldKind::Text => text_input(value, InputType::Text),
        FieldKind::Checkboxes => text_input(value, InputType::Checkbox),
        FieldKind::RadioGroup => text_input(value, InputType::Radio),
        FieldKind::Number => Widget::NumberInput {
            value: value.and_then(FieldValue::as_number).cloned(),
        },
        FieldKind::Checkbox => Widget::Toggle {
            checked: value.map_or(false, |v| !v.is_unset()),
        },
        FieldKind::Dropdown => {
            let options = field.options();
            if options.iter().any(|option| option.is_malformed()) {
                tracing::warn!(field = %field.name, "option entry without a label separator");
            }
            Widget::Select {
                options,
                selected: value
                    .and_then(FieldValue::as_text)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
                clearable: true,
            }
        }
    };

    FieldWidget {
        name: field.name.clone(),
        label: field.label.clone(),
        kind: field.kind,
        widget,
    }
}

/// Builds the block for the record at `index`
pub fn bind_record(
    schema: &Schema,
    record: &Record,
    index: usize,
    config: &EditorConfig,
) -> RecordItemView {
    let mut elements = Vec::with_capacity(schema.len() * 2);
    for (position, field) in schema.iter().enumerate() {
        if position > 0 {
            elements.push(ItemElement::Separator);
        }
        elements.push(ItemElement::Field(bind_field(field, record)));
    }

    RecordItemView {
        index,
        header: config.item_label(index),
        delete_index: index,
        elements,
    }
}

fn text_input(value: Option<&FieldValue>, input_type: InputType) -> Widget {
    let value = match value {
        None | Some(FieldValue::Null) => String::new(),
        Some(FieldValue::Text(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Widget::TextInput { value, input_type }
}
