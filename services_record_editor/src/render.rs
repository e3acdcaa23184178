//! Text rendering of editor views
//!
//! Produces deterministic lines, one per visual row, for text hosts and
//! snapshot tests.

use crate::view::{
    EditorView, ErrorView, FieldWidget, ItemElement, RecordItemView, RecordsView, Widget,
};

impl EditorView {
    /// Renders the view as text lines
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            EditorView::Records(view) => render_records(view),
            EditorView::Error(view) => render_error(view),
        }
    }
}

fn render_records(view: &RecordsView) -> Vec<String> {
    let mut lines = Vec::new();

    let marker = if view.required { " *" } else { "" };
    lines.push(format!("{}{}", view.label, marker));
    if let Some(text) = &view.explanation_text {
        lines.push(format!("  {}", text));
    }

    for item in &view.items {
        render_item(item, &mut lines);
    }

    lines.push(format!("[+ {}]", view.add_label));

    if view.invalid {
        if let Some(message) = &view.validation_message {
            lines.push(format!("! {}", message));
        }
    }

    lines
}

fn render_item(item: &RecordItemView, lines: &mut Vec<String>) {
    lines.push(format!("{} [delete]", item.header));
    for element in &item.elements {
        match element {
            ItemElement::Field(field) => lines.push(format!("  {}", format_field(field))),
            ItemElement::Separator => lines.push("  --".to_string()),
        }
    }
}

fn render_error(view: &ErrorView) -> Vec<String> {
    let mut lines = vec![view.label.clone()];
    if let Some(text) = &view.explanation {
        lines.push(format!("  {}", text));
    }
    lines.push(format!("! {}", view.message));
    lines
}

/// Formats a single field row
fn format_field(field: &FieldWidget) -> String {
    match &field.widget {
        Widget::TextInput { value, .. } => format!("{}: {}", field.label, value),
        Widget::NumberInput { value } => match value {
            Some(n) => format!("{}: {}", field.label, n),
            None => format!("{}: ", field.label),
        },
        Widget::Toggle { checked } => {
            let mark = if *checked { "x" } else { " " };
            format!("[{}] {}", mark, field.label)
        }
        Widget::Select {
            options, selected, ..
        } => {
            let shown = selected
                .as_deref()
                .map(|value| {
                    options
                        .iter()
                        .find(|option| option.value == value)
                        .and_then(|option| option.label.as_deref())
                        .unwrap_or(value)
                })
                .unwrap_or("-");
            format!("{}: <{}>", field.label, shown)
        }
    }
}
