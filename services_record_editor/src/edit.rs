//! User edits and their coercion to field values

use crate::config::NumberParsePolicy;
use crate::editor::{EditorError, EditorResult};
use record_types::{default_for, FieldDescriptor, FieldKind, FieldValue};

/// Raw user input for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Text typed into a text-style input
    Text(String),
    /// Text typed into a number input
    Number(String),
    /// New checkbox state
    Toggle(bool),
    /// Selected option value, `None` when cleared
    Select(Option<String>),
}

/// What an edit does to the record
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Store the value
    Set(FieldValue),
    /// Remove the field
    Clear,
}

/// 2^63, the first value past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Parses number input the way an integer input does
///
/// Surrounding whitespace is ignored and decimals are truncated. The whole
/// input must be a number: `"12abc"` is rejected rather than read as `12`,
/// and exponent notation is evaluated, so `"1e5"` is `100000`, not `1`.
/// Returns `None` for anything that is not a finite number or whose
/// integer part does not fit in an `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .map(f64::trunc)
            .filter(|v| (-I64_BOUND..I64_BOUND).contains(v))
            .map(|v| v as i64)
    })
}

/// Checks an edit against the field kind and converts it to an outcome
pub fn coerce_edit(
    field: &FieldDescriptor,
    edit: FieldEdit,
    number_parse: NumberParsePolicy,
) -> EditorResult<EditOutcome> {
    match (field.kind, edit) {
        (FieldKind::Text | FieldKind::Checkboxes | FieldKind::RadioGroup, FieldEdit::Text(text)) => {
            Ok(EditOutcome::Set(FieldValue::Text(text)))
        }
        (FieldKind::Number, FieldEdit::Number(input)) => match parse_integer(&input) {
            Some(n) => Ok(EditOutcome::Set(FieldValue::integer(n))),
            None => match number_parse {
                NumberParsePolicy::Reject => {
                    tracing::warn!(field = %field.name, input = %input, "rejected non-integer input");
                    Err(EditorError::InvalidNumber {
                        field: field.name.clone(),
                        input,
                    })
                }
                NumberParsePolicy::StoreDefault => {
                    tracing::warn!(field = %field.name, input = %input, "storing default for non-integer input");
                    Ok(EditOutcome::Set(default_for(FieldKind::Number)))
                }
            },
        },
        (FieldKind::Checkbox, FieldEdit::Toggle(checked)) => {
            Ok(EditOutcome::Set(FieldValue::Bool(checked)))
        }
        (FieldKind::Dropdown, FieldEdit::Select(Some(value))) => {
            Ok(EditOutcome::Set(FieldValue::Text(value)))
        }
        (FieldKind::Dropdown, FieldEdit::Select(None)) => Ok(EditOutcome::Clear),
        (kind, _) => Err(EditorError::EditKindMismatch {
            field: field.name.clone(),
            kind,
        }),
    }
}
