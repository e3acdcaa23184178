//! Host adapter: render cycles, mutations and emission

use crate::binder::bind_record;
use crate::config::{EditorConfig, EmitPolicy};
use crate::edit::{coerce_edit, EditOutcome, FieldEdit};
use crate::props::HostProps;
use crate::sink::ChangeSink;
use crate::view::{EditorView, ErrorView, RecordsView};
use record_store::{reconcile, serialize, RecordList, StoreError};
use record_types::{FieldKind, Schema};
use thiserror::Error;

/// Editor error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("No active render cycle")]
    NoActiveCycle,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Edit does not match field {field} of kind {kind}")]
    EditKindMismatch { field: String, kind: FieldKind },

    #[error("Invalid number for field {field}: {input:?}")]
    InvalidNumber { field: String, input: String },
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;

/// The record list editor
///
/// Each `render` starts a new cycle from the host's stored text. Mutations
/// apply to that cycle's list until the next render replaces it.
pub struct RecordEditor<S: ChangeSink> {
    schema: Schema,
    config: EditorConfig,
    sink: S,
    /// List for the live cycle; `None` before the first render and after an error render
    records: Option<RecordList>,
    /// Canonical text the host has, as far as this cycle knows
    current: Option<String>,
    last_emitted: Option<String>,
}

impl<S: ChangeSink> RecordEditor<S> {
    /// Create an editor for a schema
    pub fn new(schema: Schema, config: EditorConfig, sink: S) -> Self {
        Self {
            schema,
            config,
            sink,
            records: None,
            current: None,
            last_emitted: None,
        }
    }

    /// Get the schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get the configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Get the change sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the change sink mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the editor, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Records of the live cycle
    pub fn records(&self) -> Option<&RecordList> {
        self.records.as_ref()
    }

    /// Last text handed to the sink
    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    /// Run a render cycle
    ///
    /// With a host error present nothing is loaded or emitted and the live
    /// list is dropped.
    pub fn render(&mut self, props: &HostProps) -> EditorResult<EditorView> {
        if let Some(message) = &props.error_message {
            tracing::debug!(error = %message, "rendering host error, skipping record cycle");
            self.records = None;
            self.current = None;
            return Ok(EditorView::Error(ErrorView {
                label: props.label.clone(),
                explanation: props.explanation_text.clone(),
                message: message.clone(),
            }));
        }

        self.records = None;
        self.current = None;
        let reconciled = reconcile(&self.schema, props.value.as_deref())?;

        let should_emit = match self.config.emit_policy {
            EmitPolicy::Always => true,
            EmitPolicy::OnChange => reconciled.changed,
        };
        if should_emit {
            self.emit(&reconciled.serialized);
        }

        let view = self.build_view(props, &reconciled.records);
        self.records = Some(reconciled.records);
        self.current = Some(reconciled.serialized);
        Ok(view)
    }

    /// Append an empty record
    pub fn insert_record(&mut self) -> EditorResult<usize> {
        let index = self.live_records()?.insert_record();
        tracing::debug!(index, "inserted record");
        self.commit()?;
        Ok(index)
    }

    /// Remove the record at `index`
    pub fn delete_record(&mut self, index: usize) -> EditorResult<()> {
        self.live_records()?.delete_record(index)?;
        tracing::debug!(index, "deleted record");
        self.commit()
    }

    /// Apply a user edit to one field of the record at `index`
    pub fn set_field(&mut self, index: usize, name: &str, edit: FieldEdit) -> EditorResult<()> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| EditorError::UnknownField(name.to_string()))?;
        let outcome = coerce_edit(field, edit, self.config.number_parse)?;

        let records = self.live_records()?;
        match outcome {
            EditOutcome::Set(value) => {
                records.set_field(index, name, value)?;
            }
            EditOutcome::Clear => {
                records.clear_field(index, name)?;
            }
        }
        tracing::debug!(index, field = name, "updated field");
        self.commit()
    }

    fn live_records(&mut self) -> EditorResult<&mut RecordList> {
        self.records.as_mut().ok_or(EditorError::NoActiveCycle)
    }

    fn commit(&mut self) -> EditorResult<()> {
        let records = self.records.as_ref().ok_or(EditorError::NoActiveCycle)?;
        let serialized = serialize(records)?;

        let should_emit = match self.config.emit_policy {
            EmitPolicy::Always => true,
            EmitPolicy::OnChange => self.current.as_deref() != Some(serialized.as_str()),
        };
        if should_emit {
            self.emit(&serialized);
        }
        self.current = Some(serialized);
        Ok(())
    }

    fn emit(&mut self, serialized: &str) {
        tracing::debug!(bytes = serialized.len(), "emitting records");
        self.sink.on_change(serialized);
        self.last_emitted = Some(serialized.to_string());
    }

    fn build_view(&self, props: &HostProps, records: &RecordList) -> EditorView {
        let items = records
            .iter()
            .enumerate()
            .map(|(index, record)| bind_record(&self.schema, record, index, &self.config))
            .collect();

        EditorView::Records(RecordsView {
            label: props.label.clone(),
            explanation_text: props.explanation_text.clone(),
            tooltip: props.tooltip.clone(),
            required: props.required,
            invalid: props.invalid,
            validation_message: props.validation_message.clone(),
            items,
            add_label: self.config.add_label.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberParsePolicy;
    use crate::sink::RecordingSink;
    use record_types::{FieldDescriptor, FieldValue};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::new("name", "Name", FieldKind::Text),
            FieldDescriptor::new("age", "Age", FieldKind::Number),
            FieldDescriptor::new("color", "Color", FieldKind::Dropdown).with_options("r;Red"),
        ])
        .unwrap()
    }

    fn editor() -> RecordEditor<RecordingSink> {
        RecordEditor::new(schema(), EditorConfig::default(), RecordingSink::new())
    }

    #[test]
    fn test_mutation_before_render_fails() {
        let mut editor = editor();
        assert_eq!(editor.insert_record(), Err(EditorError::NoActiveCycle));
        assert_eq!(editor.sink().count(), 0);
    }

    #[test]
    fn test_render_canonical_value_does_not_emit() {
        let mut editor = editor();
        editor
            .render(&HostProps::new().with_value(r#"[{"name":"a","age":1,"color":"r"}]"#))
            .unwrap();
        assert_eq!(editor.sink().count(), 0);
        assert_eq!(editor.records().unwrap().len(), 1);
    }

    #[test]
    fn test_set_field_emits_each_change() {
        let mut editor = editor();
        editor.render(&HostProps::new().with_value("[]")).unwrap();
        editor.insert_record().unwrap();
        editor
            .set_field(0, "name", FieldEdit::Text("Ada".to_string()))
            .unwrap();
        editor
            .set_field(0, "age", FieldEdit::Number("36".to_string()))
            .unwrap();

        assert_eq!(
            editor.sink().emitted(),
            &[
                "[{}]".to_string(),
                r#"[{"name":"Ada"}]"#.to_string(),
                r#"[{"name":"Ada","age":36}]"#.to_string(),
            ]
        );
        assert_eq!(editor.last_emitted(), Some(r#"[{"name":"Ada","age":36}]"#));
    }

    #[test]
    fn test_identical_edit_does_not_emit_on_change() {
        let mut editor = editor();
        editor
            .render(&HostProps::new().with_value(r#"[{"name":"a","age":1,"color":"r"}]"#))
            .unwrap();
        editor
            .set_field(0, "name", FieldEdit::Text("a".to_string()))
            .unwrap();
        assert_eq!(editor.sink().count(), 0);
    }

    #[test]
    fn test_always_policy_emits_every_time() {
        let config = EditorConfig::default().with_emit_policy(EmitPolicy::Always);
        let mut editor = RecordEditor::new(schema(), config, RecordingSink::new());
        let stored = r#"[{"name":"a","age":1,"color":"r"}]"#;

        editor.render(&HostProps::new().with_value(stored)).unwrap();
        editor
            .set_field(0, "name", FieldEdit::Text("a".to_string()))
            .unwrap();
        assert_eq!(editor.sink().emitted(), &[stored.to_string(), stored.to_string()]);
    }

    #[test]
    fn test_dropdown_clear_removes_field() {
        let mut editor = editor();
        editor
            .render(&HostProps::new().with_value(r#"[{"name":"a","age":1,"color":"r"}]"#))
            .unwrap();
        editor.set_field(0, "color", FieldEdit::Select(None)).unwrap();
        assert_eq!(editor.sink().last(), Some(r#"[{"name":"a","age":1}]"#));

        // Next cycle fills the default back in at the end
        let stored = editor.sink().last().unwrap_or_default().to_string();
        editor.render(&HostProps::new().with_value(stored)).unwrap();
        assert_eq!(
            editor.sink().last(),
            Some(r#"[{"name":"a","age":1,"color":""}]"#)
        );
    }

    #[test]
    fn test_invalid_number_is_rejected_without_emit() {
        let mut editor = editor();
        editor.render(&HostProps::new().with_value("[{}]")).unwrap();
        let before = editor.sink().count();

        let result = editor.set_field(0, "age", FieldEdit::Number("abc".to_string()));
        assert!(matches!(result, Err(EditorError::InvalidNumber { .. })));
        assert_eq!(editor.sink().count(), before);
        assert_eq!(
            editor.records().unwrap().get(0).unwrap().get("age"),
            Some(&FieldValue::integer(0))
        );
    }

    #[test]
    fn test_out_of_range_number_is_not_clamped() {
        let mut editor = editor();
        editor
            .render(&HostProps::new().with_value(r#"[{"name":"a","age":7,"color":"r"}]"#))
            .unwrap();

        for input in ["1e30", "-1e30", "99999999999999999999"] {
            let result = editor.set_field(0, "age", FieldEdit::Number(input.to_string()));
            assert!(matches!(result, Err(EditorError::InvalidNumber { .. })));
        }
        assert_eq!(editor.sink().count(), 0);
        assert_eq!(
            editor.records().unwrap().get(0).unwrap().get("age"),
            Some(&FieldValue::integer(7))
        );
    }

    #[test]
    fn test_invalid_number_stores_default_when_configured() {
        let config = EditorConfig::default().with_number_parse(NumberParsePolicy::StoreDefault);
        let mut editor = RecordEditor::new(schema(), config, RecordingSink::new());
        editor
            .render(&HostProps::new().with_value(r#"[{"name":"a","age":7,"color":"r"}]"#))
            .unwrap();
        editor
            .set_field(0, "age", FieldEdit::Number("abc".to_string()))
            .unwrap();
        assert_eq!(editor.sink().last(), Some(r#"[{"name":"a","age":0,"color":"r"}]"#));
    }

    #[test]
    fn test_unknown_field() {
        let mut editor = editor();
        editor.render(&HostProps::new().with_value("[{}]")).unwrap();
        assert_eq!(
            editor.set_field(0, "missing", FieldEdit::Text("x".to_string())),
            Err(EditorError::UnknownField("missing".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_index() {
        let mut editor = editor();
        editor.render(&HostProps::new().with_value("[]")).unwrap();
        assert_eq!(
            editor.delete_record(0),
            Err(EditorError::Store(StoreError::IndexOutOfRange { index: 0, len: 0 }))
        );
        assert!(editor
            .set_field(0, "name", FieldEdit::Text("x".to_string()))
            .is_err());
        assert_eq!(editor.sink().count(), 0);
    }

    #[test]
    fn test_malformed_stored_value_propagates() {
        let mut editor = editor();
        match editor.render(&HostProps::new().with_value("not json")) {
            Err(EditorError::Store(StoreError::MalformedValue(_))) => {}
            other => panic!("Expected MalformedValue, got {:?}", other),
        }
        assert!(editor.records().is_none());
        assert_eq!(editor.sink().count(), 0);
    }

    #[test]
    fn test_error_render_drops_live_cycle() {
        let mut editor = editor();
        editor.render(&HostProps::new().with_value("[]")).unwrap();
        let view = editor
            .render(&HostProps::new().with_value("[]").with_error("server rejected"))
            .unwrap();

        assert!(view.is_error());
        assert!(editor.records().is_none());
        assert_eq!(editor.insert_record(), Err(EditorError::NoActiveCycle));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen: Vec<String> = Vec::new();
        {
            let sink = |text: &str| seen.push(text.to_string());
            let mut editor = RecordEditor::new(Schema::empty(), EditorConfig::default(), sink);
            editor.render(&HostProps::new()).unwrap();
            editor.insert_record().unwrap();
        }
        assert_eq!(seen, vec!["[]".to_string(), "[{}]".to_string()]);
    }
}
