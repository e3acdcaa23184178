//! # Record Editor Service
//!
//! A schema-driven editor for a variable-length list of flat records.
//!
//! ## Philosophy
//!
//! - **Host-owned state**: The stored text is the only state that survives a render
//! - **Widgets as data**: Views are plain values; drawing them is the host's job
//! - **Typed edits**: User input is coerced to the field kind before it reaches the store
//! - **Explicit emission**: Every change goes out through a `ChangeSink`
//! - **Testable**: Render, edit and emit run synchronously with no I/O
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A widget toolkit (no layout, styling or accessibility)
//! - A validation framework (host errors are displayed, not produced)
//! - A multi-value store (Checkboxes and RadioGroup hold one string)
//!
//! ## Example
//!
//! ```ignore
//! use record_types::Schema;
//! use services_record_editor::{EditorConfig, FieldEdit, HostProps, RecordEditor, RecordingSink};
//!
//! let schema = Schema::from_json(r#"[{"propertyName":"active","label":"Active","type":3}]"#)?;
//! let mut editor = RecordEditor::new(schema, EditorConfig::default(), RecordingSink::new());
//!
//! editor.render(&HostProps::new().with_value("[{}]"))?;
//! assert_eq!(editor.sink().last(), Some(r#"[{"active":false}]"#));
//!
//! editor.set_field(0, "active", FieldEdit::Toggle(true))?;
//! assert_eq!(editor.sink().last(), Some(r#"[{"active":true}]"#));
//! ```

pub mod binder;
pub mod config;
pub mod edit;
pub mod editor;
pub mod props;
pub mod render;
pub mod sink;
pub mod view;

pub use binder::{bind_field, bind_record};
pub use config::{ConfigError, EditorConfig, EmitPolicy, NumberParsePolicy};
pub use edit::{coerce_edit, parse_integer, EditOutcome, FieldEdit};
pub use editor::{EditorError, EditorResult, RecordEditor};
pub use props::HostProps;
pub use sink::{ChangeSink, RecordingSink};
pub use view::{
    EditorView, ErrorView, FieldWidget, InputType, ItemElement, RecordItemView, RecordsView,
    Widget,
};
