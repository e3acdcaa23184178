//! # Record Store
//!
//! Holds the list of records being edited and owns its canonical text form.
//!
//! ## Philosophy
//!
//! - **Position is identity**: Records are addressed by index only
//! - **Canonical text**: One compact JSON array of flat objects, stable across versions
//! - **Explicit defaults**: Unset schema fields are written back, not just displayed
//! - **Pure reconcile**: Stored text in, materialized list and canonical text out
//!
//! ## Example
//!
//! ```ignore
//! use record_store::reconcile;
//! use record_types::Schema;
//!
//! let schema = Schema::from_json(r#"[{"propertyName":"active","label":"Active","type":3}]"#)?;
//! let reconciled = reconcile(&schema, Some("[{}]"))?;
//! assert_eq!(reconciled.serialized, r#"[{"active":false}]"#);
//! assert!(reconciled.changed);
//! ```

pub mod list;
pub mod record;

pub use list::RecordList;
pub use record::Record;

use record_types::Schema;
use thiserror::Error;

/// Record store error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Malformed stored value: {0}")]
    MalformedValue(String),

    #[error("Failed to serialize records: {0}")]
    SerializationFailed(String),

    #[error("Record index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Record store result
pub type StoreResult<T> = Result<T, StoreError>;

/// Loads a record list from stored text
///
/// Absent or empty text is an empty list. Anything else must be a JSON array
/// of flat objects; there is no partial recovery.
pub fn load(serialized: Option<&str>) -> StoreResult<RecordList> {
    match serialized {
        None | Some("") => Ok(RecordList::new()),
        Some(text) => RecordList::from_json(text),
    }
}

/// Encodes a record list in canonical form
pub fn serialize(list: &RecordList) -> StoreResult<String> {
    list.to_json()
}

/// Outcome of reconciling stored text against a schema
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// Loaded list with defaults materialized
    pub records: RecordList,
    /// Canonical text of `records`
    pub serialized: String,
    /// Number of fields filled with defaults
    pub defaults_written: usize,
    /// True if `serialized` differs from the stored text
    pub changed: bool,
}

/// Loads, materializes defaults and re-serializes in one step
pub fn reconcile(schema: &Schema, stored: Option<&str>) -> StoreResult<Reconciled> {
    let mut records = load(stored)?;
    let defaults_written = records.materialize_defaults(schema);
    let serialized = serialize(&records)?;
    let changed = stored != Some(serialized.as_str());

    tracing::debug!(
        records = records.len(),
        defaults_written,
        changed,
        "reconciled stored records"
    );

    Ok(Reconciled {
        records,
        serialized,
        defaults_written,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_types::{FieldDescriptor, FieldKind, FieldValue};

    fn checkbox_schema() -> Schema {
        Schema::new(vec![FieldDescriptor::new(
            "active",
            "Active",
            FieldKind::Checkbox,
        )])
        .unwrap()
    }

    #[test]
    fn test_load_absent_is_empty() {
        assert!(load(None).unwrap().is_empty());
        assert!(load(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_propagates() {
        for input in ["{ invalid json }", "{}", "null", "[1]", "[[]]", "  "] {
            match load(Some(input)) {
                Err(StoreError::MalformedValue(_)) => {}
                other => panic!("Expected MalformedValue for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_load_serialize_roundtrip() {
        let text = r#"[{"a":"x","n":1.5,"b":true},{},{"z":null}]"#;
        let list = load(Some(text)).unwrap();
        assert_eq!(serialize(&list).unwrap(), text);
        assert_eq!(load(Some(&serialize(&list).unwrap())).unwrap(), list);
    }

    #[test]
    fn test_reconcile_materializes_checkbox() {
        let reconciled = reconcile(&checkbox_schema(), Some("[{}]")).unwrap();
        assert_eq!(reconciled.serialized, r#"[{"active":false}]"#);
        assert_eq!(reconciled.defaults_written, 1);
        assert!(reconciled.changed);
        assert_eq!(
            reconciled.records.get(0).unwrap().get("active"),
            Some(&FieldValue::Bool(false))
        );
    }

    #[test]
    fn test_reconcile_canonical_input_is_unchanged() {
        let reconciled = reconcile(&checkbox_schema(), Some(r#"[{"active":true}]"#)).unwrap();
        assert!(!reconciled.changed);
        assert_eq!(reconciled.defaults_written, 0);
    }

    #[test]
    fn test_reconcile_absent_value_becomes_empty_array() {
        let reconciled = reconcile(&checkbox_schema(), None).unwrap();
        assert_eq!(reconciled.serialized, "[]");
        assert!(reconciled.changed);

        let reconciled = reconcile(&checkbox_schema(), Some("[]")).unwrap();
        assert!(!reconciled.changed);
    }

    #[test]
    fn test_reconcile_normalizes_whitespace() {
        let reconciled = reconcile(&Schema::empty(), Some(r#"[ { "a" : "x" } ]"#)).unwrap();
        assert_eq!(reconciled.serialized, r#"[{"a":"x"}]"#);
        assert!(reconciled.changed);
        assert_eq!(reconciled.defaults_written, 0);
    }
}
