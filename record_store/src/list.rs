//! The ordered record list and its mutations

use crate::record::Record;
use crate::{StoreError, StoreResult};
use record_types::{FieldValue, Schema};
use serde::{Deserialize, Serialize};

/// Ordered list of records, the unit of serialization
///
/// Records have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records as a slice
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Gets the record at a position
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Appends an empty record and returns its position
    pub fn insert_record(&mut self) -> usize {
        self.records.push(Record::new());
        self.records.len() - 1
    }

    /// Removes the record at `index`, shifting later records down
    pub fn delete_record(&mut self, index: usize) -> StoreResult<Record> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Overwrites a field on the record at `index`
    pub fn set_field(
        &mut self,
        index: usize,
        name: &str,
        value: FieldValue,
    ) -> StoreResult<Option<FieldValue>> {
        Ok(self.record_mut(index)?.set(name, value))
    }

    /// Removes a field from the record at `index`
    pub fn clear_field(&mut self, index: usize, name: &str) -> StoreResult<Option<FieldValue>> {
        Ok(self.record_mut(index)?.remove(name))
    }

    /// Fills every unset schema field with its kind default
    ///
    /// Returns how many fields changed. A field already holding its default
    /// is rewritten in place and not counted, so a second pass returns zero.
    pub fn materialize_defaults(&mut self, schema: &Schema) -> usize {
        let mut changed = 0;
        for record in &mut self.records {
            for field in schema {
                let unset = record.get(&field.name).map_or(true, FieldValue::is_unset);
                if !unset {
                    continue;
                }
                let default = field.default_value();
                if record.get(&field.name) != Some(&default) {
                    changed += 1;
                }
                record.set(field.name.as_str(), default);
            }
        }
        changed
    }

    /// Parses a list from its canonical JSON text
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::MalformedValue(e.to_string()))
    }

    /// Encodes the list as compact canonical JSON
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string(self).map_err(|e| StoreError::SerializationFailed(e.to_string()))
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn record_mut(&mut self, index: usize) -> StoreResult<&mut Record> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }
}
