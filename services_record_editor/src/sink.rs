//! Persistence callback

/// Receives canonical serialized records from the editor
pub trait ChangeSink {
    /// Called with the full serialized record list
    fn on_change(&mut self, serialized: &str);
}

impl<F> ChangeSink for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, serialized: &str) {
        self(serialized)
    }
}

/// Sink that keeps every emitted value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    emitted: Vec<String>,
}

impl RecordingSink {
    /// Creates an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every emitted value in order
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Returns the most recent emitted value
    pub fn last(&self) -> Option<&str> {
        self.emitted.last().map(|s| s.as_str())
    }

    /// Returns the number of emissions
    pub fn count(&self) -> usize {
        self.emitted.len()
    }

    /// Drops recorded values
    pub fn clear(&mut self) {
        self.emitted.clear();
    }
}

impl ChangeSink for RecordingSink {
    fn on_change(&mut self, serialized: &str) {
        self.emitted.push(serialized.to_string());
    }
}
