//! Display sinks
//!
//! The ticker writes a rendered string to each sink on every tick.
//! Writes are last-write-wins: one writer, any number of readers,
//! no ordering requirement beyond "latest".

use parking_lot::RwLock;

/// Write target for rendered clock output.
pub trait DisplaySink: Send + Sync {
    /// Render `text`, replacing whatever was shown before
    fn publish(&self, text: &str);
}

/// Last-write-wins display cell.
#[derive(Debug, Default)]
pub struct LatestValue {
    value: RwLock<String>,
}

impl LatestValue {
    pub fn new() -> Self {
        LatestValue::default()
    }

    /// Latest published text; empty until the first publish
    pub fn get(&self) -> String {
        self.value.read().clone()
    }
}

impl DisplaySink for LatestValue {
    fn publish(&self, text: &str) {
        *self.value.write() = text.to_owned();
    }
}
