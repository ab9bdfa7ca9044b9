//! Render context handed to HTML templates.

use serde::Serialize;

/// Data context for both the full page and the fragment. Templates bind the
/// value under the name `CounterValue`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CounterView {
    /// Current counter value.
    #[serde(rename = "CounterValue")]
    pub counter_value: i64,
}

impl CounterView {
    pub fn new(counter_value: i64) -> Self {
        Self { counter_value }
    }
}
