//! Live numeric parameter controls.

use std::collections::HashMap;

/// Registry of numeric input controls, keyed by control id.
///
/// Values are kept as the raw text the user typed and parsed at dispatch
/// time, matching the live-read behavior of the control surface.
#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    values: HashMap<String, String>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw text of a control.
    pub fn set(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        self.values.insert(id.into(), raw.into());
    }

    /// Removes a control, as if its input never existed on the panel.
    pub fn clear(&mut self, id: &str) {
        self.values.remove(id);
    }

    /// Reads a control as a base-10 integer.
    ///
    /// Absent or unparsable controls read as 0. The silent default matches
    /// the observed control surface and is relied on by the dispatcher; it
    /// can mask missing configuration, but that is the contract.
    pub fn read_int(&self, id: &str) -> i64 {
        self.values
            .get(id)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }
}
