//! # Vision telemetry
//!
//! The vision camera publishes its targeting solution as a flat key-value table of numbers.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Horizontal offset from crosshair to target.
///
/// Units: degrees
pub const KEY_TX: &str = "tx";

/// Vertical offset from crosshair to target.
///
/// Units: degrees
pub const KEY_TY: &str = "ty";

/// Target area.
///
/// Units: percentage of the image
pub const KEY_TA: &str = "ta";

/// Target skew.
///
/// Units: degrees
pub const KEY_TS: &str = "ts";

/// Whether the camera has a valid target (1) or not (0).
pub const KEY_TV: &str = "tv";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// An in-memory vision table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VisionTable {
    entries: HashMap<String, f64>,
}

/// Snapshot of the vision targeting solution for one cycle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct VisionSample {
    /// Horizontal offset to the target, 0.0 if there is no target.
    ///
    /// Units: degrees
    pub offset_h_deg: f64,

    /// Vertical offset to the target.
    ///
    /// Units: degrees
    pub offset_v_deg: f64,

    /// Area of the target in the image.
    pub area: f64,

    /// Skew of the target.
    ///
    /// Units: degrees
    pub skew_deg: f64,

    /// True if the camera reports a valid target.
    pub has_target: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl VisionTable {
    /// Get a number from the table, or `default` if the key is absent.
    pub fn get_number(&self, key: &str, default: f64) -> f64 {
        self.entries.get(key).copied().unwrap_or(default)
    }

    /// Publish a number into the table.
    pub fn set_number(&mut self, key: &str, value: f64) {
        self.entries.insert(key.to_string(), value);
    }

    /// Remove an entry, as happens when the camera stops publishing it.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_key_returns_default() {
        let mut table = VisionTable::default();

        assert_eq!(table.get_number(KEY_TX, 0.0), 0.0);

        table.set_number(KEY_TX, -3.5);
        assert_eq!(table.get_number(KEY_TX, 0.0), -3.5);

        table.clear(KEY_TX);
        assert_eq!(table.get_number(KEY_TX, 1.25), 1.25);
    }
}
