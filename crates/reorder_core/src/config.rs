use serde::{Deserialize, Serialize};

use crate::error::ReorderError;

/// Default pointer travel, in pixels, before a press turns into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 5.;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// A drag starts once the pointer is strictly farther than this from the press point.
    pub drag_threshold: f32,
    /// Restrict drag start to a left-side handle area with the given width.
    pub drag_handle_width: Option<f32>,
    /// Vertical space between rows.
    pub gap: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            drag_handle_width: None,
            gap: 0.,
        }
    }
}

impl ReorderConfig {
    pub fn validate(&self) -> Result<(), ReorderError> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0. {
            return Err(ReorderError::InvalidThreshold(self.drag_threshold));
        }
        Ok(())
    }
}
