//! Interaction tuning shared by the editor and the settings layer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default logical canvas edge length.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;
/// Default pick radius around an anchor.
pub const DEFAULT_ANCHOR_HIT_RADIUS: f64 = 15.0;
/// Default pick distance from a free-form polygon edge.
pub const DEFAULT_EDGE_HIT_DISTANCE: f64 = 10.0;
/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_WINDOW_MS: u64 = 300;
/// Default distance allowed between the two clicks of a double-click.
pub const DEFAULT_DOUBLE_CLICK_TOLERANCE: f64 = 20.0;

/// Canvas bounds and pointer tolerances used by an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logical canvas width
    pub canvas_width: f64,
    /// Logical canvas height
    pub canvas_height: f64,
    /// Anchors closer than this to the pointer can be grabbed
    pub anchor_hit_radius: f64,
    /// Polygon edges closer than this accept a vertex insertion
    pub edge_hit_distance: f64,
    /// Maximum time between the two presses of a double-click
    pub double_click_window_ms: u64,
    /// Maximum distance between the two presses of a double-click
    pub double_click_tolerance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            anchor_hit_radius: DEFAULT_ANCHOR_HIT_RADIUS,
            edge_hit_distance: DEFAULT_EDGE_HIT_DISTANCE,
            double_click_window_ms: DEFAULT_DOUBLE_CLICK_WINDOW_MS,
            double_click_tolerance: DEFAULT_DOUBLE_CLICK_TOLERANCE,
        }
    }
}

impl EditorConfig {
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_window_ms)
    }

    /// True when `(x, y)` lies on the canvas, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.canvas_width).contains(&x) && (0.0..=self.canvas_height).contains(&y)
    }
}
