//! Pointer and touch input plus the drag/double-click bookkeeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use shapekit_core::Point;

/// Time and place of the last recorded press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickRecord {
    pub time: Duration,
    pub position: Point,
}

/// Transient per-gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Index into the anchor list captured on press
    pub dragged_anchor: Option<usize>,
    pub last_click: Option<ClickRecord>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        self.dragged_anchor.is_some()
    }

    /// True when a press at `position`/`time` completes a double-click with
    /// the recorded click. Both limits are inclusive.
    pub fn is_double_click(
        &self,
        position: Point,
        time: Duration,
        window: Duration,
        tolerance: f64,
    ) -> bool {
        match self.last_click {
            Some(last) => {
                time.checked_sub(last.time)
                    .is_some_and(|elapsed| elapsed <= window)
                    && last.position.distance_to(&position) <= tolerance
            }
            None => false,
        }
    }

    pub fn record_click(&mut self, position: Point, time: Duration) {
        self.last_click = Some(ClickRecord { time, position });
    }

    pub fn clear_click(&mut self) {
        self.last_click = None;
    }

    /// Drops any drag and click history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A mouse event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    /// Time since an arbitrary caller-chosen epoch
    pub time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A touch event; only the first touch point drives the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<Point>,
    pub time: Duration,
}

impl TouchEvent {
    /// The pointer-equivalent event, if the touch carries a usable point.
    ///
    /// End and cancel release regardless of remaining touch points.
    pub fn to_pointer(&self) -> Option<PointerEvent> {
        let phase = match self.phase {
            TouchPhase::Start => PointerPhase::Down,
            TouchPhase::Move => PointerPhase::Move,
            TouchPhase::End | TouchPhase::Cancel => PointerPhase::Up,
        };
        let position = match phase {
            PointerPhase::Up => self.touches.first().copied().unwrap_or_default(),
            _ => *self.touches.first()?,
        };
        Some(PointerEvent {
            phase,
            position,
            time: self.time,
        })
    }
}

/// What a press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressOutcome {
    /// Outside the canvas, or not in 2D mode
    Ignored,
    VertexDeleted,
    VertexInserted,
    /// Double-click that hit neither a deletable vertex nor an edge
    DoubleClickMissed,
    /// Anchor at this index is now being dragged
    Acquired(usize),
    Missed,
}
