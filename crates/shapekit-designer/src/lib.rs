//! # ShapeKit Designer
//!
//! Direct-manipulation editing of a single parametric shape.
//!
//! ## Core Components
//!
//! - **Model**: 2D shape kinds and parameters, 3D solid parameters
//! - **Anchors**: draggable control points derived from the parameters
//! - **Hit testing**: anchor picking and polygon edge projection
//! - **Drag**: inverse mapping from a dragged anchor back to parameters
//! - **Free-form**: polygon vertex insertion, deletion and movement
//! - **Session**: the pointer/touch state machine and parameter mirroring
//! - **Render**: `lyon` outlines for the drawing backend
//!
//! ## Architecture
//!
//! ```text
//! pointer / touch / slider input
//!   └── EditorSession
//!         ├── anchors (pure, recomputed per event)
//!         ├── hit_test
//!         ├── drag::inverse_map -> DragUpdate
//!         └── apply_update -> ParameterListener (ControlMirror, ...)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{EditorSession, PressOutcome};
//! use shapekit_core::Point;
//! use std::time::Duration;
//!
//! let mut session = EditorSession::default();
//! // grab the top-left corner of the default rectangle and pull it outward
//! let outcome = session.pointer_pressed(Point::new(150.0, 150.0), Duration::ZERO);
//! assert_eq!(outcome, PressOutcome::Acquired(1));
//! session.pointer_moved(Point::new(125.0, 125.0));
//! session.pointer_released();
//! assert_eq!(session.params().dimensions(), [150.0, 150.0]);
//! ```

pub mod anchors;
pub mod bindings;
pub mod drag;
pub mod freeform;
pub mod hit_test;
pub mod interaction;
pub mod model;
pub mod render;
pub mod session;

pub use anchors::{compute_anchors, Anchor, AnchorExtras, AnchorRole, Anchors};
pub use bindings::{ControlMirror, ControlState};
pub use drag::{inverse_map, DragUpdate};
pub use freeform::{FreeformPolygon, MIN_VERTICES};
pub use hit_test::{
    nearest_anchor, nearest_edge, point_to_segment_distance, EdgeHit, SegmentProjection,
};
pub use interaction::{
    InteractionState, PointerEvent, PointerPhase, PressOutcome, TouchEvent, TouchPhase,
};
pub use model::{
    ArcMode, MaterialKind, ShapeControls, ShapeKind, ShapeParams, SolidKind, SolidParams,
    SolidPrimitive, Style, MIN_DIMENSION,
};
pub use session::{EditorMode, EditorSession, ListenerHandle};
