//! Editor session: owns the authoritative parameters and turns pointer,
//! touch and slider input into parameter writes.
//!
//! Every write goes through the session so that registered
//! [`ParameterListener`]s see exactly one [`ParamChange`] per field changed,
//! whether the change came from a slider or from dragging an anchor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use shapekit_core::{
    Color, EditorConfig, EditorError, ParamChange, ParamField, ParamValue, ParameterListener,
    Point, Point3, Shared,
};

use crate::anchors::{compute_anchors, AnchorExtras, AnchorRole, Anchors};
use crate::drag::{inverse_map, DragUpdate};
use crate::freeform::FreeformPolygon;
use crate::hit_test::{nearest_anchor, nearest_edge};
use crate::interaction::{
    InteractionState, PointerEvent, PointerPhase, PressOutcome, TouchEvent,
};
use crate::model::{
    ArcMode, MaterialKind, ShapeKind, ShapeParams, SolidKind, SolidParams,
};

/// Which editor is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl EditorMode {
    /// Whether the "drag to orbit" hint is shown.
    pub fn shows_orbit_hint(&self) -> bool {
        *self == Self::ThreeD
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoD => write!(f, "2d"),
            Self::ThreeD => write!(f, "3d"),
        }
    }
}

/// Handle for a registered listener, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(usize);

/// One editing session for a single 2D shape and a single 3D solid.
pub struct EditorSession {
    config: EditorConfig,
    mode: EditorMode,
    kind: Option<ShapeKind>,
    params: ShapeParams,
    solid: SolidParams,
    polygon: FreeformPolygon,
    interaction: InteractionState,
    listeners: Vec<(ListenerHandle, Shared<dyn ParameterListener>)>,
    next_listener: usize,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("mode", &self.mode)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .field("solid", &self.solid)
            .field("polygon", &self.polygon)
            .field("interaction", &self.interaction)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Creates a session editing the default rectangle and box.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            mode: EditorMode::TwoD,
            kind: Some(ShapeKind::Rectangle),
            params: ShapeParams::default(),
            solid: SolidParams::default(),
            polygon: FreeformPolygon::new(),
            interaction: InteractionState::default(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Active 2D kind; `None` after an unrecognised selection.
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    pub fn solid(&self) -> &SolidParams {
        &self.solid
    }

    pub fn polygon(&self) -> &FreeformPolygon {
        &self.polygon
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Registers a listener for parameter writes.
    pub fn add_listener(&mut self, listener: Shared<dyn ParameterListener>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((handle, listener));
        handle
    }

    /// Unregisters a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    fn emit(&self, change: ParamChange) {
        for (_, listener) in &self.listeners {
            listener.borrow_mut().on_param_changed(&change);
        }
    }

    fn emit_vertices(&self) {
        for (_, listener) in &self.listeners {
            listener
                .borrow_mut()
                .on_vertices_changed(self.polygon.vertices());
        }
    }

    // ===== Mode and kind =====

    /// Switches between the 2D and 3D editors. Returns `false` when `mode`
    /// was already active.
    pub fn set_mode(&mut self, mode: EditorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        info!("Switching editor mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.interaction.dragged_anchor = None;
        true
    }

    /// Makes `kind` the active 2D shape.
    ///
    /// Switching to freeform with no vertices seeds the polygon from the
    /// current rectangle bounds.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        debug!("Selecting shape kind {}", kind);
        self.kind = Some(kind);
        self.interaction.dragged_anchor = None;

        if kind == ShapeKind::Freeform && self.polygon.is_empty() {
            self.polygon = FreeformPolygon::from_rect(
                self.params.position,
                self.params.width(),
                self.params.height(),
            );
            self.emit_vertices();
        }
        self.emit(ParamChange::choice(ParamField::ShapeKind, kind.name()));
    }

    /// Selects the 2D shape by its selection name.
    ///
    /// An unrecognised name leaves the session without an active kind, so
    /// no anchors are offered until a valid kind is selected.
    pub fn select_shape_by_name(&mut self, name: &str) -> Result<ShapeKind, EditorError> {
        match ShapeKind::from_str(name) {
            Ok(kind) => {
                self.set_shape_kind(kind);
                Ok(kind)
            }
            Err(err) => {
                warn!("Unknown shape kind '{}', no anchors will be shown", name);
                self.kind = None;
                self.interaction.dragged_anchor = None;
                Err(err)
            }
        }
    }

    // ===== Anchors and pointer input =====

    /// Anchors of the active 2D shape, recomputed from the parameters.
    ///
    /// Empty in 3D mode and when no kind is active.
    pub fn anchors(&self) -> Anchors {
        match (self.mode, self.kind) {
            (EditorMode::TwoD, Some(kind)) => compute_anchors(
                kind,
                self.params.position.x,
                self.params.position.y,
                self.params.width(),
                self.params.height(),
                AnchorExtras {
                    arc_start: self.params.arc_start,
                    arc_stop: self.params.arc_stop,
                    vertices: self.polygon.vertices(),
                },
            ),
            _ => Anchors::new(),
        }
    }

    /// Handles a press at `p`; `time` is used only for double-click
    /// detection.
    pub fn pointer_pressed(&mut self, p: Point, time: Duration) -> PressOutcome {
        if self.mode != EditorMode::TwoD || !self.config.contains(p.x, p.y) {
            return PressOutcome::Ignored;
        }

        if self.kind == Some(ShapeKind::Freeform)
            && self.interaction.is_double_click(
                p,
                time,
                self.config.double_click_window(),
                self.config.double_click_tolerance,
            )
        {
            self.interaction.clear_click();
            self.interaction.dragged_anchor = None;
            return self.double_click_freeform(p);
        }

        self.interaction.record_click(p, time);

        let anchors = self.anchors();
        match nearest_anchor(&anchors, p, self.config.anchor_hit_radius) {
            Some(index) => {
                debug!("Acquired anchor {} ({})", index, anchors[index].role);
                self.interaction.dragged_anchor = Some(index);
                PressOutcome::Acquired(index)
            }
            None => {
                self.interaction.dragged_anchor = None;
                PressOutcome::Missed
            }
        }
    }

    fn double_click_freeform(&mut self, p: Point) -> PressOutcome {
        let anchors = self.anchors();
        if let Some(index) = nearest_anchor(&anchors, p, self.config.anchor_hit_radius) {
            if let AnchorRole::Vertex(vertex) = anchors[index].role {
                if self.polygon.delete_vertex(vertex) {
                    info!("Deleted vertex {}, {} remain", vertex, self.polygon.len());
                    self.emit_vertices();
                    return PressOutcome::VertexDeleted;
                }
                debug!(
                    "Refusing to delete vertex {}: polygon has only {} vertices",
                    vertex,
                    self.polygon.len()
                );
                return PressOutcome::DoubleClickMissed;
            }
        }

        if let Some(hit) = nearest_edge(self.polygon.vertices(), p, self.config.edge_hit_distance)
        {
            if let Some(at) = self.polygon.insert_vertex(hit.edge_index, hit.point) {
                info!(
                    "Inserted vertex {} at ({:.1}, {:.1})",
                    at, hit.point.x, hit.point.y
                );
                self.emit_vertices();
                return PressOutcome::VertexInserted;
            }
        }

        PressOutcome::DoubleClickMissed
    }

    /// Continues a drag. Returns whether any parameter changed.
    pub fn pointer_moved(&mut self, p: Point) -> bool {
        let Some(index) = self.interaction.dragged_anchor else {
            return false;
        };
        let Some(kind) = self.kind else {
            return false;
        };

        let pointer = p.clamped(self.config.canvas_width, self.config.canvas_height);
        let anchors = self.anchors();
        let Some(anchor) = anchors.get(index) else {
            // the anchor list shrank under the drag
            self.interaction.dragged_anchor = None;
            return false;
        };

        let update = inverse_map(kind, anchor.role, pointer, self.params.position);
        self.apply_update(&update)
    }

    /// Ends any drag.
    pub fn pointer_released(&mut self) {
        self.interaction.dragged_anchor = None;
    }

    /// Dispatches a mouse event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<PressOutcome> {
        match event.phase {
            PointerPhase::Down => Some(self.pointer_pressed(event.position, event.time)),
            PointerPhase::Move => {
                self.pointer_moved(event.position);
                None
            }
            PointerPhase::Up => {
                self.pointer_released();
                None
            }
        }
    }

    /// Dispatches a touch event through the pointer path using the first
    /// touch point.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Option<PressOutcome> {
        event.to_pointer().and_then(|pointer| self.handle_pointer(pointer))
    }

    /// Writes a drag result into the parameters and mirrors every changed
    /// field. Returns whether anything changed.
    pub fn apply_update(&mut self, update: &DragUpdate) -> bool {
        let mut changed = false;

        if let Some(position) = update.position {
            self.params.position = position;
            self.emit(ParamChange::number(ParamField::PosX, position.x));
            self.emit(ParamChange::number(ParamField::PosY, position.y));
            changed = true;
        }
        if let Some(width) = update.width {
            let stored = self.params.set_width(width);
            self.emit(ParamChange::number(ParamField::Width, stored));
            changed = true;
        }
        if let Some(height) = update.height {
            let stored = self.params.set_height(height);
            self.emit(ParamChange::number(ParamField::Height, stored));
            changed = true;
        }
        if let Some(angle) = update.arc_start {
            self.params.arc_start = angle;
            self.emit(ParamChange::number(ParamField::ArcStart, angle));
            changed = true;
        }
        if let Some(angle) = update.arc_stop {
            self.params.arc_stop = angle;
            self.emit(ParamChange::number(ParamField::ArcStop, angle));
            changed = true;
        }
        if let Some((index, point)) = update.vertex {
            if self.polygon.move_vertex(index, point) {
                self.emit_vertices();
                changed = true;
            }
        }

        changed
    }

    /// Replaces the polygon with the corners of the current rectangle bounds.
    pub fn reset_freeform(&mut self) {
        self.polygon.reset_to_rect(
            self.params.position,
            self.params.width(),
            self.params.height(),
        );
        info!("Reset free-form polygon to rectangle bounds");
        self.emit_vertices();
    }

    // ===== 2D setters =====

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.apply_update(&DragUpdate {
            position: Some(Point::new(x, y)),
            ..DragUpdate::default()
        });
    }

    pub fn set_width(&mut self, width: f64) {
        let stored = self.params.set_width(width);
        self.emit(ParamChange::number(ParamField::Width, stored));
    }

    pub fn set_height(&mut self, height: f64) {
        let stored = self.params.set_height(height);
        self.emit(ParamChange::number(ParamField::Height, stored));
    }

    /// Slider angles are stored as given; only handle drags normalise.
    pub fn set_arc_start(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            warn!("Ignoring non-finite arc start {}", degrees);
            return;
        }
        self.params.arc_start = degrees;
        self.emit(ParamChange::number(ParamField::ArcStart, degrees));
    }

    pub fn set_arc_stop(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            warn!("Ignoring non-finite arc stop {}", degrees);
            return;
        }
        self.params.arc_stop = degrees;
        self.emit(ParamChange::number(ParamField::ArcStop, degrees));
    }

    pub fn set_arc_mode(&mut self, mode: ArcMode) {
        self.params.arc_mode = mode;
        self.emit(ParamChange::choice(ParamField::ArcMode, mode.to_string()));
    }

    pub fn set_fill(&mut self, color: Color) {
        self.params.style.fill = color;
        self.emit(ParamChange::color(ParamField::FillColor, color));
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.params.style.stroke = color;
        self.emit(ParamChange::color(ParamField::StrokeColor, color));
    }

    pub fn set_stroke_weight(&mut self, weight: f64) {
        self.params.style.stroke_weight = weight.max(0.0);
        self.emit(ParamChange::number(
            ParamField::StrokeWeight,
            self.params.style.stroke_weight,
        ));
    }

    // ===== 3D setters =====

    pub fn set_solid_kind(&mut self, kind: SolidKind) {
        debug!("Selecting solid kind {}", kind);
        self.solid.kind = kind;
        self.emit(ParamChange::choice(ParamField::SolidKind, kind.name()));
    }

    pub fn set_solid_position(&mut self, position: Point3) {
        self.solid.position = position;
        self.emit(ParamChange::number(ParamField::SolidPosX, position.x));
        self.emit(ParamChange::number(ParamField::SolidPosY, position.y));
        self.emit(ParamChange::number(ParamField::SolidPosZ, position.z));
    }

    /// Writes solid dimension `index` (0..3); other indices are ignored.
    pub fn set_solid_dimension(&mut self, index: usize, value: f64) {
        let field = match index {
            0 => ParamField::SolidDim1,
            1 => ParamField::SolidDim2,
            2 => ParamField::SolidDim3,
            _ => return,
        };
        if let Some(stored) = self.solid.set_dimension(index, value) {
            self.emit(ParamChange::number(field, stored));
        }
    }

    /// Writes the rotation about `axis` (0 = x, 1 = y, 2 = z) in degrees.
    pub fn set_rotation(&mut self, axis: usize, degrees: f64) {
        let field = match axis {
            0 => ParamField::RotX,
            1 => ParamField::RotY,
            2 => ParamField::RotZ,
            _ => return,
        };
        self.solid.rotation[axis] = degrees;
        self.emit(ParamChange::number(field, degrees));
    }

    pub fn set_material_kind(&mut self, kind: MaterialKind) {
        self.solid.material.kind = kind;
        self.emit(ParamChange::choice(ParamField::MaterialType, kind.to_string()));
    }

    pub fn set_material_color(&mut self, color: Color) {
        self.solid.material.color = color;
        self.emit(ParamChange::color(ParamField::MaterialColor, color));
    }

    pub fn set_shininess(&mut self, shininess: f64) {
        self.solid.material.shininess = shininess.max(0.0);
        self.emit(ParamChange::number(
            ParamField::Shininess,
            self.solid.material.shininess,
        ));
    }

    pub fn set_lighting_enabled(&mut self, enabled: bool) {
        self.solid.lighting.enabled = enabled;
        self.emit(ParamChange::flag(ParamField::LightingEnabled, enabled));
    }

    pub fn set_ambient_color(&mut self, color: Color) {
        self.solid.lighting.ambient = color;
        self.emit(ParamChange::color(ParamField::AmbientColor, color));
    }

    pub fn set_directional_color(&mut self, color: Color) {
        self.solid.lighting.directional = color;
        self.emit(ParamChange::color(ParamField::DirectionalColor, color));
    }

    pub fn set_solid_stroke_enabled(&mut self, enabled: bool) {
        self.solid.stroke.enabled = enabled;
        self.emit(ParamChange::flag(ParamField::SolidStrokeEnabled, enabled));
    }

    pub fn set_solid_stroke_color(&mut self, color: Color) {
        self.solid.stroke.color = color;
        self.emit(ParamChange::color(ParamField::SolidStrokeColor, color));
    }

    // ===== Generic slider input =====

    /// Applies a control write addressed by field, as a UI would after a
    /// slider, picker or checkbox changed.
    pub fn set_param(&mut self, field: ParamField, value: &ParamValue) -> Result<(), EditorError> {
        match field {
            ParamField::ShapeKind => {
                self.select_shape_by_name(choice(field, value)?)?;
            }
            ParamField::PosX => {
                let x = number(field, value)?;
                self.set_position(x, self.params.position.y);
            }
            ParamField::PosY => {
                let y = number(field, value)?;
                self.set_position(self.params.position.x, y);
            }
            ParamField::Width => self.set_width(number(field, value)?),
            ParamField::Height => self.set_height(number(field, value)?),
            ParamField::FillColor => self.set_fill(color(field, value)?),
            ParamField::StrokeColor => self.set_stroke(color(field, value)?),
            ParamField::StrokeWeight => self.set_stroke_weight(number(field, value)?),
            ParamField::ArcStart => self.set_arc_start(number(field, value)?),
            ParamField::ArcStop => self.set_arc_stop(number(field, value)?),
            ParamField::ArcMode => self.set_arc_mode(choice(field, value)?.parse()?),
            ParamField::SolidKind => self.set_solid_kind(choice(field, value)?.parse()?),
            ParamField::SolidPosX | ParamField::SolidPosY | ParamField::SolidPosZ => {
                let v = number(field, value)?;
                let mut position = self.solid.position;
                match field {
                    ParamField::SolidPosX => position.x = v,
                    ParamField::SolidPosY => position.y = v,
                    _ => position.z = v,
                }
                self.set_solid_position(position);
            }
            ParamField::SolidDim1 => self.set_solid_dimension(0, number(field, value)?),
            ParamField::SolidDim2 => self.set_solid_dimension(1, number(field, value)?),
            ParamField::SolidDim3 => self.set_solid_dimension(2, number(field, value)?),
            ParamField::RotX => self.set_rotation(0, number(field, value)?),
            ParamField::RotY => self.set_rotation(1, number(field, value)?),
            ParamField::RotZ => self.set_rotation(2, number(field, value)?),
            ParamField::MaterialType => self.set_material_kind(choice(field, value)?.parse()?),
            ParamField::MaterialColor => self.set_material_color(color(field, value)?),
            ParamField::Shininess => self.set_shininess(number(field, value)?),
            ParamField::LightingEnabled => self.set_lighting_enabled(flag(field, value)?),
            ParamField::AmbientColor => self.set_ambient_color(color(field, value)?),
            ParamField::DirectionalColor => self.set_directional_color(color(field, value)?),
            ParamField::SolidStrokeEnabled => self.set_solid_stroke_enabled(flag(field, value)?),
            ParamField::SolidStrokeColor => self.set_solid_stroke_color(color(field, value)?),
        }
        Ok(())
    }
}

fn invalid(field: ParamField, reason: impl Into<String>) -> EditorError {
    EditorError::InvalidParameter {
        field: field.control_id().to_string(),
        reason: reason.into(),
    }
}

fn number(field: ParamField, value: &ParamValue) -> Result<f64, EditorError> {
    match value {
        ParamValue::Number(n) if n.is_finite() => Ok(*n),
        ParamValue::Number(_) => Err(invalid(field, "value is not finite")),
        _ => Err(invalid(field, "expected a number")),
    }
}

fn color(field: ParamField, value: &ParamValue) -> Result<Color, EditorError> {
    match value {
        ParamValue::Color(c) => Ok(*c),
        ParamValue::Choice(s) => s.parse(),
        _ => Err(invalid(field, "expected a colour")),
    }
}

fn flag(field: ParamField, value: &ParamValue) -> Result<bool, EditorError> {
    match value {
        ParamValue::Bool(b) => Ok(*b),
        _ => Err(invalid(field, "expected true or false")),
    }
}

fn choice(field: ParamField, value: &ParamValue) -> Result<&str, EditorError> {
    match value {
        ParamValue::Choice(s) => Ok(s),
        _ => Err(invalid(field, "expected a selection name")),
    }
}
