//! Control mirror: the UI-side record of every control's value and text.

use std::collections::HashMap;

use shapekit_core::{ParamChange, ParamField, ParamValue, ParameterListener, Point};

/// What one control currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub value: ParamValue,
    /// Text next to the control, e.g. `"45°"`
    pub text: String,
}

/// Keeps a value and display text per control id in step with a session.
///
/// Register it with [`crate::EditorSession::add_listener`]; every slider or
/// drag write then lands here.
#[derive(Debug, Default, Clone)]
pub struct ControlMirror {
    controls: HashMap<&'static str, ControlState>,
    vertices: Vec<Point>,
}

impl ControlMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, control_id: &str) -> Option<&ControlState> {
        self.controls.get(control_id)
    }

    /// Numeric value of a control, if it holds a number.
    pub fn value(&self, control_id: &str) -> Option<f64> {
        self.get(control_id).and_then(|state| state.value.as_number())
    }

    pub fn text(&self, control_id: &str) -> Option<&str> {
        self.get(control_id).map(|state| state.text.as_str())
    }

    pub fn field(&self, field: ParamField) -> Option<&ControlState> {
        self.get(field.control_id())
    }

    /// Last polygon published by the session.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// All mirrored controls, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ControlState)> + '_ {
        self.controls.iter().map(|(id, state)| (*id, state))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ParameterListener for ControlMirror {
    fn on_param_changed(&mut self, change: &ParamChange) {
        self.controls.insert(
            change.field.control_id(),
            ControlState {
                value: change.value.clone(),
                text: change.display_text(),
            },
        );
    }

    fn on_vertices_changed(&mut self, vertices: &[Point]) {
        self.vertices = vertices.to_vec();
    }
}
