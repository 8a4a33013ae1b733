//! Scripted input replay.
//!
//! A script is a JSON array of [`ScriptEvent`]s fed to a fresh session in
//! order. The resulting parameters, polygon and mirrored control texts are
//! collected in a [`ReplayReport`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use shapekit_core::{shared, ParamField, ParamValue, Point};
use shapekit_designer::{
    Anchor, ControlMirror, EditorMode, PressOutcome, ShapeKind, ShapeParams, SolidParams,
    TouchEvent, TouchPhase,
};
use shapekit_settings::Config;

/// A control value as written in a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<ScriptValue> for ParamValue {
    fn from(value: ScriptValue) -> Self {
        match value {
            ScriptValue::Flag(b) => ParamValue::Bool(b),
            ScriptValue::Number(n) => ParamValue::Number(n),
            ScriptValue::Text(s) => ParamValue::Choice(s),
        }
    }
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Pick the 2D shape kind by name
    SelectKind { name: String },
    /// Write a control, addressed by control id (`pos-x`, `arc-mode`, ...)
    Set { field: String, value: ScriptValue },
    Press { x: f64, y: f64, t_ms: u64 },
    Move { x: f64, y: f64 },
    Release,
    Touch {
        phase: TouchPhase,
        touches: Vec<Point>,
        t_ms: u64,
    },
    ResetFreeform,
    Mode { mode: EditorMode },
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub mode: EditorMode,
    pub kind: Option<ShapeKind>,
    pub params: ShapeParams,
    pub polygon: Vec<Point>,
    pub solid: SolidParams,
    pub anchors: Vec<Anchor>,
    /// Outcome of every press, in script order
    pub presses: Vec<PressOutcome>,
    /// Display text of every control that was written
    pub controls: BTreeMap<String, String>,
}

/// Reads a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid replay script {}", path.display()))
}

/// Runs `events` against a session built from `config`.
pub fn run_script(config: &Config, events: &[ScriptEvent]) -> Result<ReplayReport> {
    let mut session = config.build_session();
    let mirror = shared(ControlMirror::new());
    session.add_listener(mirror.clone());
    let mut presses = Vec::new();

    for (index, event) in events.iter().enumerate() {
        debug!("Replaying event {}: {:?}", index, event);
        match event {
            ScriptEvent::SelectKind { name } => {
                if let Err(err) = session.select_shape_by_name(name) {
                    warn!("Event {}: {}", index, err);
                }
            }
            ScriptEvent::Set { field, value } => {
                let field: ParamField = field
                    .parse()
                    .with_context(|| format!("Event {}: bad control", index))?;
                session
                    .set_param(field, &value.clone().into())
                    .with_context(|| format!("Event {}: cannot set {}", index, field))?;
            }
            ScriptEvent::Press { x, y, t_ms } => {
                let outcome =
                    session.pointer_pressed(Point::new(*x, *y), Duration::from_millis(*t_ms));
                presses.push(outcome);
            }
            ScriptEvent::Move { x, y } => {
                session.pointer_moved(Point::new(*x, *y));
            }
            ScriptEvent::Release => session.pointer_released(),
            ScriptEvent::Touch {
                phase,
                touches,
                t_ms,
            } => {
                let touch = TouchEvent {
                    phase: *phase,
                    touches: touches.clone(),
                    time: Duration::from_millis(*t_ms),
                };
                if let Some(outcome) = session.handle_touch(&touch) {
                    presses.push(outcome);
                }
            }
            ScriptEvent::ResetFreeform => session.reset_freeform(),
            ScriptEvent::Mode { mode } => {
                session.set_mode(*mode);
            }
        }
    }

    let controls = mirror
        .borrow()
        .iter()
        .map(|(id, state)| (id.to_string(), state.text.clone()))
        .collect();

    Ok(ReplayReport {
        mode: session.mode(),
        kind: session.kind(),
        params: session.params().clone(),
        polygon: session.polygon().vertices().to_vec(),
        solid: session.solid().clone(),
        anchors: session.anchors().to_vec(),
        presses,
        controls,
    })
}
