//! Parameter change events and the listener interface.
//!
//! Every write to the editor's parameters, whether it came from a slider or
//! from dragging an anchor, is published as a [`ParamChange`]. UI adapters
//! implement [`ParameterListener`] to keep their controls (value and text
//! mirror) in step with the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;
use crate::types::{Color, Point};

/// Every editable parameter, named after the control that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamField {
    ShapeKind,
    PosX,
    PosY,
    Width,
    Height,
    FillColor,
    StrokeColor,
    StrokeWeight,
    ArcStart,
    ArcStop,
    ArcMode,
    SolidKind,
    SolidPosX,
    SolidPosY,
    SolidPosZ,
    SolidDim1,
    SolidDim2,
    SolidDim3,
    RotX,
    RotY,
    RotZ,
    MaterialType,
    MaterialColor,
    Shininess,
    LightingEnabled,
    AmbientColor,
    DirectionalColor,
    SolidStrokeEnabled,
    SolidStrokeColor,
}

impl ParamField {
    pub const ALL: [ParamField; 29] = [
        ParamField::ShapeKind,
        ParamField::PosX,
        ParamField::PosY,
        ParamField::Width,
        ParamField::Height,
        ParamField::FillColor,
        ParamField::StrokeColor,
        ParamField::StrokeWeight,
        ParamField::ArcStart,
        ParamField::ArcStop,
        ParamField::ArcMode,
        ParamField::SolidKind,
        ParamField::SolidPosX,
        ParamField::SolidPosY,
        ParamField::SolidPosZ,
        ParamField::SolidDim1,
        ParamField::SolidDim2,
        ParamField::SolidDim3,
        ParamField::RotX,
        ParamField::RotY,
        ParamField::RotZ,
        ParamField::MaterialType,
        ParamField::MaterialColor,
        ParamField::Shininess,
        ParamField::LightingEnabled,
        ParamField::AmbientColor,
        ParamField::DirectionalColor,
        ParamField::SolidStrokeEnabled,
        ParamField::SolidStrokeColor,
    ];

    /// The id of the control bound to this field.
    pub fn control_id(&self) -> &'static str {
        match self {
            Self::ShapeKind => "shape-select",
            Self::PosX => "pos-x",
            Self::PosY => "pos-y",
            Self::Width => "dim-w",
            Self::Height => "dim-h",
            Self::FillColor => "fill-color",
            Self::StrokeColor => "stroke-color",
            Self::StrokeWeight => "stroke-weight",
            Self::ArcStart => "arc-start",
            Self::ArcStop => "arc-stop",
            Self::ArcMode => "arc-mode",
            Self::SolidKind => "shape-select-3d",
            Self::SolidPosX => "pos-x-3d",
            Self::SolidPosY => "pos-y-3d",
            Self::SolidPosZ => "pos-z-3d",
            Self::SolidDim1 => "dim1-3d",
            Self::SolidDim2 => "dim2-3d",
            Self::SolidDim3 => "dim3-3d",
            Self::RotX => "rot-x-3d",
            Self::RotY => "rot-y-3d",
            Self::RotZ => "rot-z-3d",
            Self::MaterialType => "material-type-3d",
            Self::MaterialColor => "material-color-3d",
            Self::Shininess => "shininess-3d",
            Self::LightingEnabled => "lighting-enabled-3d",
            Self::AmbientColor => "ambient-color-3d",
            Self::DirectionalColor => "directional-color-3d",
            Self::SolidStrokeEnabled => "stroke-enabled-3d",
            Self::SolidStrokeColor => "stroke-color-3d",
        }
    }

    /// Unit appended to the value in the control's text mirror.
    pub fn display_suffix(&self) -> &'static str {
        match self {
            Self::ArcStart | Self::ArcStop | Self::RotX | Self::RotY | Self::RotZ => "\u{00B0}",
            _ => "",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

impl FromStr for ParamField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.control_id() == s)
            .ok_or_else(|| EditorError::UnknownControl {
                control: s.to_string(),
            })
    }
}

/// The new value of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Number(f64),
    Color(Color),
    Bool(bool),
    Choice(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// A single parameter write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamChange {
    pub field: ParamField,
    pub value: ParamValue,
}

impl ParamChange {
    pub fn number(field: ParamField, value: f64) -> Self {
        Self {
            field,
            value: ParamValue::Number(value),
        }
    }

    pub fn color(field: ParamField, value: Color) -> Self {
        Self {
            field,
            value: ParamValue::Color(value),
        }
    }

    pub fn flag(field: ParamField, value: bool) -> Self {
        Self {
            field,
            value: ParamValue::Bool(value),
        }
    }

    pub fn choice(field: ParamField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: ParamValue::Choice(value.into()),
        }
    }

    /// Text shown next to the control. Numbers are shown at slider
    /// resolution (whole units) followed by the field's unit.
    pub fn display_text(&self) -> String {
        match &self.value {
            ParamValue::Number(n) => format!("{}{}", n.round() as i64, self.field.display_suffix()),
            ParamValue::Color(c) => c.to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Choice(s) => s.clone(),
        }
    }
}

/// Receives parameter writes from an editor session.
///
/// Implement this trait to mirror the session into UI controls. All methods
/// have empty default bodies so adapters override only what they display.
pub trait ParameterListener {
    /// Called after a parameter has been written
    fn on_param_changed(&mut self, _change: &ParamChange) {}

    /// Called after the free-form vertex list has changed
    fn on_vertices_changed(&mut self, _vertices: &[Point]) {}
}
