use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shapekit_core::{Color, EditorError, Point};

use super::clamp_dimension;

/// How an arc's open side is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArcMode {
    /// Both ends joined to the centre
    #[default]
    Pie,
    /// Ends joined to each other
    Chord,
    /// Ends left open
    Open,
}

impl fmt::Display for ArcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pie => write!(f, "PIE"),
            Self::Chord => write!(f, "CHORD"),
            Self::Open => write!(f, "OPEN"),
        }
    }
}

impl FromStr for ArcMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PIE" => Ok(Self::Pie),
            "CHORD" => Ok(Self::Chord),
            "OPEN" => Ok(Self::Open),
            _ => Err(EditorError::UnknownArcMode {
                name: s.to_string(),
            }),
        }
    }
}

/// Fill and stroke settings of a 2D shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f64,
    pub stroke_enabled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0x4a, 0x90, 0xd9),
            stroke: Color::rgb(0x33, 0x33, 0x33),
            stroke_weight: 2.0,
            stroke_enabled: true,
        }
    }
}

/// Semantic parameters of the 2D shape being edited.
///
/// Width and height are private so every write goes through a clamping
/// setter; they never drop below [`super::MIN_DIMENSION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    /// Shape centre
    pub position: Point,
    width: f64,
    height: f64,
    /// Arc start angle in degrees (0 = +x, 90 = +y)
    pub arc_start: f64,
    /// Arc stop angle in degrees
    pub arc_stop: f64,
    pub arc_mode: ArcMode,
    pub style: Style,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            position: Point::new(200.0, 200.0),
            width: 100.0,
            height: 100.0,
            arc_start: 0.0,
            arc_stop: 90.0,
            arc_mode: ArcMode::Pie,
            style: Style::default(),
        }
    }
}

impl ShapeParams {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            ..Self::default()
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Dimensions in order (width, height).
    pub fn dimensions(&self) -> [f64; 2] {
        [self.width, self.height]
    }

    /// Writes the width, clamped; returns the stored value.
    pub fn set_width(&mut self, width: f64) -> f64 {
        self.width = clamp_dimension(width);
        self.width
    }

    /// Writes the height, clamped; returns the stored value.
    pub fn set_height(&mut self, height: f64) -> f64 {
        self.height = clamp_dimension(height);
        self.height
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.set_width(width);
        self.set_height(height);
    }

    /// Corners of the axis-aligned rectangle centred on `position`,
    /// in the order top-left, top-right, bottom-right, bottom-left.
    pub fn rect_corners(&self) -> [Point; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let Point { x, y } = self.position;
        [
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y - hh),
            Point::new(x + hw, y + hh),
            Point::new(x - hw, y + hh),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_clamped() {
        let mut params = ShapeParams::default();
        assert_eq!(params.set_width(0.0), 1.0);
        assert_eq!(params.set_height(-40.0), 1.0);
        params.set_dimensions(30.0, 0.5);
        assert_eq!(params.dimensions(), [30.0, 1.0]);

        let params = ShapeParams::new(Point::new(0.0, 0.0), -5.0, 12.0);
        assert_eq!(params.width(), 1.0);
        assert_eq!(params.height(), 12.0);
    }

    #[test]
    fn test_rect_corners() {
        let params = ShapeParams::default();
        assert_eq!(
            params.rect_corners(),
            [
                Point::new(150.0, 150.0),
                Point::new(250.0, 150.0),
                Point::new(250.0, 250.0),
                Point::new(150.0, 250.0),
            ]
        );
    }

    #[test]
    fn test_arc_mode_names() {
        assert_eq!("chord".parse::<ArcMode>().unwrap(), ArcMode::Chord);
        assert_eq!(ArcMode::Open.to_string(), "OPEN");
        assert!("WEDGE".parse::<ArcMode>().is_err());
        assert_eq!(ArcMode::default(), ArcMode::Pie);
    }

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.fill.to_string(), "#4a90d9");
        assert_eq!(style.stroke.to_string(), "#333333");
    }
}
