//! 3D solid parameters.
//!
//! Solids have no anchors; they are edited through sliders only and drawn
//! by the 3D backend from a [`SolidPrimitive`] and a model matrix.

use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shapekit_core::{Color, EditorError, Point3};

use super::clamp_dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    #[default]
    Box,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Plane,
}

impl SolidKind {
    pub const ALL: [SolidKind; 6] = [
        SolidKind::Box,
        SolidKind::Sphere,
        SolidKind::Cylinder,
        SolidKind::Cone,
        SolidKind::Torus,
        SolidKind::Plane,
    ];

    /// Labels of the meaningful dimension sliders, in slider order.
    pub fn dimension_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Box => &["Width", "Height", "Depth"],
            Self::Sphere => &["Radius"],
            Self::Cylinder | Self::Cone => &["Radius", "Height"],
            Self::Torus => &["Radius", "Tube Radius"],
            Self::Plane => &["Width", "Height"],
        }
    }

    pub fn dimension_count(&self) -> usize {
        self.dimension_labels().len()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Torus => "torus",
            Self::Plane => "plane",
        }
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolidKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| EditorError::UnknownSolidKind {
                name: s.to_string(),
            })
    }
}

/// Surface material of a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Colour derived from surface normals
    #[default]
    Normal,
    Ambient,
    Specular,
    Emissive,
}

impl MaterialKind {
    /// Whether the material colour picker applies.
    pub fn uses_color(&self) -> bool {
        *self != Self::Normal
    }

    /// Whether the shininess slider applies.
    pub fn uses_shininess(&self) -> bool {
        *self == Self::Specular
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Ambient => write!(f, "ambient"),
            Self::Specular => write!(f, "specular"),
            Self::Emissive => write!(f, "emissive"),
        }
    }
}

impl FromStr for MaterialKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "ambient" => Ok(Self::Ambient),
            "specular" => Ok(Self::Specular),
            "emissive" => Ok(Self::Emissive),
            _ => Err(EditorError::UnknownMaterial {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Normal,
            color: Color::rgb(0x4a, 0x90, 0xd9),
            shininess: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub enabled: bool,
    pub ambient: Color,
    pub directional: Color,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            enabled: true,
            ambient: Color::rgb(0x40, 0x40, 0x40),
            directional: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidStroke {
    pub enabled: bool,
    pub color: Color,
}

impl Default for SolidStroke {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::rgb(0x33, 0x33, 0x33),
        }
    }
}

/// The draw call a 3D backend issues for the current solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolidPrimitive {
    Box { width: f64, height: f64, depth: f64 },
    Sphere { radius: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { radius: f64, height: f64 },
    Torus { radius: f64, tube_radius: f64 },
    Plane { width: f64, height: f64 },
}

/// Parameters of the 3D solid being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidParams {
    pub kind: SolidKind,
    pub position: Point3,
    dimensions: [f64; 3],
    /// Rotation about x, y and z in degrees
    pub rotation: [f64; 3],
    pub material: Material,
    pub lighting: Lighting,
    pub stroke: SolidStroke,
}

impl Default for SolidParams {
    fn default() -> Self {
        Self {
            kind: SolidKind::Box,
            position: Point3::default(),
            dimensions: [100.0, 100.0, 100.0],
            rotation: [0.0; 3],
            material: Material::default(),
            lighting: Lighting::default(),
            stroke: SolidStroke::default(),
        }
    }
}

impl SolidParams {
    pub fn dimensions(&self) -> [f64; 3] {
        self.dimensions
    }

    /// Writes dimension `index` (0..3), clamped. Out-of-range indices are
    /// ignored and return `None`.
    pub fn set_dimension(&mut self, index: usize, value: f64) -> Option<f64> {
        let slot = self.dimensions.get_mut(index)?;
        *slot = clamp_dimension(value);
        Some(*slot)
    }

    pub fn primitive(&self) -> SolidPrimitive {
        let [d1, d2, d3] = self.dimensions;
        match self.kind {
            SolidKind::Box => SolidPrimitive::Box {
                width: d1,
                height: d2,
                depth: d3,
            },
            SolidKind::Sphere => SolidPrimitive::Sphere { radius: d1 },
            SolidKind::Cylinder => SolidPrimitive::Cylinder {
                radius: d1,
                height: d2,
            },
            SolidKind::Cone => SolidPrimitive::Cone {
                radius: d1,
                height: d2,
            },
            SolidKind::Torus => SolidPrimitive::Torus {
                radius: d1,
                tube_radius: d2,
            },
            SolidKind::Plane => SolidPrimitive::Plane {
                width: d1,
                height: d2,
            },
        }
    }

    /// Translation followed by rotations about x, then y, then z.
    pub fn model_matrix(&self) -> Matrix4<f64> {
        let [rx, ry, rz] = self.rotation;
        let translation = Matrix4::new_translation(&Vector3::new(
            self.position.x,
            self.position.y,
            self.position.z,
        ));
        let rot_x = Matrix4::new_rotation(Vector3::new(rx.to_radians(), 0.0, 0.0));
        let rot_y = Matrix4::new_rotation(Vector3::new(0.0, ry.to_radians(), 0.0));
        let rot_z = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rz.to_radians()));
        translation * rot_x * rot_y * rot_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3 as NPoint3;

    #[test]
    fn test_dimension_labels() {
        assert_eq!(SolidKind::Box.dimension_labels(), ["Width", "Height", "Depth"]);
        assert_eq!(SolidKind::Sphere.dimension_count(), 1);
        assert_eq!(SolidKind::Cylinder.dimension_labels(), ["Radius", "Height"]);
        assert_eq!(SolidKind::Cone.dimension_labels(), ["Radius", "Height"]);
        assert_eq!(SolidKind::Torus.dimension_labels(), ["Radius", "Tube Radius"]);
        assert_eq!(SolidKind::Plane.dimension_labels(), ["Width", "Height"]);
    }

    #[test]
    fn test_material_controls() {
        assert!(!MaterialKind::Normal.uses_color());
        assert!(!MaterialKind::Normal.uses_shininess());
        assert_eq!(MaterialKind::default(), MaterialKind::Normal);
        assert!(MaterialKind::Ambient.uses_color());
        assert!(!MaterialKind::Ambient.uses_shininess());
        assert!(MaterialKind::Specular.uses_color());
        assert!(MaterialKind::Specular.uses_shininess());
        assert!(MaterialKind::Emissive.uses_color());
        assert!(!MaterialKind::Emissive.uses_shininess());
    }

    #[test]
    fn test_set_dimension_clamps() {
        let mut params = SolidParams::default();
        assert_eq!(params.set_dimension(1, 0.0), Some(1.0));
        assert_eq!(params.set_dimension(3, 50.0), None);
        assert_eq!(params.dimensions(), [100.0, 1.0, 100.0]);
    }

    #[test]
    fn test_primitive_follows_kind() {
        let mut params = SolidParams::default();
        params.kind = SolidKind::Torus;
        params.set_dimension(0, 80.0);
        params.set_dimension(1, 20.0);
        assert_eq!(
            params.primitive(),
            SolidPrimitive::Torus {
                radius: 80.0,
                tube_radius: 20.0
            }
        );
    }

    #[test]
    fn test_model_matrix_translation_and_rotation() {
        let mut params = SolidParams::default();
        params.position = Point3::new(10.0, -5.0, 2.0);
        params.rotation = [0.0, 0.0, 90.0];

        let p = params.model_matrix().transform_point(&NPoint3::new(1.0, 0.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - -4.0).abs() < 1e-9);
        assert!((p.z - 2.0).abs() < 1e-9);
    }
}
