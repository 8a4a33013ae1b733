//! 3D solid parameters driven through the session.

use nalgebra::Point3 as NPoint3;
use shapekit_core::{shared, Color, ParamField, ParamValue, Point3};
use shapekit_designer::{
    ControlMirror, EditorSession, MaterialKind, SolidKind, SolidPrimitive,
};

#[test]
fn test_solid_defaults() {
    let session = EditorSession::default();
    let solid = session.solid();
    assert_eq!(solid.kind, SolidKind::Box);
    assert_eq!(solid.dimensions(), [100.0, 100.0, 100.0]);
    assert_eq!(solid.material.kind, MaterialKind::Normal);
    assert_eq!(solid.material.shininess, 20.0);
    assert!(solid.lighting.enabled);
    assert_eq!(solid.lighting.ambient, Color::rgb(0x40, 0x40, 0x40));
    assert!(!solid.stroke.enabled);
}

#[test]
fn test_solid_sliders_mirror() {
    let mut session = EditorSession::default();
    let mirror = shared(ControlMirror::new());
    session.add_listener(mirror.clone());

    session
        .set_param(ParamField::SolidKind, &ParamValue::Choice("cylinder".into()))
        .unwrap();
    session
        .set_param(ParamField::SolidDim1, &ParamValue::Number(30.0))
        .unwrap();
    session
        .set_param(ParamField::SolidDim2, &ParamValue::Number(0.0))
        .unwrap();
    session
        .set_param(ParamField::RotY, &ParamValue::Number(45.0))
        .unwrap();
    session
        .set_param(ParamField::LightingEnabled, &ParamValue::Bool(false))
        .unwrap();

    assert_eq!(
        session.solid().primitive(),
        SolidPrimitive::Cylinder {
            radius: 30.0,
            height: 1.0
        }
    );
    assert!(!session.solid().lighting.enabled);

    let mirror = mirror.borrow();
    assert_eq!(mirror.text("shape-select-3d"), Some("cylinder"));
    assert_eq!(mirror.value("dim2-3d"), Some(1.0));
    assert_eq!(mirror.text("rot-y-3d"), Some("45\u{00B0}"));
    assert_eq!(mirror.text("lighting-enabled-3d"), Some("false"));
}

#[test]
fn test_unknown_solid_kind_is_rejected() {
    let mut session = EditorSession::default();
    let result = session.set_param(ParamField::SolidKind, &ParamValue::Choice("pyramid".into()));
    assert!(result.is_err());
    assert_eq!(session.solid().kind, SolidKind::Box);
}

#[test]
fn test_model_matrix_rotation_order() {
    let mut session = EditorSession::default();
    session.set_rotation(0, 90.0);
    session.set_rotation(1, 90.0);

    // Rx * Ry applied to +z: Ry maps +z to +x, Rx leaves +x alone
    let p = session
        .solid()
        .model_matrix()
        .transform_point(&NPoint3::new(0.0, 0.0, 1.0));
    assert!((p.x - 1.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
    assert!(p.z.abs() < 1e-9);

    session.set_solid_position(Point3::new(5.0, 0.0, 0.0));
    let p = session
        .solid()
        .model_matrix()
        .transform_point(&NPoint3::new(0.0, 0.0, 0.0));
    assert!((p.x - 5.0).abs() < 1e-9);
}
