//! Integration tests for scene files on disk
//!
//! Scenes are written to the system temp directory, read back, and
//! instantiated into runtime scenes.

use std::path::PathBuf;

use wire4d_core::{
    GeometryError, ObjectTemplate, Scene, SceneFile, SceneLoadError, SceneObject, ShapeTemplate, Style, Color,
    SHAPE_CATALOG,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wire4d_{}_{}.ron", name, std::process::id()))
}

#[test]
fn test_save_then_load_scene() {
    let path = temp_path("save_load");
    let file = SceneFile::new("Saved")
        .with_object(ObjectTemplate::new(ShapeTemplate::Cube { half_size: 1.0 }).with_name("cube"))
        .with_object(
            ObjectTemplate::new(ShapeTemplate::Tesseract { size: 2.0 })
                .with_position([0.0, 0.0, 0.0, 5.0]),
        );

    file.save(&path).unwrap();
    let loaded = SceneFile::load(&path).unwrap();
    assert_eq!(loaded, file);

    let scene = Scene::load(&path).unwrap();
    assert_eq!(scene.name, "Saved");
    assert_eq!(scene.len(), 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_style_override_survives_file() {
    let path = temp_path("style");
    let style = Style::with_line_color(Color::from_rgb8(255, 0, 0));
    let mut template = ObjectTemplate::new(ShapeTemplate::Toroid {
        tube_radius: 1.0,
        ring_radius: 3.0,
        tube_segments: 8,
        ring_segments: 16,
    });
    template.style = Some(style);
    SceneFile::new("Styled").with_object(template).save(&path).unwrap();

    let scene = Scene::load(&path).unwrap();
    match scene.iter().next() {
        Some(SceneObject::Spatial(obj)) => assert_eq!(obj.style, style),
        other => panic!("Expected a 3D toroid, got {:?}", other),
    }

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_reports_parse_errors() {
    let path = temp_path("broken");
    std::fs::write(&path, "SceneFile(name: \"Broken\", objects: [ObjectTemplate(").unwrap();

    let result = Scene::load(&path);
    assert!(matches!(result, Err(SceneLoadError::Parse(_))));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_rejects_cylinder_axis() {
    let path = temp_path("bad_axis");
    std::fs::write(
        &path,
        r#"SceneFile(name: "Bad axis", objects: [ObjectTemplate(shape: ShapeTemplate(type: "Cylinder", axis: 3, radius: 1.0, segments: 8, length: 2.0, caps: true))])"#,
    )
    .unwrap();

    let result = Scene::load(&path);
    assert!(matches!(
        result,
        Err(SceneLoadError::Geometry(GeometryError::InvalidAxis { axis: 3 }))
    ));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_every_catalog_entry_selects() {
    let mut scene = Scene::new("Selector");
    for name in SHAPE_CATALOG {
        scene.select(name).unwrap();
        assert_eq!(scene.len(), 1, "{} did not replace the scene", name);
    }
}
