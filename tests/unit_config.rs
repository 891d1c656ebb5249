use std::fs;
use wordgraph_core::config::{Config, RenderConfig};
use wordgraph_core::error::GraphError;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("wordgraph.toml");
    fs::write(&path, "[render]\nwidth = 1024\nheight = 768\n[walk]\nseed = 9").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.render.width, 1024);
    assert_eq!(c.render.height, 768);
    assert_eq!(c.walk.seed, Some(9));
}

#[test]
fn test_defaults() {
    let r = RenderConfig::default();
    assert_eq!(r.width, 5120);
    assert_eq!(r.height, 3200);
    assert_eq!(r.label_font_size, 20);
    assert_eq!(r.weight_font_size, 24);
    assert_eq!(r.node_fill, "lightblue");
}

#[test]
fn test_output_section() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "[output]\nsvg_path = \"out/diagram.svg\"\n").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.output.svg_path, "out/diagram.svg");
    assert_eq!(c.output.html_path, "index.html");
}

#[test]
fn test_malformed_toml_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("bad.toml");
    fs::write(&path, "[render\nwidth = ").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(GraphError::Config { .. })
    ));
}

#[test]
fn test_invalid_geometry_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("zero.toml");
    fs::write(&path, "[render]\nradius = 0.0\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(GraphError::Config { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from(&d.path().join("absent.toml")),
        Err(GraphError::Io { .. })
    ));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("saved.toml");
    let mut c = Config::new();
    c.walk.seed = Some(3);
    c.render.node_fill = "white".to_string();
    c.save(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), c);
}
