// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, OutputConfig, RenderConfig, WalkConfig};

use crate::error::Result;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wordgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the working directory, falling back to
    /// defaults when it is missing or invalid.
    #[must_use]
    pub fn load() -> Self {
        io::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Loads an explicitly named config file.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::read_config(path)
    }

    /// Parses TOML text into a config.
    ///
    /// # Errors
    /// Returns the parser message if the text is not a valid config.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        io::parse_toml(content)
    }

    /// Checks that the diagram geometry is usable.
    ///
    /// # Errors
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let r = &self.render;
        if r.width == 0 || r.height == 0 {
            return Err("render.width and render.height must be positive".to_string());
        }
        if !positive(r.radius) || !positive(r.node_radius) {
            return Err("render.radius and render.node_radius must be positive".to_string());
        }
        if r.arrow_length < 0.0 {
            return Err("render.arrow_length must not be negative".to_string());
        }
        Ok(())
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        io::save_to_file(self, path)
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let c = Config::default();
        assert_eq!(c.render.width, 5120);
        assert_eq!(c.render.height, 3200);
        assert!((c.render.radius - 1200.0).abs() < f64::EPSILON);
        assert_eq!(c.walk.seed, None);
        assert_eq!(c.output.svg_path, "graph.svg");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = Config::parse_toml("[render]\nwidth = 800\n[walk]\nseed = 42\n");
        let c = c.unwrap_or_default();
        assert_eq!(c.render.width, 800);
        assert_eq!(c.render.height, 3200);
        assert_eq!(c.walk.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_zero_canvas() {
        let mut c = Config::default();
        c.render.width = 0;
        assert!(c.validate().is_err());
        c.render.width = 10;
        c.render.radius = 0.0;
        assert!(c.validate().is_err());
    }
}
