use serde::{Deserialize, Serialize};

/// Diagram geometry and colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Radius of the circle nodes are laid out on.
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
    #[serde(default = "default_label_font")]
    pub label_font_size: u32,
    #[serde(default = "default_weight_font")]
    pub weight_font_size: u32,
    #[serde(default = "default_arrow_length")]
    pub arrow_length: f64,
    #[serde(default = "default_node_fill")]
    pub node_fill: String,
    #[serde(default = "default_edge_stroke")]
    pub edge_stroke: String,
    #[serde(default = "default_weight_fill")]
    pub weight_fill: String,
    #[serde(default = "default_highlight_stroke")]
    pub highlight_stroke: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            radius: default_radius(),
            node_radius: default_node_radius(),
            label_font_size: default_label_font(),
            weight_font_size: default_weight_font(),
            arrow_length: default_arrow_length(),
            node_fill: default_node_fill(),
            edge_stroke: default_edge_stroke(),
            weight_fill: default_weight_fill(),
            highlight_stroke: default_highlight_stroke(),
        }
    }
}

const fn default_width() -> u32 { 5120 }
const fn default_height() -> u32 { 3200 }
const fn default_radius() -> f64 { 1200.0 }
const fn default_node_radius() -> f64 { 40.0 }
const fn default_label_font() -> u32 { 20 }
const fn default_weight_font() -> u32 { 24 }
const fn default_arrow_length() -> f64 { 10.0 }
fn default_node_fill() -> String { "lightblue".to_string() }
fn default_edge_stroke() -> String { "black".to_string() }
fn default_weight_fill() -> String { "red".to_string() }
fn default_highlight_stroke() -> String { "orange".to_string() }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Fixed seed for reproducible walks. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_svg_path")]
    pub svg_path: String,
    #[serde(default = "default_html_path")]
    pub html_path: String,
    #[serde(default = "default_walk_path")]
    pub walk_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_path: default_svg_path(),
            html_path: default_html_path(),
            walk_path: default_walk_path(),
        }
    }
}

fn default_svg_path() -> String { "graph.svg".to_string() }
fn default_html_path() -> String { "index.html".to_string() }
fn default_walk_path() -> String { "random_walk.txt".to_string() }

/// On-disk shape of `wordgraph.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
