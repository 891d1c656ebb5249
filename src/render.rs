// src/render.rs
//! SVG diagram of a word graph: nodes evenly spaced on a circle, directed
//! edges with a midpoint arrowhead and a weight label.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt::Write;

use crate::config::RenderConfig;
use crate::graph::{WordGraph, WordPath};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positions of every node on the layout circle, in sorted node order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular_layout<'g>(graph: &'g WordGraph, cfg: &RenderConfig) -> Vec<(&'g str, Point)> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return Vec::new();
    }

    let cx = f64::from(cfg.width) / 2.0;
    let cy = f64::from(cfg.height) / 2.0;
    let step = 2.0 * PI / nodes.len() as f64;

    nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            let angle = i as f64 * step;
            let point = Point {
                x: cx + cfg.radius * angle.cos(),
                y: cy + cfg.radius * angle.sin(),
            };
            (node, point)
        })
        .collect()
}

/// Renders the graph as an SVG document. Edges on `highlight` are drawn in
/// the highlight colour.
#[must_use]
pub fn render_svg(graph: &WordGraph, cfg: &RenderConfig, highlight: Option<&WordPath>) -> String {
    let layout = circular_layout(graph, cfg);
    let positions: HashMap<&str, Point> = layout.iter().copied().collect();

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}'>",
        cfg.width, cfg.height
    );

    for (src, dest, weight) in graph.edges() {
        let (Some(&from), Some(&to)) = (positions.get(src), positions.get(dest)) else {
            continue;
        };
        let on_path = highlight.is_some_and(|p| p.contains_edge(src, dest));
        draw_edge(&mut svg, cfg, from, to, weight, on_path);
    }

    for (node, at) in &layout {
        draw_node(&mut svg, cfg, node, *at);
    }

    svg.push_str("</svg>");
    tracing::debug!(
        nodes = layout.len(),
        edges = graph.edge_count(),
        bytes = svg.len(),
        "rendered svg"
    );
    svg
}

fn draw_edge(svg: &mut String, cfg: &RenderConfig, from: Point, to: Point, weight: usize, on_path: bool) {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let mid = Point {
        x: (from.x + to.x) / 2.0,
        y: (from.y + to.y) / 2.0,
    };
    let wing = |offset: f64| Point {
        x: mid.x - cfg.arrow_length * (angle + offset).cos(),
        y: mid.y - cfg.arrow_length * (angle + offset).sin(),
    };
    let left = wing(-PI / 6.0);
    let right = wing(PI / 6.0);

    let (stroke, width) = if on_path {
        (cfg.highlight_stroke.as_str(), 4)
    } else {
        (cfg.edge_stroke.as_str(), 1)
    };

    let _ = write!(
        svg,
        "<line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='{width}'/>",
        from.x,
        from.y,
        to.x,
        to.y,
        escape(stroke)
    );
    let _ = write!(
        svg,
        "<polygon points='{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}' fill='{}'/>",
        mid.x,
        mid.y,
        left.x,
        left.y,
        right.x,
        right.y,
        escape(stroke)
    );
    let _ = write!(
        svg,
        "<text x='{:.2}' y='{:.2}' fill='{}' font-size='{}'>{weight}</text>",
        mid.x + 5.0,
        mid.y - 5.0,
        escape(&cfg.weight_fill),
        cfg.weight_font_size
    );
}

fn draw_node(svg: &mut String, cfg: &RenderConfig, label: &str, at: Point) {
    let _ = write!(
        svg,
        "<circle cx='{:.2}' cy='{:.2}' r='{:.2}' fill='{}' stroke='{}'/>",
        at.x,
        at.y,
        cfg.node_radius,
        escape(&cfg.node_fill),
        escape(&cfg.edge_stroke)
    );
    let _ = write!(
        svg,
        "<text x='{:.2}' y='{:.2}' text-anchor='middle' dy='.3em' font-size='{}'>{}</text>",
        at.x,
        at.y,
        cfg.label_font_size,
        escape(label)
    );
}

/// Embeds an SVG document in a minimal HTML page.
#[must_use]
pub fn wrap_html(svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Word Graph</title>\n</head>\n<body>\n{svg}\n</body>\n</html>"
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
