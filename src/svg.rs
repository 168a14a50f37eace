//! Scene -> SVG document.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::scene::{Element, Scene};

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}

pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif">"#,
        fmt_num(scene.width),
        fmt_num(scene.height)
    );

    for element in &scene.elements {
        match element {
            Element::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    fmt_num(*x1),
                    fmt_num(*y1),
                    fmt_num(*x2),
                    fmt_num(*y2),
                    stroke,
                    fmt_num(*stroke_width)
                );
            }
            Element::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let stroke_attr = match stroke {
                    Some(s) => format!(r#" stroke="{}""#, s),
                    None => String::new(),
                };
                let _ = writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                    fmt_num(*x),
                    fmt_num(*y),
                    fmt_num(*width),
                    fmt_num(*height),
                    fill,
                    stroke_attr
                );
            }
            Element::Polyline {
                points,
                stroke,
                stroke_width,
            } => {
                let coords: Vec<String> = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                    .collect();
                let _ = writeln!(
                    out,
                    r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    coords.join(" "),
                    stroke,
                    fmt_num(*stroke_width)
                );
            }
            Element::Text {
                x,
                y,
                content,
                size,
                anchor,
                bold,
                rotate,
            } => {
                let weight = if *bold { r#" font-weight="bold""# } else { "" };
                let transform = match rotate {
                    Some(deg) => format!(
                        r#" transform="rotate({} {} {})""#,
                        fmt_num(*deg),
                        fmt_num(*x),
                        fmt_num(*y)
                    ),
                    None => String::new(),
                };
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{}"{}{}>{}</text>"#,
                    fmt_num(*x),
                    fmt_num(*y),
                    fmt_num(*size),
                    anchor.as_svg(),
                    weight,
                    transform,
                    escape_text(content)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

pub fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    fs::write(path, render_scene(scene)).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TextAnchor;

    #[test]
    fn test_document_structure() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.line(0.0, 0.0, 10.0, 10.0, "black", 1.0);
        let svg = render_scene(&scene);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="10" y2="10" stroke="black""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.text(1.0, 2.0, "a < b & c > d", 12.0, TextAnchor::Start);
        let svg = render_scene(&scene);
        assert!(svg.contains("a &lt; b &amp; c &gt; d"));
        assert!(!svg.contains("a < b"));
    }

    #[test]
    fn test_rotated_text_transform() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.text_rotated(5.0, 6.0, "tick", 12.0, TextAnchor::End, -25.0);
        let svg = render_scene(&scene);
        assert!(svg.contains(r#"transform="rotate(-25 5 6)""#));
    }

    #[test]
    fn test_rect_without_stroke_has_no_stroke_attr() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.rect(0.0, 0.0, 4.0, 4.0, "#4e79a7", None);
        let svg = render_scene(&scene);
        assert!(svg.contains(r##"fill="#4e79a7"/>"##));
        assert!(!svg.contains(r##"stroke="#4e79a7""##));
    }
}
