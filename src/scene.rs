//! Chart scenes as plain data.
//!
//! A `Scene` is the full description of one chart: canvas size plus a
//! flat list of drawing primitives in paint order. Chart builders
//! produce scenes; the SVG writer consumes them. Nothing here draws.

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        stroke: Option<String>,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        anchor: TextAnchor,
        bold: bool,
        /// Rotation in degrees around (x, y).
        rotate: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.elements.push(Element::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.to_string(),
            stroke_width,
        });
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, stroke: Option<&str>) {
        self.elements.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill: fill.to_string(),
            stroke: stroke.map(|s| s.to_string()),
        });
    }

    pub fn polyline(&mut self, points: Vec<(f64, f64)>, stroke: &str, stroke_width: f64) {
        self.elements.push(Element::Polyline {
            points,
            stroke: stroke.to_string(),
            stroke_width,
        });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, size: f64, anchor: TextAnchor) {
        self.elements.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            size,
            anchor,
            bold: false,
            rotate: None,
        });
    }

    pub fn text_rotated(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        anchor: TextAnchor,
        degrees: f64,
    ) {
        self.elements.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            size,
            anchor,
            bold: false,
            rotate: Some(degrees),
        });
    }

    pub fn title(&mut self, x: f64, y: f64, content: &str, size: f64) {
        self.elements.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            size,
            anchor: TextAnchor::Middle,
            bold: true,
            rotate: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_order_is_push_order() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.rect(0.0, 0.0, 5.0, 5.0, "red", None);
        scene.line(0.0, 0.0, 5.0, 5.0, "black", 1.0);
        assert!(matches!(scene.elements[0], Element::Rect { .. }));
        assert!(matches!(scene.elements[1], Element::Line { .. }));
    }

    #[test]
    fn test_title_is_bold_and_centered() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.title(5.0, 1.0, "t", 18.0);
        match &scene.elements[0] {
            Element::Text { bold, anchor, .. } => {
                assert!(*bold);
                assert_eq!(*anchor, TextAnchor::Middle);
            }
            other => panic!("unexpected element {:?}", other),
        }
    }
}
