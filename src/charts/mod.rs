//! Scene builders for the three charts.
//!
//! Each builder is a pure function from loaded data (plus scale
//! parameters) to a [`Scene`](crate::scene::Scene); nothing here touches
//! the filesystem.

mod bars;
mod boxplot;
mod line;

pub use bars::build_bar_scene;
pub use boxplot::build_boxplot_scene;
pub use line::build_line_scene;

use crate::config::Layout;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Scene, TextAnchor};

const AXIS_COLOR: &str = "black";
const TICK_LEN: f64 = 6.0;
const TICK_LABEL_SIZE: f64 = 12.0;
const LABEL_SIZE: f64 = 14.0;
const TITLE_SIZE: f64 = 18.0;

/// Bottom axis for a band scale: baseline plus one rotated label per
/// category, centered on its band.
fn band_axis_bottom(scene: &mut Scene, layout: &Layout, scale: &BandScale, rotate_deg: f64) {
    let y = layout.margin.top + layout.height;
    let x0 = layout.margin.left;
    scene.line(x0, y, x0 + layout.width, y, AXIS_COLOR, 1.0);
    for category in scale.domain() {
        let x = x0 + scale.position(category).unwrap_or(0.0) + scale.bandwidth() / 2.0;
        scene.line(x, y, x, y + TICK_LEN, AXIS_COLOR, 1.0);
        scene.text_rotated(
            x,
            y + TICK_LEN + 10.0,
            category,
            TICK_LABEL_SIZE,
            TextAnchor::End,
            rotate_deg,
        );
    }
}

/// Left axis for a linear scale with round-valued tick labels.
fn linear_axis_left(scene: &mut Scene, layout: &Layout, scale: &LinearScale, tick_count: usize) {
    let x = layout.margin.left;
    let y0 = layout.margin.top;
    scene.line(x, y0, x, y0 + layout.height, AXIS_COLOR, 1.0);
    for tick in scale.ticks(tick_count) {
        let y = y0 + scale.position(tick);
        scene.line(x - TICK_LEN, y, x, y, AXIS_COLOR, 1.0);
        scene.text(
            x - TICK_LEN - 3.0,
            y + 4.0,
            &format_tick(tick),
            TICK_LABEL_SIZE,
            TextAnchor::End,
        );
    }
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}

/// Title above the plot area plus the x-axis label below it.
fn titles(scene: &mut Scene, layout: &Layout, title: &str, x_label: &str, title_dy: f64, x_label_y: f64) {
    let cx = layout.margin.left + layout.width / 2.0;
    scene.title(cx, layout.margin.top - title_dy, title, TITLE_SIZE);
    scene.text(cx, x_label_y, x_label, LABEL_SIZE, TextAnchor::Middle);
}

/// Vertical y-axis label, rotated -90 around its anchor.
fn y_axis_label(scene: &mut Scene, layout: &Layout, label: &str, x: f64) {
    scene.text_rotated(
        x,
        layout.margin.top + layout.height / 2.0,
        label,
        LABEL_SIZE,
        TextAnchor::Middle,
        -90.0,
    );
}
