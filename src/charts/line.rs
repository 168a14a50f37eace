//! Time-series line chart of average likes per date.

use crate::charts::{linear_axis_left, titles, y_axis_label, AXIS_COLOR, TICK_LABEL_SIZE, TICK_LEN};
use crate::config::line_layout;
use crate::model::TimeRecord;
use crate::scale::{LinearScale, PointScale};
use crate::scene::{Scene, TextAnchor};

const LINE_COLOR: &str = "steelblue";

pub fn build_line_scene(records: &[TimeRecord]) -> Scene {
    let layout = line_layout();
    let mut scene = Scene::new(layout.canvas_width(), layout.canvas_height());

    let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();
    let x_scale = PointScale::new(dates, (0.0, layout.width));
    let y_max = records.iter().map(|r| r.avg_likes).fold(0.0, f64::max);
    let y_scale = LinearScale::new((0.0, y_max), (layout.height, 0.0));

    // x axis: one rotated label per date, shifted down and right so the
    // first label is not clipped at the canvas edge
    let baseline = layout.margin.top + layout.height;
    scene.line(
        layout.margin.left,
        baseline,
        layout.margin.left + layout.width,
        baseline,
        AXIS_COLOR,
        1.0,
    );
    for date in x_scale.domain() {
        let x = layout.margin.left + x_scale.position(date).unwrap_or(0.0);
        scene.line(x, baseline, x, baseline + TICK_LEN, AXIS_COLOR, 1.0);
        scene.text_rotated(
            x + 10.0,
            baseline + TICK_LEN + 15.0,
            date,
            TICK_LABEL_SIZE,
            TextAnchor::End,
            -25.0,
        );
    }
    linear_axis_left(&mut scene, &layout, &y_scale, 6);
    titles(
        &mut scene,
        &layout,
        "Trend of Average Likes Over Time",
        "Date",
        30.0,
        layout.margin.top + layout.height + 80.0,
    );
    y_axis_label(&mut scene, &layout, "Average Likes", layout.margin.left - 55.0);

    let points: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| {
            x_scale.position(&r.date).map(|x| {
                (
                    layout.margin.left + x,
                    layout.margin.top + y_scale.position(r.avg_likes),
                )
            })
        })
        .collect();
    scene.polyline(points, LINE_COLOR, 2.0);

    scene
}
