//! Grouped bar chart of average likes per platform and post type,
//! with a color legend.

use crate::charts::{band_axis_bottom, linear_axis_left, titles, y_axis_label};
use crate::config::{bar_layout, post_type_palette};
use crate::model::AvgLikesRecord;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Scene, TextAnchor};

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

pub fn build_bar_scene(records: &[AvgLikesRecord]) -> Scene {
    let layout = bar_layout();
    let mut scene = Scene::new(layout.canvas_width(), layout.canvas_height());

    let platforms = distinct_in_order(records.iter().map(|r| r.platform.as_str()));
    let post_types = distinct_in_order(records.iter().map(|r| r.post_type.as_str()));
    let palette = post_type_palette();

    let x0 = BandScale::new(platforms, (0.0, layout.width), 0.2);
    let x1 = BandScale::new(post_types.clone(), (0.0, x0.bandwidth()), 0.05);
    let y_max = records.iter().map(|r| r.avg_likes).fold(0.0, f64::max);
    let y_scale = LinearScale::new((0.0, y_max), (layout.height, 0.0));

    band_axis_bottom(&mut scene, &layout, &x0, -40.0);
    linear_axis_left(&mut scene, &layout, &y_scale, 6);
    titles(
        &mut scene,
        &layout,
        "Average Likes by Platform and Post Type",
        "Platform",
        40.0,
        layout.margin.top + layout.height + layout.margin.bottom - 40.0,
    );
    y_axis_label(&mut scene, &layout, "Average Likes", layout.margin.left - 45.0);

    let baseline = layout.margin.top + layout.height;
    for record in records {
        let (Some(px), Some(tx)) = (x0.position(&record.platform), x1.position(&record.post_type))
        else {
            continue;
        };
        let color_index = post_types
            .iter()
            .position(|t| *t == record.post_type)
            .unwrap_or(0);
        let top = layout.margin.top + y_scale.position(record.avg_likes);
        scene.rect(
            layout.margin.left + px + tx,
            top,
            x1.bandwidth(),
            baseline - top,
            palette[color_index % palette.len()],
            None,
        );
    }

    // legend to the right of the plot area
    let legend_x = layout.margin.left + layout.width + 10.0;
    let legend_y = layout.margin.top + layout.height / 4.0;
    for (i, post_type) in post_types.iter().enumerate() {
        let row_y = legend_y + i as f64 * 25.0;
        scene.rect(legend_x, row_y, 15.0, 15.0, palette[i % palette.len()], None);
        scene.text(legend_x + 25.0, row_y + 12.0, post_type, 14.0, TextAnchor::Start);
    }

    scene
}
