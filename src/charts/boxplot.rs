//! Side-by-side boxplot of like counts per platform.

use crate::charts::{band_axis_bottom, linear_axis_left, titles, y_axis_label};
use crate::config::boxplot_layout;
use crate::model::GroupSummaries;
use crate::scale::{BandScale, LinearScale};
use crate::scene::Scene;

const BOX_FILL: &str = "lightblue";

/// Builds the boxplot scene from per-platform summaries.
///
/// `y_max` is the maximum over the raw sample values and `y_padding`
/// the fractional headroom added above it, so whiskers never touch the
/// top of the plot area.
pub fn build_boxplot_scene(summaries: &GroupSummaries, y_max: f64, y_padding: f64) -> Scene {
    let layout = boxplot_layout();
    let mut scene = Scene::new(layout.canvas_width(), layout.canvas_height());

    let x_scale = BandScale::new(
        summaries.groups().map(|g| g.to_string()).collect(),
        (0.0, layout.width),
        0.2,
    );
    let y_scale = LinearScale::new((0.0, y_max * (1.0 + y_padding)), (layout.height, 0.0));

    band_axis_bottom(&mut scene, &layout, &x_scale, -25.0);
    linear_axis_left(&mut scene, &layout, &y_scale, 6);
    titles(
        &mut scene,
        &layout,
        "Likes Distribution Across Platforms",
        "Platform",
        30.0,
        layout.margin.top + layout.height + layout.margin.bottom - 40.0,
    );
    y_axis_label(&mut scene, &layout, "Number of Likes", layout.margin.left - 45.0);

    for entry in summaries.entries() {
        let q = &entry.summary;
        let x = layout.margin.left + x_scale.position(&entry.group).unwrap_or(0.0);
        let band = x_scale.bandwidth();
        let y = |v: f64| layout.margin.top + y_scale.position(v);

        // whisker from min to max, then the q1..q3 box, then the median
        scene.line(x + band / 2.0, y(q.min), x + band / 2.0, y(q.max), "black", 1.0);
        scene.rect(x, y(q.q3), band, y(q.q1) - y(q.q3), BOX_FILL, Some("black"));
        scene.line(x, y(q.median), x + band, y(q.median), "black", 2.0);
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;
    use crate::model::Sample;
    use crate::scene::Element;
    use crate::summary::summarize;

    fn scene_for_two_groups() -> (Scene, Layout) {
        let samples = vec![
            Sample::new("TikTok", 10.0),
            Sample::new("TikTok", 30.0),
            Sample::new("TikTok", 20.0),
            Sample::new("Instagram", 5.0),
            Sample::new("Instagram", 15.0),
        ];
        let summaries = summarize(&samples).unwrap();
        (build_boxplot_scene(&summaries, 30.0, 0.1), boxplot_layout())
    }

    #[test]
    fn test_three_geometry_elements_per_group() {
        let (scene, _) = scene_for_two_groups();
        let rects = scene
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Rect { fill, .. } if fill == BOX_FILL))
            .count();
        assert_eq!(rects, 2);

        // median lines are the only stroke-width-2 lines
        let medians = scene
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Line { stroke_width, .. } if *stroke_width == 2.0))
            .count();
        assert_eq!(medians, 2);
    }

    #[test]
    fn test_box_spans_q1_to_q3() {
        let (scene, layout) = scene_for_two_groups();
        // TikTok: min 10, q1 15, median 20, q3 25, max 30; domain [0, 33]
        let y = |v: f64| layout.margin.top + layout.height * (1.0 - v / 33.0);
        let tiktok_box = scene
            .elements
            .iter()
            .find_map(|e| match e {
                Element::Rect { y: ry, height, fill, .. } if fill == BOX_FILL => {
                    Some((*ry, *height))
                }
                _ => None,
            })
            .unwrap();
        assert!((tiktok_box.0 - y(25.0)).abs() < 1e-9);
        assert!((tiktok_box.1 - (y(15.0) - y(25.0))).abs() < 1e-9);
    }

    #[test]
    fn test_geometry_inside_plot_area() {
        let (scene, layout) = scene_for_two_groups();
        for e in &scene.elements {
            if let Element::Rect { x, width, fill, .. } = e {
                if fill == BOX_FILL {
                    assert!(*x >= layout.margin.left - 1e-9);
                    assert!(x + width <= layout.margin.left + layout.width + 1e-9);
                }
            }
        }
    }
}
