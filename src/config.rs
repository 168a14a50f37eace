//! Static chart configuration: dataset filenames, canvas layouts and
//! the post-type palette.

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Canvas size and margins for one chart. `width`/`height` are the
/// inner plot area; the SVG canvas adds the margins back.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Layout {
    fn new(canvas_width: f64, canvas_height: f64, margin: Margin) -> Self {
        Self {
            width: canvas_width - margin.left - margin.right,
            height: canvas_height - margin.top - margin.bottom,
            margin,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn canvas_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }
}

pub fn boxplot_layout() -> Layout {
    Layout::new(
        700.0,
        400.0,
        Margin {
            top: 60.0,
            right: 30.0,
            bottom: 90.0,
            left: 60.0,
        },
    )
}

// Wider right margin leaves room for the legend.
pub fn bar_layout() -> Layout {
    Layout::new(
        600.0,
        400.0,
        Margin {
            top: 60.0,
            right: 140.0,
            bottom: 90.0,
            left: 60.0,
        },
    )
}

pub fn line_layout() -> Layout {
    Layout::new(
        700.0,
        400.0,
        Margin {
            top: 60.0,
            right: 30.0,
            bottom: 130.0,
            left: 80.0,
        },
    )
}

pub fn post_type_palette() -> &'static [&'static str] {
    &["#4e79a7", "#f28e2b", "#76b7b2"]
}

pub const LIKES_DATASET: &str = "socialMedia.csv";
pub const AVG_DATASET: &str = "SocialMediaAvg.csv";
pub const TIME_DATASET: &str = "SocialMediaTime.csv";

pub const BOXPLOT_OUTPUT: &str = "boxplot.svg";
pub const BAR_OUTPUT: &str = "barplot.svg";
pub const LINE_OUTPUT: &str = "lineplot.svg";
