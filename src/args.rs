use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Render social-media CSV datasets as static SVG charts")]
pub struct Args {
    /// Directory containing socialMedia.csv, SocialMediaAvg.csv and
    /// SocialMediaTime.csv (searched recursively, case-insensitive)
    #[arg(short = 'd', long = "data-path")]
    pub data_path: PathBuf,

    /// Output directory for the rendered SVG files
    #[arg(short = 'o', long = "out-path", default_value = "charts")]
    pub out_path: PathBuf,

    /// Fractional headroom added above the boxplot y domain
    #[arg(long = "y-padding", default_value_t = 0.1)]
    pub y_padding: f64,

    /// Also write the per-platform summary mapping as JSON to this path
    #[arg(long = "json")]
    pub json: Option<PathBuf>,
}
