mod args;
mod charts;
mod config;
mod error;
mod io_utils;
mod model;
mod quantile;
mod report;
mod scale;
mod scene;
mod summary;
mod svg;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;

use args::Args;
use charts::{build_bar_scene, build_boxplot_scene, build_line_scene};
use config::{
    AVG_DATASET, BAR_OUTPUT, BOXPLOT_OUTPUT, LIKES_DATASET, LINE_OUTPUT, TIME_DATASET,
};
use io_utils::{find_dataset, load_avg_records, load_likes_samples, load_time_records};
use report::build_summary_table;
use summary::summarize;
use svg::write_scene;

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.data_path.exists() {
        return Err(anyhow!("data path not found: {}", args.data_path.display()));
    }
    if !(args.y_padding.is_finite() && args.y_padding >= 0.0) {
        return Err(anyhow!("--y-padding must be a non-negative number"));
    }
    fs::create_dir_all(&args.out_path)
        .with_context(|| format!("create {}", args.out_path.display()))?;

    let likes_path = find_dataset(&args.data_path, LIKES_DATASET)?;
    let avg_path = find_dataset(&args.data_path, AVG_DATASET)?;
    let time_path = find_dataset(&args.data_path, TIME_DATASET)?;

    let samples = load_likes_samples(&likes_path)?;
    let avg_records = load_avg_records(&avg_path)?;
    let time_records = load_time_records(&time_path)?;
    println!("{} like samples loaded", samples.len());
    println!("{} platform/post-type averages loaded", avg_records.len());
    println!("{} daily averages loaded", time_records.len());

    let summaries = summarize(&samples)?;
    let y_max = samples.iter().map(|s| s.value).fold(0.0, f64::max);

    let boxplot = build_boxplot_scene(&summaries, y_max, args.y_padding);
    write_scene(&args.out_path.join(BOXPLOT_OUTPUT), &boxplot)?;
    let bars = build_bar_scene(&avg_records);
    write_scene(&args.out_path.join(BAR_OUTPUT), &bars)?;
    let line = build_line_scene(&time_records);
    write_scene(&args.out_path.join(LINE_OUTPUT), &line)?;
    println!("3 charts written to {}", args.out_path.display());

    if let Some(json_path) = &args.json {
        let json = serde_json::to_string_pretty(&summaries)?;
        fs::write(json_path, json).with_context(|| format!("write {}", json_path.display()))?;
        println!("summary mapping written to {}", json_path.display());
    }

    build_summary_table(&summaries).printstd();
    Ok(())
}
