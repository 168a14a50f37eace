use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::model::{AvgLikesRecord, LikesRecord, Sample, TimeRecord};

/// Finds `file_name` under `data_dir` (case-insensitive, first match in
/// walk order).
pub fn find_dataset(data_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(data_dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matched = entry
            .file_name()
            .to_str()
            .map(|n| n.eq_ignore_ascii_case(file_name))
            .unwrap_or(false);
        if matched {
            matches.push(entry.path().to_path_buf());
        }
    }
    matches.sort();
    matches
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("{} not found under {}", file_name, data_dir.display()))
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut records = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        // +2: header line plus 1-based numbering
        let record: T =
            row.with_context(|| format!("parse {} line {}", path.display(), i + 2))?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(anyhow!("{} contains no data rows", path.display()));
    }
    Ok(records)
}

/// Loads the boxplot dataset as (platform, likes) samples.
pub fn load_likes_samples(path: &Path) -> Result<Vec<Sample>> {
    let records: Vec<LikesRecord> = load_records(path)?;
    Ok(records
        .into_iter()
        .map(|r| Sample::new(r.platform, r.likes))
        .collect())
}

pub fn load_avg_records(path: &Path) -> Result<Vec<AvgLikesRecord>> {
    load_records(path)
}

pub fn load_time_records(path: &Path) -> Result<Vec<TimeRecord>> {
    load_records(path)
}
