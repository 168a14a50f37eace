use serde::{Deserialize, Serialize};

use crate::error::SummaryError;

/// Row of socialMedia.csv.
#[derive(Debug, Deserialize)]
pub struct LikesRecord {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Likes")]
    pub likes: f64,
}

/// Row of SocialMediaAvg.csv.
#[derive(Debug, Deserialize)]
pub struct AvgLikesRecord {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "PostType")]
    pub post_type: String,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// Row of SocialMediaTime.csv.
#[derive(Debug, Deserialize)]
pub struct TimeRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// One (group, value) observation.
#[derive(Debug, Clone)]
pub struct Sample {
    pub group: String,
    pub value: f64,
}

impl Sample {
    pub fn new(group: impl Into<String>, value: f64) -> Self {
        Self {
            group: group.into(),
            value,
        }
    }
}

/// Five-number summary of one group. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub group: String,
    pub count: usize,
    #[serde(flatten)]
    pub summary: GroupSummary,
}

/// Per-group summaries, ordered by first appearance of each group in
/// the input so downstream chart ordering is stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummaries {
    entries: Vec<SummaryEntry>,
}

impl GroupSummaries {
    pub(crate) fn from_entries(entries: Vec<SummaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.group.as_str())
    }

    pub fn get(&self, group: &str) -> Result<&GroupSummary, SummaryError> {
        self.entries
            .iter()
            .find(|e| e.group == group)
            .map(|e| &e.summary)
            .ok_or_else(|| SummaryError::UnknownGroup(group.to_string()))
    }
}
