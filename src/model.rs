use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub author_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Inclusive bounds applied to the Monday of each commit's ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl WeekRange {
    pub fn new() -> Self {
        Self { from: None, to: None }
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn contains(&self, week_start: &NaiveDate) -> bool {
        if let Some(from) = self.from {
            if week_start < &from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if week_start > &to {
                return false;
            }
        }
        true
    }
}

impl Default for WeekRange {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Author,
    Keywords,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketOutput {
    pub start: NaiveDate,
    pub label: String,
    pub commits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesOutput {
    pub repository: String,
    pub branch: String,
    pub legend: String,
    pub total_commits: u32,
    pub authors: Option<usize>,
    pub weeks: Vec<BucketOutput>,
    pub months: Vec<BucketOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub mode: Mode,
    pub filter: Vec<String>,
    pub week_from: Option<String>,
    pub week_to: Option<String>,
    pub series: Vec<SeriesOutput>,
    pub skipped: Vec<String>,
    pub weeks_image: String,
    pub months_image: String,
}
