//! Normalization of the free-form run inputs.

use crate::error::{PlotError, Result};
use crate::filter::CommitFilter;
use crate::model::{Mode, WeekRange};
use crate::report::Reporter;
use crate::week::resolve_week_code;
use regex::Regex;
use std::sync::OnceLock;

/// Split a comma- or whitespace-separated list.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Every double-quoted substring of `raw`, lowercased.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    let quoted = QUOTED.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("static regex"));

    quoted
        .captures_iter(raw)
        .map(|c| c[1].to_lowercase())
        .collect()
}

/// Last path component, ignoring trailing separators.
pub fn repo_name(path: &str) -> String {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Make a value safe to embed in a file name.
pub fn sanitize(value: &str) -> String {
    value.replace(['/', '\\', ' '], "_")
}

/// Run inputs as typed, before validation.
#[derive(Debug, Clone)]
pub struct RawInputs {
    pub mode: Mode,
    /// Author name, or the quoted keyword list.
    pub filter: String,
    pub repos: String,
    pub branches: String,
    pub week_from: Option<String>,
    pub week_to: Option<String>,
}

impl RawInputs {
    /// Validate in the order the inputs are checked: filter first, then
    /// sources, then the week range.
    pub fn into_request(self, reporter: &Reporter) -> Result<PlotRequest> {
        let filter = match self.mode {
            Mode::Author => CommitFilter::author(&self.filter)?,
            Mode::Keywords => CommitFilter::keywords(&self.filter)?,
        };
        PlotRequest::new(
            filter,
            &self.repos,
            &self.branches,
            self.week_from.as_deref(),
            self.week_to.as_deref(),
            reporter,
        )
    }
}

/// A validated set of run inputs.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub filter: CommitFilter,
    pub repos: Vec<String>,
    pub branches: Vec<String>,
    pub week_from: Option<String>,
    pub week_to: Option<String>,
    pub range: WeekRange,
}

impl PlotRequest {
    pub fn new(
        filter: CommitFilter,
        repos: &str,
        branches: &str,
        week_from: Option<&str>,
        week_to: Option<&str>,
        reporter: &Reporter,
    ) -> Result<Self> {
        let repos = split_list(repos);
        let branches = split_list(branches);
        if repos.is_empty() || branches.is_empty() {
            return Err(PlotError::Config(
                "No repositories or branches provided.".to_string(),
            ));
        }

        let week_from = non_blank(week_from);
        let week_to = non_blank(week_to);

        let mut range = WeekRange::new();
        if let Some(from) = resolve_week_code(week_from.as_deref(), reporter) {
            range = range.with_from(from);
        }
        if let Some(to) = resolve_week_code(week_to.as_deref(), reporter) {
            range = range.with_to(to);
        }

        Ok(Self {
            filter,
            repos,
            branches,
            week_from,
            week_to,
            range,
        })
    }

    pub fn has_range_input(&self) -> bool {
        self.week_from.is_some() || self.week_to.is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
