use crate::error::{PlotError, Result};
use crate::input::parse_keywords;
use crate::model::{CommitInfo, Mode};

/// Predicate deciding which commits of a branch are counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitFilter {
    /// Exact, case-sensitive author name.
    Author(String),
    /// Lowercased keywords, any of which must appear in the message.
    Keywords(Vec<String>),
}

impl CommitFilter {
    pub fn author(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlotError::Config("No author name provided.".to_string()));
        }
        Ok(CommitFilter::Author(name.to_string()))
    }

    pub fn keywords(raw: &str) -> Result<Self> {
        let keywords = parse_keywords(raw);
        if keywords.is_empty() {
            return Err(PlotError::Config(
                r#"No valid keywords provided. Use quotes like: "bug" "fix" "UI""#.to_string(),
            ));
        }
        Ok(CommitFilter::Keywords(keywords))
    }

    pub fn matches(&self, commit: &CommitInfo) -> bool {
        match self {
            CommitFilter::Author(name) => commit.author_name == *name,
            CommitFilter::Keywords(keywords) => {
                let message = commit.message.to_lowercase();
                keywords.iter().any(|k| message.contains(k.as_str()))
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            CommitFilter::Author(_) => Mode::Author,
            CommitFilter::Keywords(_) => Mode::Keywords,
        }
    }

    pub fn terms(&self) -> Vec<String> {
        match self {
            CommitFilter::Author(name) => vec![name.clone()],
            CommitFilter::Keywords(keywords) => keywords.clone(),
        }
    }

    /// Phrase used when a source has no matching commits.
    pub fn describe(&self) -> String {
        match self {
            CommitFilter::Author(name) => format!("from {name}"),
            CommitFilter::Keywords(keywords) => {
                let quoted: Vec<String> = keywords.iter().map(|k| format!("'{k}'")).collect();
                format!("with keywords [{}]", quoted.join(", "))
            }
        }
    }
}
