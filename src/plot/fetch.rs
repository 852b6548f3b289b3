use crate::bucket::{bucket_dates, commit_dates};
use crate::error::{PlotError, Result};
use crate::filter::CommitFilter;
use crate::input::{repo_name, PlotRequest};
use crate::model::CommitInfo;
use crate::report::Reporter;
use super::Series;
use chrono::TimeZone;
use std::collections::HashSet;
use std::fmt;

/// Anything that can list the commits of a named branch.
pub trait CommitSource {
    fn branch_commits(&self, branch: &str, show_progress: bool) -> Result<Vec<CommitInfo>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePair<'a> {
    pub repo_index: usize,
    pub repo_path: &'a str,
    pub branch: &'a str,
}

/// Every repository crossed with every branch, repository-major.
pub fn source_pairs<'a>(
    repos: &'a [String],
    branches: &'a [String],
) -> impl Iterator<Item = SourcePair<'a>> + 'a {
    repos.iter().enumerate().flat_map(move |(repo_index, repo_path)| {
        branches.iter().map(move |branch| SourcePair {
            repo_index,
            repo_path,
            branch,
        })
    })
}

/// Why a source produced no series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    RepositoryUnavailable { path: String },
    BranchNotFound { repo: String, branch: String },
    HistoryUnreadable { repo: String, branch: String, error: String },
    NoMatches { repo: String, branch: String, filter: String },
    OutOfRange { repo: String, branch: String },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::RepositoryUnavailable { path } => {
                write!(f, "Could not open repository: {path}")
            }
            Skip::BranchNotFound { repo, branch } => {
                write!(f, "Branch '{branch}' not found in repo '{repo}'. Skipping.")
            }
            Skip::HistoryUnreadable { repo, branch, error } => {
                write!(f, "Could not read history of {repo}:{branch}: {error}")
            }
            Skip::NoMatches { repo, branch, filter } => {
                write!(f, "No commits {filter} in {repo}:{branch}")
            }
            Skip::OutOfRange { repo, branch } => {
                write!(f, "No commits in selected week range for {repo}:{branch}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Collected {
    pub series: Vec<Series>,
    pub skipped: Vec<Skip>,
}

/// Walk every (repository, branch) pair and build a series for each one
/// that has matching commits.
///
/// A repository is opened once, when its first pair comes up, and its
/// handle is dropped before the next repository is opened.
pub fn collect_series<S, F, Tz>(
    request: &PlotRequest,
    mut open: F,
    tz: &Tz,
    show_progress: bool,
    reporter: &Reporter,
) -> Collected
where
    S: CommitSource,
    F: FnMut(&str) -> Result<S>,
    Tz: TimeZone,
{
    let mut collected = Collected::default();
    let mut current: Option<(usize, Option<S>)> = None;

    for pair in source_pairs(&request.repos, &request.branches) {
        if current.as_ref().map(|(index, _)| *index) != Some(pair.repo_index) {
            drop(current.take());
            let source = match open(pair.repo_path) {
                Ok(source) => Some(source),
                Err(_) => {
                    report(
                        &mut collected,
                        reporter,
                        Skip::RepositoryUnavailable {
                            path: pair.repo_path.to_string(),
                        },
                    );
                    None
                }
            };
            current = Some((pair.repo_index, source));
        }

        let Some((_, Some(source))) = current.as_ref() else {
            continue;
        };

        match series_for(source, &pair, request, tz, show_progress) {
            Ok(series) => collected.series.push(series),
            Err(skip) => report(&mut collected, reporter, skip),
        }
    }

    collected
}

fn series_for<S: CommitSource, Tz: TimeZone>(
    source: &S,
    pair: &SourcePair<'_>,
    request: &PlotRequest,
    tz: &Tz,
    show_progress: bool,
) -> std::result::Result<Series, Skip> {
    let repo = repo_name(pair.repo_path);
    let branch = pair.branch.to_string();

    let commits = source
        .branch_commits(pair.branch, show_progress)
        .map_err(|err| match err {
            PlotError::BranchNotFound(_) => Skip::BranchNotFound {
                repo: repo.clone(),
                branch: branch.clone(),
            },
            other => Skip::HistoryUnreadable {
                repo: repo.clone(),
                branch: branch.clone(),
                error: other.to_string(),
            },
        })?;

    let matched: Vec<CommitInfo> = commits
        .into_iter()
        .filter(|c| request.filter.matches(c))
        .collect();

    if matched.is_empty() {
        return Err(Skip::NoMatches {
            repo,
            branch,
            filter: request.filter.describe(),
        });
    }

    let authors = match request.filter {
        CommitFilter::Keywords(_) => Some(
            matched
                .iter()
                .map(|c| c.author_name.as_str())
                .collect::<HashSet<_>>()
                .len(),
        ),
        CommitFilter::Author(_) => None,
    };

    let buckets = bucket_dates(&commit_dates(&matched, tz), &request.range);
    if buckets.is_empty() {
        return Err(Skip::OutOfRange { repo, branch });
    }

    Ok(Series {
        repository: repo,
        branch,
        buckets,
        authors,
    })
}

fn report(collected: &mut Collected, reporter: &Reporter, skip: Skip) {
    reporter.warn(&skip);
    collected.skipped.push(skip);
}
