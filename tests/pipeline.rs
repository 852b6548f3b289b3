use chrono::{DateTime, Utc};
use commitplot::bucket::{Granularity, WeekKey};
use commitplot::filter::CommitFilter;
use commitplot::input::PlotRequest;
use commitplot::model::CommitInfo;
use commitplot::plot::{build_chart, collect_series, source_pairs, CommitSource, Skip};
use commitplot::report::Reporter;
use commitplot::{PlotError, Result};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Default)]
struct MemoryRepo {
    branches: HashMap<String, Vec<CommitInfo>>,
    corrupt: Vec<String>,
}

impl MemoryRepo {
    fn with_branch(mut self, branch: &str, commits: Vec<CommitInfo>) -> Self {
        self.branches.insert(branch.to_string(), commits);
        self
    }

    fn with_corrupt_branch(mut self, branch: &str) -> Self {
        self.corrupt.push(branch.to_string());
        self
    }
}

impl CommitSource for MemoryRepo {
    fn branch_commits(&self, branch: &str, _show_progress: bool) -> Result<Vec<CommitInfo>> {
        if self.corrupt.iter().any(|b| b == branch) {
            return Err(PlotError::InvalidDate("Invalid timestamp: -1".to_string()));
        }
        self.branches
            .get(branch)
            .cloned()
            .ok_or_else(|| PlotError::BranchNotFound(branch.to_string()))
    }
}

fn commit(author: &str, message: &str, at: &str) -> CommitInfo {
    CommitInfo {
        id: format!("{author}-{at}"),
        author_name: author.to_string(),
        message: message.to_string(),
        timestamp: at.parse::<DateTime<Utc>>().unwrap(),
    }
}

fn request(filter: CommitFilter, repos: &str, branches: &str, from: &str, to: &str) -> PlotRequest {
    PlotRequest::new(filter, repos, branches, Some(from), Some(to), &Reporter::default()).unwrap()
}

fn run(request: &PlotRequest, repos: &HashMap<&str, MemoryRepo>) -> commitplot::plot::Collected {
    collect_series(
        request,
        |path: &str| {
            repos
                .get(path)
                .cloned()
                .ok_or_else(|| PlotError::Config(format!("no repository at {path}")))
        },
        &Utc,
        false,
        &Reporter::default(),
    )
}

fn alice_repo() -> MemoryRepo {
    MemoryRepo::default().with_branch(
        "main",
        vec![
            commit("Alice", "second week", "2023-02-07T10:00:00Z"),
            commit("Bob", "not counted", "2023-02-01T10:00:00Z"),
            commit("Alice", "first week again", "2023-02-02T10:00:00Z"),
            commit("Alice", "first week", "2023-01-31T10:00:00Z"),
        ],
    )
}

#[test]
fn author_series_counts_exact_matches_per_week() {
    let repos = HashMap::from([("work/app", alice_repo())]);
    let req = request(CommitFilter::author("Alice").unwrap(), "work/app", "main", "", "");

    let collected = run(&req, &repos);
    assert!(collected.skipped.is_empty());
    assert_eq!(collected.series.len(), 1);

    let series = &collected.series[0];
    assert_eq!(series.name(), "app:main");
    assert_eq!(
        series.weeks(),
        &[
            (WeekKey::new(2023, 5).unwrap(), 2),
            (WeekKey::new(2023, 6).unwrap(), 1)
        ]
    );
    assert_eq!(series.legend(), "app:main (3)");
}

#[test]
fn author_match_is_case_sensitive() {
    let repos = HashMap::from([("app", alice_repo())]);
    let req = request(CommitFilter::author("alice").unwrap(), "app", "main", "", "");

    let collected = run(&req, &repos);
    assert!(collected.series.is_empty());
    assert_eq!(
        collected.skipped,
        vec![Skip::NoMatches {
            repo: "app".to_string(),
            branch: "main".to_string(),
            filter: "from alice".to_string(),
        }]
    );
}

#[test]
fn keyword_match_counts_a_commit_once() {
    let repo = MemoryRepo::default().with_branch(
        "main",
        vec![
            commit("Carol", "Fix bug in parser", "2023-03-01T09:00:00Z"),
            commit("Dave", "BUG: crash on start", "2023-03-02T09:00:00Z"),
            commit("Dave", "Add feature", "2023-03-03T09:00:00Z"),
        ],
    );
    let repos = HashMap::from([("lib", repo)]);
    let req = request(CommitFilter::keywords(r#""fix" "bug""#).unwrap(), "lib", "main", "", "");

    let collected = run(&req, &repos);
    let series = &collected.series[0];
    assert_eq!(series.total(), 2);
    assert_eq!(series.authors, Some(2));
    assert_eq!(series.legend(), "lib:main (commits:2, authors:2)");
}

#[test]
fn reversed_range_skips_every_source_without_failing() {
    let repos = HashMap::from([("a", alice_repo()), ("b", alice_repo())]);
    let req = request(CommitFilter::author("Alice").unwrap(), "a b", "main", "23.10", "23.05");
    assert!(req.range.from > req.range.to);

    let collected = run(&req, &repos);
    assert!(collected.series.is_empty());
    assert_eq!(
        collected.skipped,
        vec![
            Skip::OutOfRange { repo: "a".to_string(), branch: "main".to_string() },
            Skip::OutOfRange { repo: "b".to_string(), branch: "main".to_string() },
        ]
    );
    assert_eq!(
        collected.skipped[0].to_string(),
        "No commits in selected week range for a:main"
    );
}

#[test]
fn unreachable_sources_are_skipped_and_the_rest_plotted() {
    let repos = HashMap::from([("good", alice_repo())]);
    let req = request(
        CommitFilter::author("Alice").unwrap(),
        "missing, good",
        "main release",
        "",
        "",
    );

    let collected = run(&req, &repos);
    assert_eq!(
        collected.skipped,
        vec![
            Skip::RepositoryUnavailable { path: "missing".to_string() },
            Skip::BranchNotFound { repo: "good".to_string(), branch: "release".to_string() },
        ]
    );
    assert_eq!(collected.skipped[0].to_string(), "Could not open repository: missing");
    assert_eq!(
        collected.skipped[1].to_string(),
        "Branch 'release' not found in repo 'good'. Skipping."
    );
    assert_eq!(collected.series.len(), 1);
    assert_eq!(collected.series[0].name(), "good:main");
}

#[test]
fn unreadable_history_is_not_reported_as_a_missing_branch() {
    let repos = HashMap::from([("good", alice_repo().with_corrupt_branch("legacy"))]);
    let req = request(CommitFilter::author("Alice").unwrap(), "good", "legacy main", "", "");

    let collected = run(&req, &repos);
    assert_eq!(
        collected.skipped,
        vec![Skip::HistoryUnreadable {
            repo: "good".to_string(),
            branch: "legacy".to_string(),
            error: "Invalid date: Invalid timestamp: -1".to_string(),
        }]
    );
    assert_eq!(
        collected.skipped[0].to_string(),
        "Could not read history of good:legacy: Invalid date: Invalid timestamp: -1"
    );
    assert_eq!(collected.series.len(), 1);
}

#[test]
fn each_repository_is_opened_once() {
    let opened = RefCell::new(Vec::new());
    let req = request(CommitFilter::author("Alice").unwrap(), "one two", "main dev", "", "");

    let collected = collect_series(
        &req,
        |path: &str| {
            opened.borrow_mut().push(path.to_string());
            Ok(alice_repo().with_branch("dev", vec![commit("Alice", "x", "2023-05-10T12:00:00Z")]))
        },
        &Utc,
        false,
        &Reporter::default(),
    );

    assert_eq!(*opened.borrow(), vec!["one".to_string(), "two".to_string()]);
    let names: Vec<String> = collected.series.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["one:main", "one:dev", "two:main", "two:dev"]);
}

#[test]
fn charts_stack_series_on_a_shared_axis() {
    let other = MemoryRepo::default().with_branch(
        "main",
        vec![
            commit("Alice", "later", "2023-03-15T12:00:00Z"),
            commit("Alice", "same week", "2023-02-08T12:00:00Z"),
        ],
    );
    let repos = HashMap::from([("a", alice_repo()), ("b", other)]);
    let req = request(CommitFilter::author("Alice").unwrap(), "a b", "main", "", "");
    let collected = run(&req, &repos);

    let chart = build_chart(&collected.series, Granularity::Week, "t".to_string());
    assert_eq!(chart.labels, vec!["wk23.5", "wk23.6", "wk23.11"]);
    assert!(chart.axis.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(chart.bars.len(), 2);
    assert_eq!(chart.bars[0].bottoms, vec![0, 0]);
    assert_eq!(chart.bars[1].heights, vec![1, 1]);
    assert_eq!(chart.bars[1].bottoms, vec![1, 0]);
    assert_eq!(chart.stack_top(), 2);
    assert_ne!(chart.bars[0].color, chart.bars[1].color);
    assert!((chart.bar_width - 4.2).abs() < 1e-9);

    let months = build_chart(&collected.series, Granularity::Month, "t".to_string());
    assert_eq!(months.labels, vec!["mo23.1", "mo23.2", "mo23.3"]);
    assert_eq!(months.bars[0].color, chart.bars[0].color);
    for (week_bars, month_bars) in chart.bars.iter().zip(&months.bars) {
        let weekly: u32 = week_bars.heights.iter().sum();
        let monthly: u32 = month_bars.heights.iter().sum();
        assert_eq!(weekly, monthly);
    }
}

#[test]
fn pairs_cross_repositories_with_branches_in_order() {
    let repos = vec!["r1".to_string(), "r2".to_string()];
    let branches = vec!["main".to_string(), "dev".to_string()];

    let pairs: Vec<(usize, &str, &str)> = source_pairs(&repos, &branches)
        .map(|p| (p.repo_index, p.repo_path, p.branch))
        .collect();
    assert_eq!(
        pairs,
        vec![(0, "r1", "main"), (0, "r1", "dev"), (1, "r2", "main"), (1, "r2", "dev")]
    );
}
