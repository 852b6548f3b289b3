use crate::bucket::{Granularity, TimeBucket};
use crate::filter::CommitFilter;
use crate::input::{repo_name, sanitize, PlotRequest};
use crate::model::{BucketOutput, PlotOutput, SeriesOutput, SCHEMA_VERSION};
use super::{Collected, Series};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// File name shared by both images, without the granularity suffix.
pub fn file_stem(request: &PlotRequest) -> String {
    let mut stem = match &request.filter {
        CommitFilter::Author(author) => {
            let repos: Vec<String> = request.repos.iter().map(|r| sanitize(&repo_name(r))).collect();
            let branches: Vec<String> = request.branches.iter().map(|b| sanitize(b)).collect();
            format!(
                "commits_{}_{}_{}",
                sanitize(author),
                repos.join("_"),
                branches.join("_")
            )
        }
        CommitFilter::Keywords(keywords) => {
            let keywords: Vec<String> = keywords.iter().map(|k| sanitize(k)).collect();
            format!("commits_keywords_{}", keywords.join("_"))
        }
    };

    if request.has_range_input() {
        stem.push_str(&format!(
            "_{}_{}",
            request.week_from.as_deref().map(sanitize).unwrap_or_default(),
            request.week_to.as_deref().map(sanitize).unwrap_or_default()
        ));
    }
    stem
}

pub fn image_path(dir: &Path, stem: &str, granularity: Granularity) -> PathBuf {
    dir.join(format!("{stem}_{}.png", granularity.plural()))
}

pub fn title(request: &PlotRequest, granularity: Granularity) -> String {
    let from = request.week_from.as_deref();
    let to = request.week_to.as_deref();

    match &request.filter {
        CommitFilter::Author(author) => {
            let range = if request.has_range_input() {
                format!(" | wk{} → wk{}", from.unwrap_or_default(), to.unwrap_or_default())
            } else {
                String::new()
            };
            format!("Commits per {} for {author}{range}", granularity.noun())
        }
        CommitFilter::Keywords(keywords) => {
            let range = match (from, to) {
                (None, None) => " | All time".to_string(),
                (None, Some(to)) => format!(" | From start → wk{to}"),
                (Some(from), None) => format!(" | wk{from} → Current week"),
                (Some(from), Some(to)) => format!(" | wk{from} → wk{to}"),
            };
            format!(
                "Commits per {} containing keywords: {}{range}",
                granularity.noun(),
                keywords.join(", ")
            )
        }
    }
}

fn buckets_output<K: TimeBucket>(buckets: &[(K, u32)]) -> Vec<BucketOutput> {
    buckets
        .iter()
        .map(|(key, commits)| BucketOutput {
            start: key.start(),
            label: key.label(),
            commits: *commits,
        })
        .collect()
}

fn series_output(series: &Series) -> SeriesOutput {
    SeriesOutput {
        repository: series.repository.clone(),
        branch: series.branch.clone(),
        legend: series.legend(),
        total_commits: series.total(),
        authors: series.authors,
        weeks: buckets_output(series.weeks()),
        months: buckets_output(series.months()),
    }
}

pub fn output_json(
    request: &PlotRequest,
    collected: &Collected,
    weeks_image: &Path,
    months_image: &Path,
) -> anyhow::Result<()> {
    let output = PlotOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        mode: request.filter.mode(),
        filter: request.filter.terms(),
        week_from: request.week_from.clone(),
        week_to: request.week_to.clone(),
        series: collected.series.iter().map(series_output).collect(),
        skipped: collected.skipped.iter().map(ToString::to_string).collect(),
        weeks_image: weeks_image.to_string_lossy().to_string(),
        months_image: months_image.to_string_lossy().to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
