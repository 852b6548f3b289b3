use crate::axis::{bar_width, merge_axis, StackAccumulator};
use crate::bucket::{Buckets, Granularity, MonthKey, TimeBucket, WeekKey};
use crate::chart::{palette_color, BarSeries, ChartSpec};
use chrono::NaiveDate;

pub const Y_LABEL: &str = "Number of commits";

/// Aggregated counts of one (repository, branch) source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub repository: String,
    pub branch: String,
    pub buckets: Buckets,
    /// Distinct authors of the matched commits, tracked in keyword mode.
    pub authors: Option<usize>,
}

impl Series {
    pub fn name(&self) -> String {
        format!("{}:{}", self.repository, self.branch)
    }

    pub fn total(&self) -> u32 {
        self.buckets.total()
    }

    pub fn legend(&self) -> String {
        match self.authors {
            Some(authors) => format!(
                "{} (commits:{}, authors:{})",
                self.name(),
                self.total(),
                authors
            ),
            None => format!("{} ({})", self.name(), self.total()),
        }
    }

    pub fn weeks(&self) -> &[(WeekKey, u32)] {
        &self.buckets.weeks
    }

    pub fn months(&self) -> &[(MonthKey, u32)] {
        &self.buckets.months
    }
}

/// Stack every series on the merged axis of `granularity`.
///
/// Series are stacked bottom to top in the order given, and each series
/// takes its color from its position in that order.
pub fn build_chart(series: &[Series], granularity: Granularity, title: String) -> ChartSpec {
    match granularity {
        Granularity::Week => chart_for(series, Series::weeks, title),
        Granularity::Month => chart_for(series, Series::months, title),
    }
}

fn chart_for<K, F>(series: &[Series], buckets: F, title: String) -> ChartSpec
where
    K: TimeBucket,
    F: Fn(&Series) -> &[(K, u32)],
{
    let axis = merge_axis(series.iter().map(&buckets));
    let dates: Vec<NaiveDate> = axis.iter().map(TimeBucket::start).collect();
    let labels = axis.iter().map(TimeBucket::label).collect();

    let mut stack = StackAccumulator::new(&axis);
    let bars = series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let points = buckets(s);
            BarSeries {
                dates: points.iter().map(|(k, _)| k.start()).collect(),
                heights: points.iter().map(|(_, n)| *n).collect(),
                bottoms: stack.place(points),
                color: palette_color(index),
                legend: s.legend(),
            }
        })
        .collect();

    ChartSpec {
        title,
        y_label: Y_LABEL.to_string(),
        bar_width: bar_width(&dates),
        axis: dates,
        labels,
        bars,
    }
}
