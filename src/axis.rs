use crate::bucket::TimeBucket;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

pub const MAX_BAR_WIDTH: f64 = 15.0;
pub const MIN_BAR_WIDTH: f64 = 2.0;
const GAP_FILL: f64 = 0.6;

/// Sorted union of every series' buckets.
pub fn merge_axis<'a, K, I>(series: I) -> Vec<K>
where
    K: TimeBucket + 'a,
    I: IntoIterator<Item = &'a [(K, u32)]>,
{
    let keys: BTreeSet<K> = series
        .into_iter()
        .flat_map(|buckets| buckets.iter().map(|(k, _)| *k))
        .collect();
    keys.into_iter().collect()
}

/// Bar width in days for a sorted date axis.
pub fn bar_width(dates: &[NaiveDate]) -> f64 {
    let min_gap = dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .min();

    match min_gap {
        Some(gap) => (gap as f64 * GAP_FILL).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => MAX_BAR_WIDTH,
    }
}

/// Running stack height per axis point.
#[derive(Debug, Clone)]
pub struct StackAccumulator<K: TimeBucket> {
    totals: BTreeMap<K, u32>,
}

impl<K: TimeBucket> StackAccumulator<K> {
    pub fn new(axis: &[K]) -> Self {
        Self {
            totals: axis.iter().map(|k| (*k, 0)).collect(),
        }
    }

    /// Stack one series on top of what is already placed and return the
    /// offset each of its bars starts from.
    pub fn place(&mut self, buckets: &[(K, u32)]) -> Vec<u32> {
        buckets
            .iter()
            .map(|(key, height)| {
                let total = self.totals.entry(*key).or_insert(0);
                let bottom = *total;
                *total += height;
                bottom
            })
            .collect()
    }

    pub fn height(&self, key: &K) -> u32 {
        self.totals.get(key).copied().unwrap_or(0)
    }

    pub fn max_height(&self) -> u32 {
        self.totals.values().copied().max().unwrap_or(0)
    }
}
