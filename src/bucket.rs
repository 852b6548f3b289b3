use crate::model::{CommitInfo, WeekRange};
use chrono::{Datelike, Days, NaiveDate, TimeZone, Weekday};
use std::collections::BTreeMap;

/// A fixed calendar interval that commits are counted into.
pub trait TimeBucket: Copy + Ord {
    /// Canonical date that represents the bucket on a date axis.
    fn start(&self) -> NaiveDate;
    fn label(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    iso_year: i32,
    week: u32,
    monday: NaiveDate,
}

impl WeekKey {
    pub fn new(iso_year: i32, week: u32) -> Option<Self> {
        let monday = NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon)?;
        Some(Self { iso_year, week, monday })
    }

    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
        Self {
            iso_year: iso.year(),
            week: iso.week(),
            monday,
        }
    }

    pub fn iso_year(&self) -> i32 {
        self.iso_year
    }

    pub fn week(&self) -> u32 {
        self.week
    }
}

impl TimeBucket for WeekKey {
    fn start(&self) -> NaiveDate {
        self.monday
    }

    fn label(&self) -> String {
        format!("wk{:02}.{}", self.iso_year.rem_euclid(100), self.week)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
    first: NaiveDate,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month, first })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl TimeBucket for MonthKey {
    fn start(&self) -> NaiveDate {
        self.first
    }

    fn label(&self) -> String {
        format!("mo{:02}.{}", self.year.rem_euclid(100), self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Week,
    Month,
}

impl Granularity {
    pub fn noun(&self) -> &'static str {
        match self {
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Granularity::Week => "weeks",
            Granularity::Month => "months",
        }
    }

    pub fn adjective(&self) -> &'static str {
        match self {
            Granularity::Week => "weekly",
            Granularity::Month => "monthly",
        }
    }
}

/// Commit counts of one source, per ISO week and per calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub weeks: Vec<(WeekKey, u32)>,
    pub months: Vec<(MonthKey, u32)>,
}

impl Buckets {
    pub fn total(&self) -> u32 {
        self.weeks.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// Count dates into week and month buckets.
///
/// The range is checked against each date's week Monday and a date that
/// falls outside it is dropped from both granularities.
pub fn bucket_dates(dates: &[NaiveDate], range: &WeekRange) -> Buckets {
    let mut weeks: BTreeMap<WeekKey, u32> = BTreeMap::new();
    let mut months: BTreeMap<MonthKey, u32> = BTreeMap::new();

    for &date in dates {
        let week = WeekKey::of(date);
        if !range.contains(&week.start()) {
            continue;
        }
        *weeks.entry(week).or_insert(0) += 1;
        *months.entry(MonthKey::of(date)).or_insert(0) += 1;
    }

    Buckets {
        weeks: weeks.into_iter().collect(),
        months: months.into_iter().collect(),
    }
}

/// Calendar dates of the commits as seen in `tz`.
pub fn commit_dates<Tz: TimeZone>(commits: &[CommitInfo], tz: &Tz) -> Vec<NaiveDate> {
    commits
        .iter()
        .map(|c| c.timestamp.with_timezone(tz).date_naive())
        .collect()
}
