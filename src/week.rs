//! `YY.WW` week codes used for the optional date-range bounds.

use crate::error::{PlotError, Result};
use chrono::{NaiveDate, Weekday};
use crate::report::Reporter;

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s.
pub const YEAR_PIVOT: i32 = 50;

pub fn pivot_year(yy: i32) -> i32 {
    if yy < YEAR_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Parse a `YY.WW` code into the Monday that starts ISO week `WW`.
pub fn parse_week_code(code: &str) -> Result<NaiveDate> {
    let invalid = || PlotError::InvalidWeekCode(code.to_string());

    let (yy, ww) = code.trim().split_once('.').ok_or_else(invalid)?;
    if !is_short_number(yy) || !is_short_number(ww) {
        return Err(invalid());
    }

    let yy: i32 = yy.parse().map_err(|_| invalid())?;
    let ww: u32 = ww.parse().map_err(|_| invalid())?;

    NaiveDate::from_isoywd_opt(pivot_year(yy), ww, Weekday::Mon).ok_or_else(invalid)
}

/// Resolve an optional week code, reporting and discarding malformed input.
pub fn resolve_week_code(code: Option<&str>, reporter: &Reporter) -> Option<NaiveDate> {
    let code = code.map(str::trim).filter(|c| !c.is_empty())?;
    match parse_week_code(code) {
        Ok(date) => Some(date),
        Err(e) => {
            reporter.warn(e);
            None
        }
    }
}

fn is_short_number(part: &str) -> bool {
    (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
