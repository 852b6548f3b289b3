use chrono::{Datelike, NaiveDate, Weekday};
use commitplot::report::Reporter;
use commitplot::week::{parse_week_code, pivot_year, resolve_week_code};
use commitplot::PlotError;

#[test]
fn pivot_splits_centuries_at_fifty() {
    for yy in 0..50 {
        assert_eq!(pivot_year(yy), 2000 + yy);
    }
    for yy in 50..100 {
        assert_eq!(pivot_year(yy), 1900 + yy);
    }
}

#[test]
fn valid_codes_resolve_to_the_monday_of_the_iso_week() {
    assert_eq!(
        parse_week_code("23.05").unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 30).unwrap()
    );
    assert_eq!(
        parse_week_code("21.1").unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()
    );
    // ISO week 1 of 2020 starts in the previous calendar year.
    assert_eq!(
        parse_week_code("20.01").unwrap(),
        NaiveDate::from_ymd_opt(2019, 12, 30).unwrap()
    );
    assert_eq!(
        parse_week_code("99.10").unwrap(),
        NaiveDate::from_ymd_opt(1999, 3, 8).unwrap()
    );
}

#[test]
fn every_resolved_code_is_a_monday_in_the_pivoted_year() {
    for yy in 0..100 {
        for ww in 1..=52 {
            let date = parse_week_code(&format!("{yy:02}.{ww:02}")).unwrap();
            assert_eq!(date.weekday(), Weekday::Mon);
            assert_eq!(date.iso_week().year(), pivot_year(yy));
            assert_eq!(date.iso_week().week(), ww);
        }
    }
}

#[test]
fn malformed_codes_are_rejected() {
    for code in ["", "23", "23-05", "23,05", "ab.05", "23.xx", "23.", ".05", "2023.05", "23.0", "23.54", "23.5.1", "-1.05"] {
        assert!(
            matches!(parse_week_code(code), Err(PlotError::InvalidWeekCode(_))),
            "{code} should be rejected"
        );
    }
}

#[test]
fn week_53_only_exists_in_long_years() {
    assert!(parse_week_code("20.53").is_ok());
    assert!(parse_week_code("23.53").is_err());
}

#[test]
fn resolving_degrades_to_unset() {
    let reporter = Reporter::default();
    assert_eq!(resolve_week_code(None, &reporter), None);
    assert_eq!(resolve_week_code(Some(""), &reporter), None);
    assert_eq!(resolve_week_code(Some("   "), &reporter), None);
    assert_eq!(resolve_week_code(Some("23/05"), &reporter), None);
    assert_eq!(
        resolve_week_code(Some(" 23.05 "), &reporter),
        NaiveDate::from_ymd_opt(2023, 1, 30)
    );
}

#[test]
fn diagnostic_names_the_value_and_format() {
    let err = parse_week_code("23-05").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("23-05"));
    assert!(msg.contains("YY.WW"));
}
