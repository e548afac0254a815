use chrono::NaiveDate;
use leavedesk::nlp::dates::{resolve, resolve_range_inclusive, resolve_range_workdays_only, resolve_workdays};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference date used throughout: Tuesday 2026-08-04.
fn reference() -> NaiveDate {
    date(2026, 8, 4)
}

#[test]
fn explicit_date_is_taken_literally() {
    assert_eq!(resolve("25-09-2026", reference()), vec![date(2026, 9, 25)]);
    assert_eq!(resolve("25/09/2026", reference()), vec![date(2026, 9, 25)]);
}

#[test]
fn explicit_date_round_trips_through_its_pattern() {
    let resolved = resolve("25-09-2026", reference());
    assert_eq!(resolved[0].format("%d-%m-%Y").to_string(), "25-09-2026");
}

#[test]
fn day_month_uses_current_year() {
    assert_eq!(resolve("7/10", reference()), vec![date(2026, 10, 7)]);
}

#[test]
fn iso_order_is_recognized() {
    assert_eq!(resolve("2026-09-25", reference()), vec![date(2026, 9, 25)]);
}

#[test]
fn invalid_calendar_dates_are_skipped() {
    assert!(resolve("32-13-2026", reference()).is_empty());
}

#[test]
fn today_and_tomorrow_anchor_to_reference() {
    assert_eq!(resolve("today", reference()), vec![reference()]);
    assert_eq!(resolve("tomorrow", reference()), vec![date(2026, 8, 5)]);
    assert_eq!(resolve("yesterday", reference()), vec![date(2026, 8, 3)]);
    // Idempotent across repeated calls with the same reference.
    assert_eq!(resolve("today", reference()), resolve("today", reference()));
}

#[test]
fn two_day_offsets() {
    assert_eq!(
        resolve("day after tomorrow", reference()),
        vec![date(2026, 8, 6)]
    );
    assert_eq!(
        resolve("day before yesterday", reference()),
        vec![date(2026, 8, 2)]
    );
}

#[test]
fn tomorrow_and_the_day_after_yields_two_dates() {
    assert_eq!(
        resolve("tomorrow and the day after", reference()),
        vec![date(2026, 8, 5), date(2026, 8, 6)]
    );
}

#[test]
fn next_weekday_is_strictly_future() {
    // Tuesday reference: next monday lands in the following week.
    assert_eq!(resolve("next monday", reference()), vec![date(2026, 8, 10)]);
}

#[test]
fn bare_weekday_never_resolves_to_today() {
    // Reference is a Tuesday; a bare "tuesday" rolls a full week.
    assert_eq!(resolve("tuesday", reference()), vec![date(2026, 8, 11)]);
}

#[test]
fn last_weekday_is_strictly_past() {
    assert_eq!(resolve("last friday", reference()), vec![date(2026, 7, 31)]);
    // Same weekday as the reference rolls back a full week.
    assert_eq!(resolve("last tuesday", reference()), vec![date(2026, 7, 28)]);
}

#[test]
fn week_shift_applies_before_weekday_lookup() {
    // "last week friday": reference shifts to 2026-07-28 (Tue), then the
    // bare weekday resolves forward.
    assert_eq!(
        resolve("last week friday", reference()),
        vec![date(2026, 7, 31)]
    );
}

#[test]
fn numeric_day_offsets() {
    assert_eq!(resolve("5 days ago", reference()), vec![date(2026, 7, 30)]);
    assert_eq!(
        resolve("3 days from now", reference()),
        vec![date(2026, 8, 7)]
    );
    assert_eq!(resolve("2 days later", reference()), vec![date(2026, 8, 6)]);
}

#[test]
fn month_name_day_resolves_in_current_year() {
    assert_eq!(resolve("sep 25", reference()), vec![date(2026, 9, 25)]);
    assert_eq!(resolve("september25", reference()), vec![date(2026, 9, 25)]);
}

#[test]
fn past_month_name_is_discarded_not_rolled_forward() {
    // January is before the August reference; no next-year guessing.
    assert!(resolve("jan 5", reference()).is_empty());
}

#[test]
fn month_name_with_year_keeps_that_year() {
    assert_eq!(resolve("25sep2024", reference()), vec![date(2024, 9, 25)]);
    assert_eq!(resolve("25-sep-2026", reference()), vec![date(2026, 9, 25)]);
}

#[test]
fn application_phrasing_is_stripped_before_parsing() {
    assert_eq!(
        resolve("I want to apply SL for yesterday", reference()),
        vec![date(2026, 8, 3)]
    );
    assert_eq!(
        resolve("apply el leave for 25-09-2026", reference()),
        vec![date(2026, 9, 25)]
    );
}

#[test]
fn unparseable_text_yields_empty_not_today() {
    assert!(resolve("please help me", reference()).is_empty());
    assert!(resolve("apply for leave", reference()).is_empty());
}

#[test]
fn inclusive_range_spans_every_calendar_day() {
    // 2026-09-25 is a Friday; the span crosses a weekend.
    let dates = resolve("25-09-2026 to 29-09-2026", reference());
    assert_eq!(
        dates,
        vec![
            date(2026, 9, 25),
            date(2026, 9, 26),
            date(2026, 9, 27),
            date(2026, 9, 28),
            date(2026, 9, 29),
        ]
    );
}

#[test]
fn workdays_range_skips_the_weekend() {
    let dates = resolve_workdays("25-09-2026 to 29-09-2026", reference());
    assert_eq!(
        dates,
        vec![date(2026, 9, 25), date(2026, 9, 28), date(2026, 9, 29)]
    );
}

#[test]
fn range_expansion_helpers_differ_only_on_weekends() {
    let start = date(2026, 9, 25);
    let end = date(2026, 9, 29);
    assert_eq!(resolve_range_inclusive(start, end).len(), 5);
    assert_eq!(resolve_range_workdays_only(start, end).len(), 3);
}

#[test]
fn range_between_weekday_names() {
    // friday -> 2026-08-07, monday -> 2026-08-10 from the Tuesday reference
    let inclusive = resolve("friday to monday", reference());
    assert_eq!(inclusive.len(), 4);
    let workdays = resolve_workdays("from friday to monday", reference());
    assert_eq!(workdays, vec![date(2026, 8, 7), date(2026, 8, 10)]);
}

#[test]
fn reversed_range_falls_through() {
    // End before start is not a range; the numeric scan still picks up
    // both literal dates, with nothing expanded in between.
    let dates = resolve("29-09-2026 to 25-09-2026", reference());
    assert_eq!(dates, vec![date(2026, 9, 25), date(2026, 9, 29)]);
}

#[test]
fn output_is_sorted_and_deduplicated() {
    let dates = resolve("28-09-2026 25-09-2026 28-09-2026", reference());
    assert_eq!(dates, vec![date(2026, 9, 25), date(2026, 9, 28)]);
}
