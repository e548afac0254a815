use chrono::NaiveDate;
use leavedesk::config::Config;
use leavedesk::models::{Balance, LeaveType};
use leavedesk::policy::rules::LeaveRules;
use leavedesk::policy::validator::{Violation, validate};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tuesday 2026-08-04, matching the resolver tests.
fn reference() -> NaiveDate {
    date(2026, 8, 4)
}

fn balance(el: i64, sl: i64, cl: i64) -> Balance {
    Balance {
        user_id: 1002,
        el,
        sl,
        cl,
        tl: el + sl + cl,
        admin_id: 5000,
        join_date: None,
    }
}

fn no_holidays() -> Config {
    Config {
        public_holidays: Vec::new(),
        ..Config::default()
    }
}

fn check(
    lt: LeaveType,
    dates: &[NaiveDate],
    bal: &Balance,
    taken: &HashSet<NaiveDate>,
    config: &Config,
) -> Vec<Violation> {
    validate(lt, dates, bal, taken, reference(), &LeaveRules::default(), config)
}

#[test]
fn weekend_dates_are_rejected() {
    // 2026-08-08 is a Saturday.
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 8)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(matches!(v[0], Violation::Weekend(d) if d == date(2026, 8, 8)));
}

#[test]
fn configured_holidays_are_rejected() {
    let config = Config {
        public_holidays: vec!["2026-08-10".to_string()],
        ..Config::default()
    };
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 10)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &config,
    );
    assert!(v.iter().any(|x| matches!(x, Violation::PublicHoliday(_))));
}

#[test]
fn sick_leave_rejects_any_future_date() {
    let v = check(
        LeaveType::Sick,
        &[date(2026, 8, 5)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(x, Violation::SickLeaveFuture(_))));
}

#[test]
fn sick_leave_past_window_boundary() {
    // reference - 15 days = 2026-07-20 (Monday): accepted.
    let v = check(
        LeaveType::Sick,
        &[date(2026, 7, 20)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.is_empty());

    // reference - 16 days = 2026-07-19, but that is a Sunday, so step
    // back one more weekday to keep the weekend rule out of the picture:
    // 2026-07-17 (Friday) is 18 days before the reference.
    let v = check(
        LeaveType::Sick,
        &[date(2026, 7, 17)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(x, Violation::SickLeaveTooOld { .. })));
}

#[test]
fn earned_leave_enforces_thirty_day_window() {
    // 2026-09-07 is a Monday 34 days ahead.
    let v = check(
        LeaveType::Earned,
        &[date(2026, 9, 7), date(2026, 9, 8), date(2026, 9, 9)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(x, Violation::OutsideWindow { .. })));
}

#[test]
fn earned_leave_minimum_three_dates() {
    for n in 1..=2usize {
        let dates: Vec<NaiveDate> = (0..n).map(|i| date(2026, 8, 10 + i as u32)).collect();
        let v = check(
            LeaveType::Earned,
            &dates,
            &balance(5, 5, 5),
            &HashSet::new(),
            &no_holidays(),
        );
        assert!(
            v.iter().any(|x| matches!(x, Violation::MinDuration { .. })),
            "{} dates must violate the EL minimum",
            n
        );
    }
}

#[test]
fn earned_leave_three_weekdays_in_window_pass() {
    // Mon..Wed 2026-08-10..12.
    let v = check(
        LeaveType::Earned,
        &[date(2026, 8, 10), date(2026, 8, 11), date(2026, 8, 12)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.is_empty());
}

#[test]
fn casual_leave_maximum_two_dates() {
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 10), date(2026, 8, 11), date(2026, 8, 12)],
        &balance(5, 5, 5),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(x, Violation::MaxDuration { allowed: 2, got: 3 })));
}

#[test]
fn insufficient_balance_reports_available_vs_required() {
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 10), date(2026, 8, 11)],
        &balance(5, 5, 1),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::InsufficientBalance {
            available: 1,
            required: 2,
            ..
        }
    )));
}

#[test]
fn overlap_reports_first_conflict_only() {
    let mut taken = HashSet::new();
    taken.insert(date(2026, 8, 10));
    taken.insert(date(2026, 8, 11));
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 10), date(2026, 8, 11)],
        &balance(5, 5, 5),
        &taken,
        &no_holidays(),
    );
    let conflicts: Vec<_> = v
        .iter()
        .filter(|x| matches!(x, Violation::DateConflict(_)))
        .collect();
    assert_eq!(conflicts.len(), 1);
}

#[test]
fn independent_categories_are_concatenated() {
    // One date on a Saturday AND an insufficient balance: both reported.
    let v = check(
        LeaveType::Casual,
        &[date(2026, 8, 8)],
        &balance(5, 5, 0),
        &HashSet::new(),
        &no_holidays(),
    );
    assert!(v.iter().any(|x| matches!(x, Violation::Weekend(_))));
    assert!(v.iter().any(|x| matches!(x, Violation::InsufficientBalance { .. })));
}
