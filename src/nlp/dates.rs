//! Calendar resolver: turn a date-like text fragment into concrete dates.
//!
//! Strategies are tried in priority order and the first one that yields at
//! least one date wins. An empty result means "ask the user to clarify";
//! callers must never substitute today for it.
//!
//! Two range expansions exist on purpose: the single-shot parser expands a
//! range over every calendar day, the conversational flow skips weekends.
//! Pick the variant per call site; they are not interchangeable.

use crate::utils::date::{is_weekend, span_days};
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

/// Range expansion behavior, named per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Inclusive,
    WorkdaysOnly,
}

const RANGE_SEPARATORS: [&str; 5] = [" to ", " till ", " until ", " through ", " - "];

const MONTHS: [(&str, u32); 23] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("june", 6),
    ("july", 7),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

const WEEKDAYS: [(&str, i64); 14] = [
    ("monday", 0),
    ("tuesday", 1),
    ("wednesday", 2),
    ("thursday", 3),
    ("friday", 4),
    ("saturday", 5),
    ("sunday", 6),
    ("mon", 0),
    ("tue", 1),
    ("wed", 2),
    ("thu", 3),
    ("fri", 4),
    ("sat", 5),
    ("sun", 6),
];

/// Strip application verbs, leave-type words and stray articles so they do
/// not shadow the actual date fragment. Multi-word phrases go first; short
/// words are removed only as whole tokens ("day", "days", "and" stay: the
/// relative expressions need them).
pub fn clean(text: &str) -> String {
    let mut t = text.to_lowercase();
    for phrase in [
        "i want to apply",
        "would like to apply",
        "apply for",
        "i need",
        "want to take",
    ] {
        t = t.replace(phrase, " ");
    }
    let drop_tokens = [
        "take", "leave", "leaves", "sl", "el", "cl", "sick", "earned", "casual", "medical",
        "vacation", "emergency", "apply", "for", "a", "an", "the", "on",
    ];
    let kept: Vec<&str> = t
        .split_whitespace()
        .filter(|tok| {
            let bare: String = tok.chars().filter(|c| c.is_alphanumeric()).collect();
            !drop_tokens.contains(&bare.as_str())
        })
        .collect();
    kept.join(" ")
}

/// Single-shot variant: explicit ranges include weekends.
pub fn resolve(text: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    resolve_with(text, reference, RangeMode::Inclusive)
}

/// Conversational variant: explicit ranges skip weekends.
pub fn resolve_workdays(text: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    resolve_with(text, reference, RangeMode::WorkdaysOnly)
}

fn resolve_with(text: &str, reference: NaiveDate, mode: RangeMode) -> Vec<NaiveDate> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    if let Some(dates) = resolve_range(&cleaned, reference, mode)
        && !dates.is_empty()
    {
        return dedup_sorted(dates);
    }

    let numeric = scan_numeric(&cleaned, reference);
    if !numeric.is_empty() {
        return dedup_sorted(numeric);
    }

    if let Some(d) = explicit_formats(&cleaned) {
        return vec![d];
    }

    if let Some(d) = month_name_day(&cleaned, reference) {
        return vec![d];
    }

    dedup_sorted(relative_all(&cleaned, reference))
}

/// Expand an explicit start..end range over every calendar day.
pub fn resolve_range_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    span_days(start, end)
}

/// Expand an explicit start..end range, skipping Saturdays and Sundays.
pub fn resolve_range_workdays_only(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    span_days(start, end)
        .into_iter()
        .filter(|d| !is_weekend(*d))
        .collect()
}

fn resolve_range(text: &str, reference: NaiveDate, mode: RangeMode) -> Option<Vec<NaiveDate>> {
    for sep in RANGE_SEPARATORS {
        if let Some((left, right)) = text.split_once(sep) {
            let start = resolve_fragment(left.trim(), reference)?;
            let end = resolve_fragment(right.trim(), reference)?;
            if start > end {
                return None;
            }
            return Some(match mode {
                RangeMode::Inclusive => resolve_range_inclusive(start, end),
                RangeMode::WorkdaysOnly => resolve_range_workdays_only(start, end),
            });
        }
    }
    None
}

/// Resolve one side of a range through the single-date strategy chain.
fn resolve_fragment(fragment: &str, reference: NaiveDate) -> Option<NaiveDate> {
    scan_numeric(fragment, reference)
        .into_iter()
        .next()
        .or_else(|| explicit_formats(fragment))
        .or_else(|| month_name_day(fragment, reference))
        .or_else(|| relative_all(fragment, reference).into_iter().next())
}

/// Explicit numeric dates: D-M-Y, D-M, Y-M-D. All matches are collected.
fn scan_numeric(text: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    let re = Regex::new(r"\b(\d{1,4})[-/](\d{1,2})(?:[-/](\d{1,4}))?\b").unwrap();
    let mut out = Vec::new();
    for caps in re.captures_iter(text) {
        let first: i64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let second: u32 = match caps[2].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let third: Option<i64> = caps.get(3).and_then(|m| m.as_str().parse().ok());

        let parsed = match third {
            // Y-M-D when the leading number carries the century, D-M-Y otherwise.
            Some(y) if caps[1].len() == 4 => {
                NaiveDate::from_ymd_opt(first as i32, second, y as u32)
            }
            Some(y) => {
                let year = if caps[3].len() == 4 {
                    y as i32
                } else {
                    2000 + y as i32
                };
                NaiveDate::from_ymd_opt(year, second, first as u32)
            }
            // D-M with the current year.
            None => NaiveDate::from_ymd_opt(reference.year(), second, first as u32),
        };
        if let Some(d) = parsed {
            out.push(d);
        }
    }
    out
}

/// Full explicit formats with a month name and year, e.g. "25sep2024",
/// "25-sep-2025", "sep 25 2025".
fn explicit_formats(text: &str) -> Option<NaiveDate> {
    let t = text.trim();
    for fmt in [
        "%d-%b-%Y", "%d %b %Y", "%d%b%Y", "%b %d %Y", "%b %d, %Y", "%d-%B-%Y", "%d %B %Y",
        "%d%B%Y", "%Y-%m-%d",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d);
        }
    }
    None
}

/// Month name plus a bare day number, resolved against the current year.
/// A result before the reference date is discarded rather than rolled
/// forward a year. Fragments that carry their own 4-digit year are left
/// to the explicit-format parser.
fn month_name_day(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if Regex::new(r"\d{4}").unwrap().is_match(text) {
        return None;
    }
    let month = MONTHS
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|(_, n)| *n)?;
    let day: u32 = Regex::new(r"(\d{1,2})")
        .unwrap()
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    let date = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
    if date < reference {
        return None;
    }
    Some(date)
}

/// Relative expressions: single-word anchors (all occurrences, so
/// "tomorrow and the day after" yields two dates), week shifts, weekday
/// names and "N days ago / from now".
fn relative_all(text: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut t = text.to_string();

    // Numeric offsets first: "2 days from now" must not fall into the
    // bare "now" anchor below.
    let ago = Regex::new(r"(\d+)\s*days?\s*ago").unwrap();
    if let Some(caps) = ago.captures(&t)
        && let Ok(n) = caps[1].parse::<i64>()
    {
        return vec![reference - Duration::days(n)];
    }
    let ahead = Regex::new(r"(\d+)\s*days?\s*(?:from now|later)").unwrap();
    if let Some(caps) = ahead.captures(&t)
        && let Ok(n) = caps[1].parse::<i64>()
    {
        return vec![reference + Duration::days(n)];
    }

    // Longer phrases first so they shadow their suffixes; "day after" /
    // "day before" cover the elliptical follow-up to tomorrow/yesterday.
    let anchors: [(&str, i64); 6] = [
        ("day after tomorrow", 2),
        ("day before yesterday", -2),
        ("day after", 2),
        ("day before", -2),
        ("tomorrow", 1),
        ("yesterday", -1),
    ];
    for (phrase, offset) in anchors {
        while t.contains(phrase) {
            out.push(reference + Duration::days(offset));
            t = t.replacen(phrase, " ", 1);
        }
    }
    if has_word(&t, "today") || has_word(&t, "now") {
        out.push(reference);
        t = t.replacen("today", " ", 1);
    }
    if !out.is_empty() {
        return out;
    }

    // "last week" / "next week" shift the reference before the residual
    // text is examined.
    let mut base = reference;
    if t.contains("last week") {
        base -= Duration::days(7);
        t = t.replace("last week", " ");
    } else if t.contains("next week") {
        base += Duration::days(7);
        t = t.replace("next week", " ");
    }

    if let Some(d) = weekday(&t, base) {
        return vec![d];
    }

    Vec::new()
}

/// Nearest occurrence of a named weekday. A same-day hit always rolls a
/// full week: a bare weekday mention never resolves to the reference date
/// itself.
fn weekday(text: &str, base: NaiveDate) -> Option<NaiveDate> {
    let target = WEEKDAYS
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|(_, n)| *n)?;
    let current = base.weekday().num_days_from_monday() as i64;

    if text.contains("last") {
        let mut back = (current - target).rem_euclid(7);
        if back == 0 {
            back = 7;
        }
        Some(base - Duration::days(back))
    } else {
        let mut ahead = (target - current).rem_euclid(7);
        if ahead == 0 {
            ahead = 7;
        }
        Some(base + Duration::days(ahead))
    }
}

fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric()).any(|t| t == word)
}

fn dedup_sorted(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    dates.sort();
    dates.dedup();
    dates
}
