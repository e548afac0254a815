//! The leave-application conversation flow.
//!
//! Two entry shapes exist, mirroring the two interpreters this grew out
//! of: the step-by-step session flow (type, then dates, weekend-skipping
//! ranges) and the single-shot handler used by continuation replies
//! (everything in one message, calendar-inclusive ranges). The range
//! asymmetry is intentional and per call site.

use crate::chat::responder;
use crate::chat::session::{Session, Step};
use crate::config::Config;
use crate::db::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::{Duration, LeaveType, Role};
use crate::nlp::{dates, intent};
use crate::policy::rules::LeaveRules;
use crate::policy::validator;
use crate::utils::date::display_date;
use chrono::NaiveDate;

/// Idle + application message: pull whatever is already in the text and
/// ask for the rest.
pub fn start_application(
    ledger: &mut Ledger,
    session: &mut Session,
    config: &Config,
    rules: &LeaveRules,
    user_id: i64,
    text: &str,
    today: NaiveDate,
) -> AppResult<String> {
    let leave_type = intent::classify_leave_type(text);
    let parsed = dates::resolve_workdays(text, today);

    match (leave_type, parsed.is_empty()) {
        (Some(lt), false) => {
            // Both found: pass straight through step 2 to validation and
            // commit.
            session.step = Step::AwaitingDates;
            session.pending_type = Some(lt);
            session.pending_dates = parsed.clone();
            let reply = submit(ledger, config, rules, user_id, lt, &parsed, text, today);
            session.reset();
            reply
        }
        (Some(lt), true) => {
            session.step = Step::AwaitingDates;
            session.pending_type = Some(lt);
            Ok(responder::ask_for_dates(lt, today))
        }
        (None, _) => {
            session.step = Step::AwaitingType;
            Ok(responder::ask_leave_type())
        }
    }
}

/// AwaitingType: a classifiable reply advances to the date step,
/// anything else re-prompts without changing state.
pub fn supply_type(session: &mut Session, text: &str, today: NaiveDate) -> String {
    match intent::classify_leave_type(text) {
        Some(lt) => {
            session.pending_type = Some(lt);
            session.step = Step::AwaitingDates;
            responder::ask_for_dates(lt, today)
        }
        None => responder::ask_leave_type_again(),
    }
}

/// AwaitingDates: a resolvable reply runs validation and commit, then the
/// session goes back to Idle regardless of outcome.
pub fn supply_dates(
    ledger: &mut Ledger,
    session: &mut Session,
    config: &Config,
    rules: &LeaveRules,
    user_id: i64,
    text: &str,
    today: NaiveDate,
) -> AppResult<String> {
    let Some(lt) = session.pending_type else {
        // Lost track of the flow; start over.
        session.reset();
        return Ok(responder::ask_leave_type());
    };
    let parsed = dates::resolve_workdays(text, today);
    if parsed.is_empty() {
        return Ok(responder::ask_for_dates_again(lt, today));
    }
    session.pending_dates = parsed.clone();
    let reply = submit(ledger, config, rules, user_id, lt, &parsed, text, today);
    session.reset();
    reply
}

/// Single-shot handler: type and dates from one message. Ranges here
/// include weekends.
pub fn single_shot(
    ledger: &mut Ledger,
    config: &Config,
    rules: &LeaveRules,
    user_id: i64,
    text: &str,
    today: NaiveDate,
) -> AppResult<String> {
    let Some(lt) = intent::classify_leave_type(text) else {
        return Ok(responder::ask_leave_type_single_shot());
    };
    let parsed = dates::resolve(text, today);
    if parsed.is_empty() {
        return Ok(responder::could_not_parse_dates(lt, today));
    }
    submit(ledger, config, rules, user_id, lt, &parsed, text, today)
}

/// Continuation: the previous assistant turn asked the user to "specify
/// the type" and the reply is exactly EL/SL/CL. Re-run the single-shot
/// handler over the message that started it all plus the supplied type.
/// Covers replies that arrive after the in-memory session was lost.
pub fn try_continuation(
    ledger: &mut Ledger,
    config: &Config,
    rules: &LeaveRules,
    user_id: i64,
    text: &str,
    today: NaiveDate,
) -> AppResult<Option<String>> {
    let Some(lt) = intent::bare_leave_type(text) else {
        return Ok(None);
    };

    // History already contains the current turn; look behind it.
    let history = ledger.chat_history(user_id, 12)?;
    let asked_for_type = history
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant)
        .map(|m| m.message.to_lowercase().contains("specify the type"))
        .unwrap_or(false);
    if !asked_for_type {
        return Ok(None);
    }

    let original = history.iter().rev().find(|m| {
        m.role == Role::User
            && m.message != text
            && (intent::is_application(&m.message)
                || m.message.to_lowercase().contains("apply"))
    });
    let Some(original) = original else {
        return Ok(None);
    };

    let combined = format!("{} {}", original.message, lt.code());
    single_shot(ledger, config, rules, user_id, &combined, today).map(Some)
}

/// Validate and commit one application. Dates already committed before a
/// failing date stay committed; there is no rollback.
#[allow(clippy::too_many_arguments)]
fn submit(
    ledger: &mut Ledger,
    config: &Config,
    rules: &LeaveRules,
    user_id: i64,
    lt: LeaveType,
    dates: &[NaiveDate],
    original_text: &str,
    today: NaiveDate,
) -> AppResult<String> {
    let Some(balance) = ledger.balance(user_id)? else {
        return Ok("❌ Unable to check your leave balance. Please try 'Apply for leave' again."
            .to_string());
    };
    let taken = ledger.taken_dates(user_id)?;

    let violations = validator::validate(lt, dates, &balance, &taken, today, rules, config);
    if !violations.is_empty() {
        return Ok(responder::validation_failure(&violations));
    }

    let reason = intent::extract_reason(original_text);
    let mut submitted = 0;
    for &d in dates {
        // Re-checked per date: an overlap introduced mid-loop halts the
        // submission; earlier dates stay.
        if ledger.has_overlap(user_id, d)? {
            return Ok(format!(
                "❌ Date conflict: You already have leave on {}",
                display_date(d)
            ));
        }
        match ledger.add_request(user_id, d, lt, reason, Duration::FullDay) {
            Ok(()) => submitted += 1,
            Err(AppError::StorageContention(_)) => {
                return Ok(format!(
                    "❌ Failed to submit application for {}. The store might be locked. \
                     Please try again.",
                    display_date(d)
                ));
            }
            Err(e) => return Err(e),
        }
    }

    if submitted == 0 {
        return Ok("❌ Failed to submit leave application.".to_string());
    }
    Ok(responder::submission_success(
        lt,
        dates,
        submitted,
        balance.get(lt) - submitted as i64,
    ))
}
