//! Chat response templates. Pure string building; all decisions happen
//! in the flow module.

use crate::models::{Balance, LeaveRequest, LeaveType};
use crate::policy::rules::LeaveRules;
use crate::policy::validator::Violation;
use crate::utils::date::display_date;
use chrono::NaiveDate;

pub fn greeting(balance: Option<&Balance>) -> String {
    match balance {
        Some(b) => format!(
            "👋 Hello! I'm your leave management assistant.\n\n\
             📊 Your current leave balance:\n\
             • 🏖️ Earned Leave (EL): {} days\n\
             • 🤒 Sick Leave (SL): {} days\n\
             • 🎯 Casual Leave (CL): {} days\n\
             • 📈 Total available: {} days\n\n\
             How can I help you with leave policies, applications, or balances today?",
            b.el, b.sl, b.cl, b.tl
        ),
        None => "Hello! I'm your leave management assistant. How can I help you with leave \
                 policies, applications, or balances today?"
            .to_string(),
    }
}

pub fn balance_summary(balance: Option<&Balance>, today: NaiveDate) -> String {
    match balance {
        Some(b) => format!(
            "📊 Your Leave Balance:\n\n\
             • EL: {} days (min 3 days)\n\
             • SL: {} days (today/past dates)\n\
             • CL: {} days (max 2 days)\n\
             • Total: {} days\n\n\
             Today: {}",
            b.el,
            b.sl,
            b.cl,
            b.tl,
            display_date(today)
        ),
        None => "❌ Unable to fetch your leave balance.".to_string(),
    }
}

pub fn status_summary(requests: &[LeaveRequest]) -> String {
    if requests.is_empty() {
        return "📋 No applications found.".to_string();
    }
    let mut out = String::from("📋 Your Applications:\n\n");
    for req in requests.iter().rev().take(5) {
        out.push_str(&format!(
            "{} {} - {} - {}\n",
            req.status.icon(),
            req.leave_date.format("%Y-%m-%d"),
            req.leave_type.code(),
            req.status.to_db_str()
        ));
    }
    out
}

pub fn policy_summary(rules: &LeaveRules, today: NaiveDate) -> String {
    format!(
        "📚 Leave Policies:\n\n\
         • EL: {} days/year, min {} days at a time, ±{} days window\n\
         • SL: {} days/year, today/past dates only, max {} days before\n\
         • CL: {} days/year, max {} days at a time, ±{} days window\n\
         • No leaves on weekends or public holidays\n\n\
         Questions? Contact {} ({})\n\
         Today: {}",
        rules.el.max_per_year,
        rules.el.min_days.unwrap_or(3),
        rules.el.window_days.unwrap_or(30),
        rules.sl.max_per_year,
        rules.sl.past_window_days.unwrap_or(15),
        rules.cl.max_per_year,
        rules.cl.max_consecutive.unwrap_or(2),
        rules.cl.window_days.unwrap_or(30),
        rules.contact.email,
        rules.contact.hours,
        display_date(today)
    )
}

/// Shown when the user sends a bare EL/SL/CL outside an active flow.
pub fn leave_type_info(lt: LeaveType) -> String {
    match lt {
        LeaveType::Earned => "🏖️ Earned Leave (EL)\n\
             • For planned vacations\n\
             • Minimum 3 consecutive days required\n\
             • Apply within a ±30 days window\n\n\
             Try: \"Apply EL for 3 days from tomorrow\" or \"Apply EL from 25-12-2026 to 29-12-2026\""
            .to_string(),
        LeaveType::Sick => "🤒 Sick Leave (SL)\n\
             • For medical reasons\n\
             • Can apply for today and past dates\n\
             • Maximum 15 days in the past\n\n\
             Try: \"Apply SL for today\" or \"Apply SL for yesterday\""
            .to_string(),
        LeaveType::Casual => "🎯 Casual Leave (CL)\n\
             • For emergencies\n\
             • Maximum 2 consecutive days\n\
             • Apply within a ±30 days window\n\n\
             Try: \"Apply CL for tomorrow\""
            .to_string(),
    }
}

pub fn help() -> String {
    "🤖 How to apply for leave:\n\n\
     1. Say: \"Apply for leave\" or \"I want to apply leave\"\n\
     2. I'll ask: \"What type of leave? (EL/SL/CL)\"\n\
     3. You specify: \"EL\", \"SL\", or \"CL\"\n\
     4. I'll ask: \"When? (dates)\"\n\
     5. You provide dates: \"25-09-2026\" or \"today\" or \"25-09-2026 to 27-09-2026\"\n\
     6. I'll submit your application!\n\n\
     Other commands: \"Check balance\", \"Application status\", \"Leave policies\""
        .to_string()
}

pub fn unknown(message: &str) -> String {
    format!(
        "🤔 I understand you're asking about: \"{}\"\n\n\
         I specialize in leave management. Here's what I can help with:\n\n\
         • Apply for leave (I'll guide you step by step)\n\
         • Check your leave balance\n\
         • View application status\n\
         • Explain leave policies\n\n\
         To apply for leave, just say: \"Apply for leave\"",
        message
    )
}

pub fn ask_leave_type() -> String {
    "🏖️ What type of leave? (EL/SL/CL)\n\n\
     Please specify:\n\
     • EL - Earned Leave (min 3 days, for vacations)\n\
     • SL - Sick Leave (today/past dates, for medical)\n\
     • CL - Casual Leave (max 2 days, for emergencies)\n\n\
     You can just type: EL, SL, or CL"
        .to_string()
}

pub fn ask_leave_type_again() -> String {
    "❓ I didn't catch the leave type.\n\n\
     Please specify: EL, SL, or CL\n\n\
     • EL - Earned Leave (min 3 days)\n\
     • SL - Sick Leave (today/past dates)\n\
     • CL - Casual Leave (max 2 days)"
        .to_string()
}

/// The single-shot variant asks for the type in different words; the
/// continuation detector keys on the phrase "specify the type".
pub fn ask_leave_type_single_shot() -> String {
    "To apply for leave, please specify the type:\n\n\
     • EL (Earned Leave) - for planned vacations (minimum 3 consecutive days)\n\
     • SL (Sick Leave) - for medical reasons (past dates only)\n\
     • CL (Casual Leave) - for emergencies (maximum 2 days)"
        .to_string()
}

pub fn ask_for_dates(lt: LeaveType, today: NaiveDate) -> String {
    format!(
        "📅 When for {}? (dates)\n\n\
         Please specify the date(s):\n\
         • \"today\" or \"tomorrow\"\n\
         • \"25-09-2026\" or \"25Sep2026\"\n\
         • \"25-09-2026 to 27-09-2026\"\n\
         • \"from Friday to Monday\"\n\n\
         Today: {}",
        lt.code(),
        display_date(today)
    )
}

pub fn ask_for_dates_again(lt: LeaveType, today: NaiveDate) -> String {
    format!(
        "❓ I need the dates for your {}.\n\n\
         Please specify when:\n\
         • \"today\" or \"tomorrow\"\n\
         • \"25-09-2026\" or \"25Sep2026\"\n\
         • \"from Friday to Monday\"\n\n\
         Today: {}",
        lt.code(),
        display_date(today)
    )
}

pub fn could_not_parse_dates(lt: LeaveType, today: NaiveDate) -> String {
    format!(
        "❌ Could not understand the date in your request\n\n\
         I couldn't figure out which date you want to apply {} for.\n\n\
         Please try these formats:\n\
         • \"Apply {} for today\"\n\
         • \"Apply {} for 25-09-2026\"\n\
         • \"Apply {} for next Friday\"\n\n\
         Today: {}",
        lt.code(),
        lt.code(),
        lt.code(),
        lt.code(),
        display_date(today)
    )
}

pub fn validation_failure(violations: &[Violation]) -> String {
    let mut out: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
    out.push(String::new());
    out.push("Please start over with 'Apply for leave'.".to_string());
    out.join("\n")
}

pub fn submission_success(
    lt: LeaveType,
    dates: &[NaiveDate],
    submitted: usize,
    balance_after: i64,
) -> String {
    let date_range = if dates.len() > 1 {
        format!(
            "{} to {}",
            display_date(dates[0]),
            display_date(dates[dates.len() - 1])
        )
    } else {
        display_date(dates[0])
    };
    format!(
        "✅ Leave Application Submitted!\n\n\
         📋 Details:\n\
         • Type: {}\n\
         • Date: {} ({} day{})\n\
         • Status: ⏳ Pending Approval\n\
         • Balance after approval: {} {} days\n\n\
         Your manager will review your request.",
        lt.code(),
        date_range,
        submitted,
        if submitted == 1 { "" } else { "s" },
        balance_after,
        lt.code()
    )
}

pub fn storage_busy() -> String {
    "⚠️ The leave store is busy right now. Your request was not saved. Please try again in a \
     moment."
        .to_string()
}

pub fn error_fallback() -> String {
    "I apologize, but I'm having trouble processing your request right now. Please try again."
        .to_string()
}
