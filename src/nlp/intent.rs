//! Keyword classification of incoming chat messages.
//!
//! Both classifiers are ordered lists of (predicate, tag) pairs evaluated
//! first-match-wins; the order is part of the contract (EL keywords win
//! over SL, SL over CL; an application beats a balance inquiry).

use crate::models::LeaveType;

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn has_token(text: &str, word: &str) -> bool {
    tokens(text).iter().any(|t| t == word)
}

fn has_any_token(text: &str, words: &[&str]) -> bool {
    let toks = tokens(text);
    words.iter().any(|w| toks.iter().any(|t| t == w))
}

/// Map free text to a leave-type tag. Fixed priority: EL, SL, CL.
pub fn classify_leave_type(text: &str) -> Option<LeaveType> {
    let rules: [(&[&str], LeaveType); 3] = [
        (&["el", "earned", "vacation"], LeaveType::Earned),
        (&["sl", "sick", "medical", "fever", "illness"], LeaveType::Sick),
        (&["cl", "casual", "emergency"], LeaveType::Casual),
    ];
    let toks = tokens(text);
    for (words, tag) in rules {
        if words.iter().any(|w| toks.iter().any(|t| t == w)) {
            return Some(tag);
        }
    }
    None
}

/// True when the message is exactly a bare leave-type code ("el", "SL", ...).
pub fn bare_leave_type(text: &str) -> Option<LeaveType> {
    LeaveType::from_code(text.trim())
}

/// What the user is asking for, outside of an active application flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Apply,
    Balance,
    Status,
    Policy,
    Greeting,
    Help,
    Other,
}

/// An application request mentions an application verb together with the
/// word "leave".
pub fn is_application(text: &str) -> bool {
    let lower = text.to_lowercase();
    let verb = has_any_token(text, &["apply", "want", "need", "request"])
        || lower.contains("would like");
    verb && has_token(text, "leave")
}

pub fn classify_message(text: &str) -> MessageKind {
    type Predicate = fn(&str) -> bool;
    let rules: [(Predicate, MessageKind); 6] = [
        (is_application, MessageKind::Apply),
        (
            |t| has_any_token(t, &["balance", "remaining"]) || t.to_lowercase().contains("leave left"),
            MessageKind::Balance,
        ),
        (
            |t| has_any_token(t, &["status", "pending", "applications"]),
            MessageKind::Status,
        ),
        (
            |t| has_any_token(t, &["policy", "policies", "rule", "rules", "regulation"]),
            MessageKind::Policy,
        ),
        (
            |t| has_any_token(t, &["hello", "hi", "hey", "greetings"]),
            MessageKind::Greeting,
        ),
        (|t| has_any_token(t, &["help", "options", "menu"]), MessageKind::Help),
    ];
    for (pred, kind) in rules {
        if pred(text) {
            return kind;
        }
    }
    MessageKind::Other
}

/// Simple reason detection from the message wording.
pub fn extract_reason(text: &str) -> &'static str {
    let rules: [(&[&str], &'static str); 5] = [
        (&["vacation"], "Vacation"),
        (&["sick", "fever", "medical", "ill", "doctor", "hospital"], "Medical"),
        (&["emergency", "urgent"], "Emergency"),
        (&["family", "wedding", "marriage"], "Family function"),
        (&["festival", "celebration"], "Festival"),
    ];
    for (words, reason) in rules {
        if has_any_token(text, words) {
            return reason;
        }
    }
    "Personal"
}
