use leavedesk::models::LeaveType;
use leavedesk::nlp::intent::{
    MessageKind, bare_leave_type, classify_leave_type, classify_message, extract_reason,
    is_application,
};

#[test]
fn leave_type_keywords_map_to_tags() {
    assert_eq!(classify_leave_type("apply el please"), Some(LeaveType::Earned));
    assert_eq!(classify_leave_type("vacation next month"), Some(LeaveType::Earned));
    assert_eq!(classify_leave_type("i have a fever"), Some(LeaveType::Sick));
    assert_eq!(classify_leave_type("medical appointment"), Some(LeaveType::Sick));
    assert_eq!(classify_leave_type("casual day off"), Some(LeaveType::Casual));
    assert_eq!(classify_leave_type("family emergency"), Some(LeaveType::Casual));
}

#[test]
fn priority_is_el_then_sl_then_cl() {
    assert_eq!(
        classify_leave_type("el because i am sick"),
        Some(LeaveType::Earned)
    );
    assert_eq!(
        classify_leave_type("sick emergency"),
        Some(LeaveType::Sick)
    );
}

#[test]
fn no_keyword_means_none() {
    assert_eq!(classify_leave_type("hello there"), None);
    assert_eq!(classify_leave_type("what can you do"), None);
}

#[test]
fn keywords_match_whole_tokens_only() {
    // "hello" contains the letters "el" but is not a leave type.
    assert_eq!(classify_leave_type("hello"), None);
    assert_eq!(classify_leave_type("cancel"), None);
}

#[test]
fn bare_codes_classify_directly_any_case() {
    assert_eq!(bare_leave_type("el"), Some(LeaveType::Earned));
    assert_eq!(bare_leave_type("SL"), Some(LeaveType::Sick));
    assert_eq!(bare_leave_type(" Cl "), Some(LeaveType::Casual));
    assert_eq!(bare_leave_type("el please"), None);
}

#[test]
fn application_detection_needs_verb_and_leave() {
    assert!(is_application("I want to apply for leave tomorrow"));
    assert!(is_application("need leave on friday"));
    assert!(is_application("I would like to take leave"));
    assert!(!is_application("leave me alone"));
    assert!(!is_application("apply the patch"));
}

#[test]
fn message_kinds() {
    assert_eq!(
        classify_message("I want to apply for leave"),
        MessageKind::Apply
    );
    assert_eq!(classify_message("what is my balance"), MessageKind::Balance);
    assert_eq!(classify_message("application status"), MessageKind::Status);
    assert_eq!(classify_message("what are the leave policies"), MessageKind::Policy);
    assert_eq!(classify_message("hello"), MessageKind::Greeting);
    assert_eq!(classify_message("help"), MessageKind::Help);
    assert_eq!(classify_message("what's the weather"), MessageKind::Other);
}

#[test]
fn application_wins_over_balance_wording() {
    assert_eq!(
        classify_message("i want to apply leave, check balance later"),
        MessageKind::Apply
    );
}

#[test]
fn reason_extraction() {
    assert_eq!(extract_reason("apply el for vacation"), "Vacation");
    assert_eq!(extract_reason("i have a fever"), "Medical");
    assert_eq!(extract_reason("urgent work at home"), "Emergency");
    assert_eq!(extract_reason("my sister's wedding"), "Family function");
    assert_eq!(extract_reason("apply cl for tomorrow"), "Personal");
}
