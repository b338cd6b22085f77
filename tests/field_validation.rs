mod support;

use signup_core::application::dto::{FieldDirective, FieldValidityState};
use signup_core::application::field_stream::FieldValidationStream;
use signup_core::domain::{FieldKind, PasswordPolicy, PasswordRuleKind, validate_email};
use support::Recorder;

#[test]
fn email_stream_emits_one_state_per_input_in_order() {
    let mut field = FieldValidationStream::new(FieldKind::Email);
    let states = Recorder::attach(field.states());

    for text in ["", "a", "a@b.com"] {
        field.push_text(Some(text));
    }

    let states = states.values();
    assert_eq!(states.len(), 3);
    assert!(states[0].is_empty);
    assert!(!states[1].is_empty);
    assert!(!states[1].is_valid);
    assert!(!states[2].is_empty);
    assert!(states[2].is_valid);
    assert_eq!(states[2].result.message, "The email looks correct!");
}

#[test]
fn validity_follows_states_one_for_one() {
    let mut field = FieldValidationStream::new(FieldKind::Password);
    let validity = Recorder::attach(field.validity());

    for text in ["A", "Abcdef", "Abcdef1", "Abcdef1!", "Abcdef1!"] {
        field.push_text(Some(text));
    }

    assert_eq!(validity.values(), vec![false, false, false, true, true]);
}

#[test]
fn password_messages_walk_the_rules_in_order() {
    let mut field = FieldValidationStream::new(FieldKind::Password);
    let messages: Vec<String> = ["ab", "abcdef", "Abcdef", "Abcdef!", "Abcdef!1"]
        .into_iter()
        .map(|text| field.push_text(Some(text)).result.message)
        .collect();

    assert_eq!(
        messages,
        vec![
            "Your password is too short.",
            "Doesn't contain a capital letter.",
            "Doesn't contain a special character.",
            "Doesn't contain a number.",
            "Your password looks correct!",
        ]
    );
}

#[test]
fn directives_hide_verification_for_empty_text() {
    let mut field = FieldValidationStream::new(FieldKind::Email);
    field.push_text(Some("nope"));
    assert!(matches!(field.directive(), FieldDirective::Invalid { .. }));
    field.push_text(None);
    assert_eq!(field.directive(), FieldDirective::Neutral);
}

#[test]
fn evaluate_all_is_stable_for_any_input() {
    let policy = PasswordPolicy::new();
    for candidate in ["", " ", "Abc123!", "\n\t", "ÄÖÜ", "12345678901234567890"] {
        let entries = policy.evaluate_all(candidate);
        let order: Vec<PasswordRuleKind> = entries.iter().map(|entry| entry.rule).collect();
        assert_eq!(order, PasswordRuleKind::ALL);
        assert_eq!(entries, policy.evaluate_all(candidate));
    }
}

#[test]
fn documented_examples_hold() {
    let policy = PasswordPolicy::new();
    assert!(validate_email("a@b.co").passed);
    assert!(!validate_email("a@b").passed);
    assert!(!validate_email("").passed);
    assert_eq!(
        policy.evaluate_aggregate("ab", true).message,
        "Your password is too short."
    );
    assert!(policy.evaluate_aggregate("Abc123!", true).passed);
    assert_eq!(
        policy.evaluate_aggregate("abc123", true).message,
        "Doesn't contain a capital letter."
    );
}

#[test]
fn absent_and_empty_text_are_equivalent() {
    for kind in [FieldKind::Email, FieldKind::Password] {
        assert_eq!(
            FieldValidityState::evaluate(kind, None),
            FieldValidityState::evaluate(kind, Some(""))
        );
    }
}
