// src/domain/email.rs
use crate::domain::validation::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_VALID_MESSAGE: &str = "The email looks correct!";
pub const EMAIL_INVALID_MESSAGE: &str = "The email format is wrong!";

// Anchored: the whole candidate must match, not a substring of it.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is a valid regex")
});

pub fn is_well_formed_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Check `candidate` against the email format rule. Total over any input,
/// the empty string simply fails.
pub fn validate_email(candidate: &str) -> ValidationResult {
    if is_well_formed_email(candidate) {
        ValidationResult::passed(EMAIL_VALID_MESSAGE)
    } else {
        ValidationResult::failed(EMAIL_INVALID_MESSAGE)
    }
}
