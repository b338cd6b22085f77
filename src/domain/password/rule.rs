// src/domain/password/rule.rs
use crate::domain::validation::ValidationResult;
use serde::Serialize;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Short message shared by every rule when it is fulfilled.
pub const SHORT_FULFILLED_MESSAGE: &str = "Your password looks correct!";

/// Password sub-rules. Declaration order is evaluation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRuleKind {
    Length,
    CapitalLetter,
    SpecialCharacter,
    Number,
}

impl PasswordRuleKind {
    pub const ALL: [PasswordRuleKind; 4] = [
        PasswordRuleKind::Length,
        PasswordRuleKind::CapitalLetter,
        PasswordRuleKind::SpecialCharacter,
        PasswordRuleKind::Number,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordRuleKind::Length => "length",
            PasswordRuleKind::CapitalLetter => "capital_letter",
            PasswordRuleKind::SpecialCharacter => "special_character",
            PasswordRuleKind::Number => "number",
        }
    }

    pub fn fulfilled_message(&self) -> &'static str {
        match self {
            PasswordRuleKind::Length => "Your password is longer than 5 characters.",
            PasswordRuleKind::CapitalLetter => "Your password contains a capital letter.",
            PasswordRuleKind::SpecialCharacter => "Your password contains a special character.",
            PasswordRuleKind::Number => "Your password contains a number.",
        }
    }

    pub fn unfulfilled_message(&self) -> &'static str {
        match self {
            PasswordRuleKind::Length => {
                "Unfortunately, your password is too short. Please provide a password with at least 6 characters and try again."
            }
            PasswordRuleKind::CapitalLetter => {
                "Unfortunately, your password doesn't contain a capital letter. Please correct it and try again."
            }
            PasswordRuleKind::SpecialCharacter => {
                "Unfortunately, your password doesn't contain a special character. Please correct it and try again."
            }
            PasswordRuleKind::Number => {
                "Unfortunately, your password doesn't contain a number. Please correct it and try again."
            }
        }
    }

    pub fn short_unfulfilled_message(&self) -> &'static str {
        match self {
            PasswordRuleKind::Length => "Your password is too short.",
            PasswordRuleKind::CapitalLetter => "Doesn't contain a capital letter.",
            PasswordRuleKind::SpecialCharacter => "Doesn't contain a special character.",
            PasswordRuleKind::Number => "Doesn't contain a number.",
        }
    }

    pub fn short_fulfilled_message(&self) -> &'static str {
        SHORT_FULFILLED_MESSAGE
    }

    pub fn is_satisfied_by(&self, candidate: &str) -> bool {
        match self {
            PasswordRuleKind::Length => candidate.graphemes(true).count() >= MIN_PASSWORD_LENGTH,
            PasswordRuleKind::CapitalLetter => candidate.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRuleKind::SpecialCharacter => {
                candidate.chars().any(|c| !c.is_ascii_alphanumeric())
            }
            PasswordRuleKind::Number => candidate.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Evaluate the rule. Short messages are meant for inline field feedback,
    /// long ones for the full policy listing.
    pub fn evaluate(&self, candidate: &str, use_short_message: bool) -> ValidationResult {
        let passed = self.is_satisfied_by(candidate);
        let message = match (passed, use_short_message) {
            (true, true) => self.short_fulfilled_message(),
            (true, false) => self.fulfilled_message(),
            (false, true) => self.short_unfulfilled_message(),
            (false, false) => self.unfulfilled_message(),
        };
        ValidationResult::new(passed, message)
    }
}

impl fmt::Display for PasswordRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
