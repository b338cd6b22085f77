// src/domain/password/policy.rs
use crate::domain::password::rule::{PasswordRuleKind, SHORT_FULFILLED_MESSAGE};
use crate::domain::validation::ValidationResult;
use chrono::{DateTime, Utc};

pub const PASSWORD_VALID_MESSAGE: &str = SHORT_FULFILLED_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    pub rule: PasswordRuleKind,
    pub result: ValidationResult,
}

/// Result of every password rule for one candidate, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshot {
    entries: Vec<PolicyEntry>,
    captured_at: DateTime<Utc>,
}

impl PolicySnapshot {
    pub fn new(entries: Vec<PolicyEntry>, captured_at: DateTime<Utc>) -> Self {
        Self {
            entries,
            captured_at,
        }
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|entry| entry.result.passed)
    }

    pub fn failing(&self) -> impl Iterator<Item = &PolicyEntry> {
        self.entries.iter().filter(|entry| !entry.result.passed)
    }
}

/// Evaluates the fixed password rule set.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Every rule in declaration order, with the long messages used by the
    /// policy listing.
    pub fn evaluate_all(&self, candidate: &str) -> Vec<PolicyEntry> {
        PasswordRuleKind::ALL
            .iter()
            .map(|rule| PolicyEntry {
                rule: *rule,
                result: rule.evaluate(candidate, false),
            })
            .collect()
    }

    pub fn snapshot(&self, candidate: &str, captured_at: DateTime<Utc>) -> PolicySnapshot {
        PolicySnapshot::new(self.evaluate_all(candidate), captured_at)
    }

    /// First failing rule in declaration order, or the shared success result.
    pub fn evaluate_aggregate(&self, candidate: &str, use_short_message: bool) -> ValidationResult {
        PasswordRuleKind::ALL
            .iter()
            .map(|rule| rule.evaluate(candidate, use_short_message))
            .find(|result| !result.passed)
            .unwrap_or_else(|| ValidationResult::passed(PASSWORD_VALID_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_all_returns_every_rule_in_order() {
        let policy = PasswordPolicy::new();
        for candidate in ["", "ab", "Abc123!", "\u{1F980}\u{1F980}\u{1F980}\u{1F980}\u{1F980}\u{1F980}"] {
            let rules: Vec<_> = policy
                .evaluate_all(candidate)
                .into_iter()
                .map(|entry| entry.rule)
                .collect();
            assert_eq!(rules, PasswordRuleKind::ALL.to_vec());
        }
    }

    #[test]
    fn evaluate_all_uses_long_messages() {
        let entries = PasswordPolicy::new().evaluate_all("Abc123!");
        assert!(entries.iter().all(|entry| entry.result.passed));
        assert_eq!(
            entries[0].result.message,
            "Your password is longer than 5 characters."
        );
    }

    #[test]
    fn aggregate_reports_first_failure() {
        let result = PasswordPolicy::new().evaluate_aggregate("ab", true);
        assert!(!result.passed);
        assert_eq!(result.message, "Your password is too short.");
    }

    #[test]
    fn aggregate_skips_passing_rules() {
        let result = PasswordPolicy::new().evaluate_aggregate("abc123", true);
        assert!(!result.passed);
        assert_eq!(result.message, "Doesn't contain a capital letter.");
    }

    #[test]
    fn aggregate_passes_when_all_rules_pass() {
        let result = PasswordPolicy::new().evaluate_aggregate("Abc123!", true);
        assert!(result.passed);
        assert_eq!(result.message, "Your password looks correct!");
    }

    #[test]
    fn aggregate_long_form_uses_long_failure_message() {
        let result = PasswordPolicy::new().evaluate_aggregate("Abcdef1", false);
        assert_eq!(
            result.message,
            "Unfortunately, your password doesn't contain a special character. Please correct it and try again."
        );
    }

    #[test]
    fn snapshot_reports_failing_rules() {
        let snapshot = PasswordPolicy::new().snapshot("abcdef", Utc::now());
        let failing: Vec<_> = snapshot.failing().map(|entry| entry.rule).collect();
        assert_eq!(
            failing,
            vec![
                PasswordRuleKind::CapitalLetter,
                PasswordRuleKind::SpecialCharacter,
                PasswordRuleKind::Number,
            ]
        );
        assert!(!snapshot.all_passed());
    }
}
