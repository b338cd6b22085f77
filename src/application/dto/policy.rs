use crate::domain::{PasswordRuleKind, PolicySnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRowDto {
    pub rule: PasswordRuleKind,
    pub passed: bool,
    pub message: String,
}

/// Rows rendered by the policy modal, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySnapshotDto {
    pub rows: Vec<PolicyRowDto>,
    pub all_passed: bool,
    #[serde(with = "serde_time")]
    pub captured_at: DateTime<Utc>,
}

impl From<&PolicySnapshot> for PolicySnapshotDto {
    fn from(snapshot: &PolicySnapshot) -> Self {
        Self {
            rows: snapshot
                .entries()
                .iter()
                .map(|entry| PolicyRowDto {
                    rule: entry.rule,
                    passed: entry.result.passed,
                    message: entry.result.message.clone(),
                })
                .collect(),
            all_passed: snapshot.all_passed(),
            captured_at: snapshot.captured_at(),
        }
    }
}
