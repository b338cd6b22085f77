// src/domain/field.rs
use crate::domain::email::validate_email;
use crate::domain::errors::DomainError;
use crate::domain::password::PasswordPolicy;
use crate::domain::validation::ValidationResult;
use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardKind {
    Default,
    EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Email => "Enter an email address..",
            FieldKind::Password => "Enter a password..",
        }
    }

    pub fn keyboard(&self) -> KeyboardKind {
        match self {
            FieldKind::Email => KeyboardKind::EmailAddress,
            FieldKind::Password => KeyboardKind::Default,
        }
    }

    /// Whether entry starts masked.
    pub fn is_secure_by_default(&self) -> bool {
        matches!(self, FieldKind::Password)
    }

    /// Aggregate validity of `candidate` under this field's rule set. Password
    /// fields report the short message of the first failing rule.
    pub fn validate(&self, candidate: &str) -> ValidationResult {
        match self {
            FieldKind::Email => validate_email(candidate),
            FieldKind::Password => PasswordPolicy::new().evaluate_aggregate(candidate, true),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            other => Err(DomainError::UnknownFieldKind(other.to_string())),
        }
    }
}
