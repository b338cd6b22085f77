use crate::domain::{FieldKind, ValidationResult};
use serde::Serialize;

/// Validity of one field for one text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidityState {
    pub field: FieldKind,
    pub is_empty: bool,
    pub is_valid: bool,
    pub result: ValidationResult,
}

impl FieldValidityState {
    /// Evaluate `text` for `field`. Absent text is treated exactly like the
    /// empty string: both mean "nothing typed".
    pub fn evaluate(field: FieldKind, text: Option<&str>) -> Self {
        let text = text.unwrap_or_default();
        let result = field.validate(text);
        Self {
            field,
            is_empty: text.is_empty(),
            is_valid: result.passed,
            result,
        }
    }

    /// Whether the verification icon and message should be visible.
    pub fn shows_verification(&self) -> bool {
        !self.is_empty
    }

    pub fn directive(&self) -> FieldDirective {
        if self.is_empty {
            FieldDirective::Neutral
        } else if self.is_valid {
            FieldDirective::Valid {
                message: self.result.message.clone(),
            }
        } else {
            FieldDirective::Invalid {
                message: self.result.message.clone(),
            }
        }
    }
}

/// What the presentation layer should show for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum FieldDirective {
    /// Neutral color, verification icon and message hidden.
    Neutral,
    Valid { message: String },
    Invalid { message: String },
}

impl FieldDirective {
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldDirective::Neutral => None,
            FieldDirective::Valid { message } | FieldDirective::Invalid { message } => {
                Some(message)
            }
        }
    }

    pub fn is_verification_visible(&self) -> bool {
        !matches!(self, FieldDirective::Neutral)
    }
}
