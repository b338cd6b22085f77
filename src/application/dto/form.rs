use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FormValidityState {
    pub email_valid: bool,
    pub password_valid: bool,
    pub submit_enabled: bool,
}

impl FormValidityState {
    pub fn new(email_valid: bool, password_valid: bool) -> Self {
        Self {
            email_valid,
            password_valid,
            submit_enabled: email_valid && password_valid,
        }
    }

    pub fn submit_directive(&self) -> SubmitDirective {
        SubmitDirective {
            enabled: self.submit_enabled,
        }
    }
}

/// Drives the submit control's highlight transition. Only emitted when the
/// enabled flag actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitDirective {
    pub enabled: bool,
}
