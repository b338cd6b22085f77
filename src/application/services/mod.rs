// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{FieldValidityState, FormValidityState},
        error::ApplicationResult,
        field_stream::FieldValidationStream,
        form::FormComposer,
        policy_modal::PasswordPolicyModal,
        ports::ClockPort,
    },
    domain::{FieldKind, PolicySnapshot},
};

/// The sign-up screen's state: both fields, their combined validity and the
/// password policy modal. The presentation layer feeds it input events and
/// subscribes to the signals it exposes.
#[derive(Debug)]
pub struct SignUpScreen {
    email: FieldValidationStream,
    password: FieldValidationStream,
    form: FormComposer,
    policy_modal: PasswordPolicyModal,
}

impl SignUpScreen {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        let email = FieldValidationStream::new(FieldKind::Email);
        let password = FieldValidationStream::new(FieldKind::Password);
        let form = FormComposer::new(&email, &password);
        let policy_modal = PasswordPolicyModal::new(clock);

        Self {
            email,
            password,
            form,
            policy_modal,
        }
    }

    pub fn email(&self) -> &FieldValidationStream {
        &self.email
    }

    pub fn password(&self) -> &FieldValidationStream {
        &self.password
    }

    pub fn field(&self, kind: FieldKind) -> &FieldValidationStream {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }

    pub fn form(&self) -> &FormComposer {
        &self.form
    }

    pub fn policy_modal(&self) -> &PasswordPolicyModal {
        &self.policy_modal
    }

    pub fn set_text(&mut self, kind: FieldKind, text: Option<&str>) -> FieldValidityState {
        match kind {
            FieldKind::Email => self.email.push_text(text),
            FieldKind::Password => self.password.push_text(text),
        }
    }

    pub fn set_email_text(&mut self, text: Option<&str>) -> FieldValidityState {
        self.email.push_text(text)
    }

    pub fn set_password_text(&mut self, text: Option<&str>) -> FieldValidityState {
        self.password.push_text(text)
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password.toggle_visibility()
    }

    /// Open the policy modal on the password field's current text.
    pub fn open_password_policy(&mut self) -> ApplicationResult<&PolicySnapshot> {
        self.policy_modal.open(Some(self.password.text()))
    }

    pub fn dismiss_password_policy(&mut self) -> ApplicationResult<()> {
        self.policy_modal.dismiss()
    }

    /// Whether the form may be submitted right now.
    pub fn submit(&self) -> bool {
        let state: FormValidityState = self.form.state();
        if state.submit_enabled {
            tracing::info!("sign-up submitted");
        } else {
            tracing::warn!(
                email_valid = state.email_valid,
                password_valid = state.password_valid,
                "sign-up submit rejected"
            );
        }
        state.submit_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time::SystemClock;

    fn screen() -> SignUpScreen {
        SignUpScreen::new(Arc::new(SystemClock))
    }

    #[test]
    fn submit_follows_both_fields() {
        let mut screen = screen();
        assert!(!screen.submit());
        screen.set_email_text(Some("john@doe.com"));
        assert!(!screen.submit());
        screen.set_password_text(Some("Abc123!"));
        assert!(screen.submit());
        screen.set_text(FieldKind::Email, Some("john@doe"));
        assert!(!screen.submit());
    }

    #[test]
    fn policy_snapshot_ignores_later_edits() {
        let mut screen = screen();
        screen.set_password_text(Some("abc"));
        let before = screen.open_password_policy().unwrap().clone();
        screen.set_password_text(Some("Abc123!"));
        assert_eq!(screen.policy_modal().snapshot(), Some(&before));
        assert!(!before.all_passed());
        screen.dismiss_password_policy().unwrap();
        assert!(!screen.policy_modal().is_open());
    }
}
