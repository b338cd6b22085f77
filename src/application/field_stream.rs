// src/application/field_stream.rs
use crate::application::dto::{FieldDirective, FieldValidityState};
use crate::application::signal::{Signal, Subscription};
use crate::domain::FieldKind;

/// Validation pipeline for a single input field.
///
/// Every call to [`FieldValidationStream::push_text`] produces exactly one
/// [`FieldValidityState`], delivered to state listeners and then to validity
/// listeners, in the order the text changes arrive.
#[derive(Debug)]
pub struct FieldValidationStream {
    kind: FieldKind,
    text: String,
    secure_entry: bool,
    states: Signal<FieldValidityState>,
    validity: Signal<bool>,
}

impl FieldValidationStream {
    /// New field seeded with the state of the empty string.
    pub fn new(kind: FieldKind) -> Self {
        let initial = FieldValidityState::evaluate(kind, None);
        let validity = Signal::with_initial(initial.is_valid);
        Self {
            kind,
            text: String::new(),
            secure_entry: kind.is_secure_by_default(),
            states: Signal::with_initial(initial),
            validity,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Feed the field's new text. `None` is accepted and treated as "".
    pub fn push_text(&mut self, text: Option<&str>) -> FieldValidityState {
        let text = text.unwrap_or_default();
        self.text.clear();
        self.text.push_str(text);

        let state = FieldValidityState::evaluate(self.kind, Some(text));
        // length only; field contents never reach the log
        tracing::trace!(
            field = %self.kind,
            chars = text.chars().count(),
            is_valid = state.is_valid,
            "field text changed"
        );

        self.states.emit(state.clone());
        self.validity.emit(state.is_valid);
        state
    }

    pub fn state(&self) -> FieldValidityState {
        self.states
            .latest()
            .unwrap_or_else(|| FieldValidityState::evaluate(self.kind, Some(self.text.as_str())))
    }

    pub fn is_valid(&self) -> bool {
        self.state().is_valid
    }

    pub fn directive(&self) -> FieldDirective {
        self.state().directive()
    }

    pub fn states(&self) -> &Signal<FieldValidityState> {
        &self.states
    }

    pub fn validity(&self) -> &Signal<bool> {
        &self.validity
    }

    pub fn on_state<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FieldValidityState) + Send + Sync + 'static,
    {
        self.states.subscribe(listener)
    }

    pub fn on_directive<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FieldDirective) + Send + Sync + 'static,
    {
        self.states.subscribe(move |state| listener(&state.directive()))
    }

    /// Whether the field masks its contents. Always false for email fields.
    pub fn is_secure_entry(&self) -> bool {
        self.secure_entry
    }

    /// Flip masking for password fields; email fields stay in plain entry.
    pub fn toggle_visibility(&mut self) -> bool {
        if self.kind == FieldKind::Password {
            self.secure_entry = !self.secure_entry;
            tracing::debug!(field = %self.kind, secure = self.secure_entry, "visibility toggled");
        }
        self.secure_entry
    }
}
