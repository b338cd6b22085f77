// src/application/form.rs
use crate::application::dto::{FormValidityState, SubmitDirective};
use crate::application::field_stream::FieldValidationStream;
use crate::application::signal::{Signal, Subscription};
use std::sync::{Arc, Mutex, PoisonError};

/// Combines the latest validity of the email and password fields.
///
/// `states` emits on every validity change of either field and drives the
/// submit control's enabled flag. `transitions` only emits when
/// `submit_enabled` flips and drives the highlight animation.
#[derive(Debug)]
pub struct FormComposer {
    states: Signal<FormValidityState>,
    transitions: Signal<SubmitDirective>,
    _links: Vec<Subscription>,
}

impl FormComposer {
    pub fn new(email: &FieldValidationStream, password: &FieldValidationStream) -> Self {
        Self::from_validity(email.validity(), password.validity())
    }

    pub fn from_validity(email: &Signal<bool>, password: &Signal<bool>) -> Self {
        let initial = FormValidityState::new(
            email.latest().unwrap_or(false),
            password.latest().unwrap_or(false),
        );
        let states = Signal::with_initial(initial);
        let transitions = Signal::with_initial(initial.submit_directive());
        let enabled = Signal::with_initial(initial.submit_enabled);
        let latest = Arc::new(Mutex::new(initial));

        // State listeners see every recomputation before the transition fires.
        let publish = {
            let states = states.clone();
            let enabled = enabled.clone();
            Arc::new(move |next: FormValidityState| {
                states.emit(next);
                enabled.emit(next.submit_enabled);
            })
        };

        let email_link = {
            let latest = Arc::clone(&latest);
            let publish = Arc::clone(&publish);
            email.subscribe(move |valid: &bool| {
                let next = {
                    let mut current = latest.lock().unwrap_or_else(PoisonError::into_inner);
                    *current = FormValidityState::new(*valid, current.password_valid);
                    *current
                };
                publish(next);
            })
        };

        let password_link = {
            let latest = Arc::clone(&latest);
            let publish = Arc::clone(&publish);
            password.subscribe(move |valid: &bool| {
                let next = {
                    let mut current = latest.lock().unwrap_or_else(PoisonError::into_inner);
                    *current = FormValidityState::new(current.email_valid, *valid);
                    *current
                };
                publish(next);
            })
        };

        let distinct_enabled = Signal::new();
        let distinct_link = enabled.forward_distinct(&distinct_enabled);
        let transition_link = {
            let transitions = transitions.clone();
            distinct_enabled.subscribe(move |enabled: &bool| {
                tracing::debug!(enabled = *enabled, "submit availability changed");
                transitions.emit(SubmitDirective { enabled: *enabled });
            })
        };

        Self {
            states,
            transitions,
            _links: vec![
                email_link,
                password_link,
                distinct_link,
                transition_link,
            ],
        }
    }

    pub fn state(&self) -> FormValidityState {
        self.states.latest().unwrap_or_default()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state().submit_enabled
    }

    pub fn states(&self) -> &Signal<FormValidityState> {
        &self.states
    }

    pub fn transitions(&self) -> &Signal<SubmitDirective> {
        &self.transitions
    }

    pub fn on_state<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FormValidityState) + Send + Sync + 'static,
    {
        self.states.subscribe(listener)
    }

    pub fn on_transition<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SubmitDirective) + Send + Sync + 'static,
    {
        self.transitions.subscribe(listener)
    }
}
