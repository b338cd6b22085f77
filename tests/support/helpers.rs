// tests/support/helpers.rs
use std::sync::{Arc, Mutex};

use signup_core::application::services::SignUpScreen;
use signup_core::application::signal::{Signal, Subscription};

use super::mocks::FixedClock;

pub fn test_screen() -> SignUpScreen {
    SignUpScreen::new(Arc::new(FixedClock))
}

/// Records every value a signal emits.
pub struct Recorder<T> {
    seen: Arc<Mutex<Vec<T>>>,
    _subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    pub fn attach(signal: &Signal<T>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = signal.subscribe(move |value: &T| sink.lock().unwrap().push(value.clone()));
        Self {
            seen,
            _subscription: subscription,
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.seen.lock().unwrap().clone()
    }
}
