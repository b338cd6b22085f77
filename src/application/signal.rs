// src/application/signal.rs
//! Synchronous publish/subscribe primitive used by the validation pipeline.
//!
//! A [`Signal`] remembers the last value it emitted and delivers every new
//! value to its listeners in subscription order, on the caller's thread,
//! before `emit` returns. Nothing is buffered, dropped or reordered.
//! Listeners are invoked outside the internal lock, so a listener may emit
//! into other signals.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    latest: Option<T>,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    // A panicking listener never runs under the lock, so the data is consistent.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a shared stream of values. Clones observe and feed the same stream.
pub struct Signal<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::from_latest(None)
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = lock(&self.registry);
        f.debug_struct("Signal")
            .field("has_value", &registry.latest.is_some())
            .field("listeners", &registry.listeners.len())
            .finish()
    }
}

impl<T> Signal<T> {
    fn from_latest(latest: Option<T>) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                latest,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Signal seeded with a current value, delivered to
    /// [`Signal::subscribe_with_latest`] listeners.
    pub fn with_initial(value: T) -> Self {
        Self::from_latest(Some(value))
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn latest(&self) -> Option<T> {
        lock(&self.registry).latest.clone()
    }

    /// Record `value` as the latest and deliver it to every listener.
    pub fn emit(&self, value: T) {
        let listeners: Vec<Listener<T>> = {
            let mut registry = lock(&self.registry);
            registry.latest = Some(value.clone());
            registry
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    /// Listen for values emitted from now on.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = lock(&self.registry);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Arc::new(listener)));
            id
        };
        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                lock(&registry).remove(id);
            }
        })
    }

    /// Like [`Signal::subscribe`], but first replays the current value if any.
    pub fn subscribe_with_latest<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        let replay = Arc::clone(&listener);
        let subscription = self.subscribe(move |value| listener(value));
        if let Some(current) = self.latest() {
            replay(&current);
        }
        subscription
    }
}

impl<T> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Forward values into `target`, skipping values equal to the previously
    /// forwarded one. The first value always passes.
    pub fn forward_distinct(&self, target: &Signal<T>) -> Subscription {
        let target = target.clone();
        let previous: Mutex<Option<T>> = Mutex::new(None);
        self.subscribe_with_latest(move |value| {
            {
                let mut previous = previous.lock().unwrap_or_else(PoisonError::into_inner);
                if previous.as_ref() == Some(value) {
                    return;
                }
                *previous = Some(value.clone());
            }
            target.emit(value.clone());
        })
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Leave the listener registered for the lifetime of the signal.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
