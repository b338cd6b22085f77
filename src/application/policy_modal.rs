// src/application/policy_modal.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::ClockPort;
use crate::application::signal::{Signal, Subscription};
use crate::domain::{PasswordPolicy, PolicySnapshot};
use std::sync::Arc;

/// Point-in-time password policy report.
///
/// The snapshot is evaluated once on [`PasswordPolicyModal::open`] and is not
/// updated by later password edits. Dismissing discards it and notifies
/// dismiss listeners.
pub struct PasswordPolicyModal {
    policy: PasswordPolicy,
    clock: Arc<ClockPort>,
    snapshot: Option<PolicySnapshot>,
    dismissed: Signal<()>,
}

impl PasswordPolicyModal {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            policy: PasswordPolicy::new(),
            clock,
            snapshot: None,
            dismissed: Signal::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&PolicySnapshot> {
        self.snapshot.as_ref()
    }

    /// Evaluate every password rule against `current_password` and hold the
    /// result. Absent text is evaluated as "".
    pub fn open(&mut self, current_password: Option<&str>) -> ApplicationResult<&PolicySnapshot> {
        if self.snapshot.is_some() {
            return Err(ApplicationError::PolicyAlreadyOpen);
        }
        let snapshot = self
            .policy
            .snapshot(current_password.unwrap_or_default(), self.clock.now());
        tracing::debug!(
            failing = snapshot.failing().count(),
            "password policy opened"
        );
        Ok(&*self.snapshot.insert(snapshot))
    }

    pub fn dismiss(&mut self) -> ApplicationResult<()> {
        if self.snapshot.take().is_none() {
            return Err(ApplicationError::PolicyNotOpen);
        }
        tracing::debug!("password policy dismissed");
        self.dismissed.emit(());
        Ok(())
    }

    pub fn on_dismiss<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.dismissed.subscribe(move |_: &()| listener())
    }
}

impl std::fmt::Debug for PasswordPolicyModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordPolicyModal")
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::time::Clock;
    use crate::domain::PasswordRuleKind;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        }
    }

    fn modal() -> PasswordPolicyModal {
        PasswordPolicyModal::new(Arc::new(FixedClock))
    }

    #[test]
    fn open_captures_all_rules() {
        let mut modal = modal();
        let snapshot = modal.open(Some("abc")).unwrap();
        assert_eq!(snapshot.entries().len(), PasswordRuleKind::ALL.len());
        assert_eq!(snapshot.captured_at(), FixedClock.now());
        assert!(modal.is_open());
    }

    #[test]
    fn dismiss_discards_snapshot_and_notifies() {
        let mut modal = modal();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let _sub = modal.on_dismiss(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        modal.open(None).unwrap();
        modal.dismiss().unwrap();

        assert!(!modal.is_open());
        assert!(modal.snapshot().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn misuse_is_reported() {
        let mut modal = modal();
        assert_eq!(modal.dismiss(), Err(ApplicationError::PolicyNotOpen));
        modal.open(Some("")).unwrap();
        assert_eq!(
            modal.open(Some("")).map(|_| ()),
            Err(ApplicationError::PolicyAlreadyOpen)
        );
    }
}
