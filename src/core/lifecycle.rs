//! Mount gating and listener bookkeeping.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Whether the first client render pass has completed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MountPhase {
    /// Server render and first client render: show the skeleton
    #[default]
    Unmounted,
    /// Environment-dependent reads (scroll, theme) are safe
    Mounted,
}

impl MountPhase {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountPhase::Mounted)
    }

    /// Transition to `Mounted`. Returns `true` only for the call that made the
    /// transition; there is no way back.
    pub fn mount(&mut self) -> bool {
        let fired = !self.is_mounted();
        *self = MountPhase::Mounted;
        fired
    }
}

/// Counts live subscriptions of one kind (e.g. window scroll listeners).
pub struct SubscriptionTracker {
    active: AtomicUsize,
}

impl SubscriptionTracker {
    pub const fn new() -> Self {
        Self {
            active: AtomicUsize::new(0),
        }
    }

    /// Record a new subscription; it is released when the guard drops
    pub fn subscribe(&'static self) -> SubscriptionGuard {
        self.active.fetch_add(1, Ordering::Relaxed);
        SubscriptionGuard { tracker: self }
    }

    /// Number of subscriptions currently alive
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}

/// Live subscription marker
#[must_use = "the subscription is released as soon as the guard is dropped"]
pub struct SubscriptionGuard {
    tracker: &'static SubscriptionTracker,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.tracker.active.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Window scroll listeners registered by the landing view
pub static SCROLL_SUBSCRIPTIONS: SubscriptionTracker = SubscriptionTracker::new();

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::{Owner, on_cleanup};

    #[test]
    fn test_mount_fires_once() {
        let mut phase = MountPhase::default();
        assert!(!phase.is_mounted());

        assert!(phase.mount());
        assert!(phase.is_mounted());

        assert!(!phase.mount());
        assert!(!phase.mount());
        assert_eq!(phase, MountPhase::Mounted);
    }

    #[test]
    fn test_guard_releases_on_drop() {
        static TRACKER: SubscriptionTracker = SubscriptionTracker::new();

        let first = TRACKER.subscribe();
        let second = TRACKER.subscribe();
        assert_eq!(TRACKER.active(), 2);

        drop(first);
        assert_eq!(TRACKER.active(), 1);
        drop(second);
        assert_eq!(TRACKER.active(), 0);
    }

    #[test]
    fn test_no_leak_across_owner_cycles() {
        static TRACKER: SubscriptionTracker = SubscriptionTracker::new();

        for _ in 0..5 {
            let owner = Owner::new();
            owner.with(|| {
                let guard = TRACKER.subscribe();
                on_cleanup(move || drop(guard));
            });
            assert_eq!(TRACKER.active(), 1);

            owner.cleanup();
            assert_eq!(TRACKER.active(), 0);
        }
    }
}
