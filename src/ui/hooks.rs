//! Reactive hooks for environment-dependent reads.

use leptos::prelude::*;

use crate::core::{MountPhase, SCROLL_SUBSCRIPTIONS};

/// `true` once the component has completed its first client render pass.
///
/// Effects never run during server rendering or hydration, so the server markup
/// and the first client markup always see `false`.
pub fn use_mounted() -> Memo<bool> {
    let phase = RwSignal::new(MountPhase::default());

    Effect::new(move |_| {
        phase.update(|phase| {
            phase.mount();
        });
    });

    Memo::new(move |_| phase.get().is_mounted())
}

/// Raw vertical scroll offset of the window, in px.
///
/// Registers one window scroll listener for the lifetime of the calling
/// component; it is removed when the component's owner is cleaned up.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let read_offset = move || window().scroll_y().unwrap_or(0.0);

        // Page may be restored mid-scroll
        Effect::new(move |_| set_offset.set(read_offset()));

        let handle = window_event_listener(scroll, move |_| set_offset.set(read_offset()));
        track_scroll_subscription(move || handle.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = set_offset;
    }

    offset
}

/// Count a window scroll listener against [`SCROLL_SUBSCRIPTIONS`] and run `remove`
/// when the current owner is cleaned up.
pub fn track_scroll_subscription(remove: impl FnOnce() + Send + Sync + 'static) {
    let subscription = SCROLL_SUBSCRIPTIONS.subscribe();

    on_cleanup(move || {
        remove();
        drop(subscription);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unmounted_during_server_render() {
        let owner = Owner::new();
        owner.with(|| {
            let mounted = use_mounted();
            assert!(!mounted.get_untracked());
        });
        owner.cleanup();
    }

    #[test]
    fn test_scroll_offset_starts_at_top() {
        let owner = Owner::new();
        owner.with(|| {
            let offset = use_scroll_offset();
            assert_eq!(offset.get_untracked(), 0.0);
        });
        owner.cleanup();
    }

    #[test]
    fn test_scroll_subscriptions_do_not_grow_across_mount_cycles() {
        let before = SCROLL_SUBSCRIPTIONS.active();
        let removed = Arc::new(AtomicUsize::new(0));

        for cycle in 1..=5 {
            let owner = Owner::new();
            owner.with(|| {
                let removed = Arc::clone(&removed);
                track_scroll_subscription(move || {
                    removed.fetch_add(1, Ordering::SeqCst);
                });
            });
            assert_eq!(SCROLL_SUBSCRIPTIONS.active(), before + 1);

            owner.cleanup();
            assert_eq!(SCROLL_SUBSCRIPTIONS.active(), before);
            assert_eq!(removed.load(Ordering::SeqCst), cycle);
        }
    }
}
