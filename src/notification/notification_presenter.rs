//! Notification presenter
//!
//! Owns the auto-dismiss policy and the action button behaviour. The timer
//! is a deadline checked on each event loop tick, tied to the generation of
//! the descriptor it was scheduled for.

use std::time::{Duration, Instant};

use super::notification_descriptor::NotificationKind;
use super::notification_state::NotificationStore;
use crate::router::Navigator;

/// How long non-error notifications stay on screen
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(5000);

/// Pending auto-dismiss for one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    pub generation: u64,
    pub deadline: Instant,
}

/// Store state the timer depends on; a change reschedules it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observed {
    visible: bool,
    kind: Option<NotificationKind>,
    generation: u64,
}

impl Observed {
    fn of(store: &NotificationStore) -> Self {
        Self {
            visible: store.is_visible(),
            kind: store.descriptor().map(|d| d.kind),
            generation: store.generation(),
        }
    }
}

#[derive(Debug)]
pub struct NotificationPresenter {
    delay: Duration,
    timer: Option<DismissTimer>,
    observed: Option<Observed>,
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_DELAY)
    }
}

impl NotificationPresenter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: None,
            observed: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pending_timer(&self) -> Option<DismissTimer> {
        self.timer
    }

    /// Reschedule the dismiss timer if the store changed since the last sync.
    ///
    /// Any pending timer is cancelled before a new one is scheduled, so at
    /// most one timer exists and it always belongs to the newest descriptor.
    pub fn sync(&mut self, store: &NotificationStore) {
        let observed = Observed::of(store);
        if self.observed == Some(observed) {
            return;
        }
        self.observed = Some(observed);

        if let Some(_cancelled) = self.timer.take() {
            #[cfg(debug_assertions)]
            log::debug!(
                "Cancelled dismiss timer for generation {}",
                _cancelled.generation
            );
        }

        if !observed.visible || !observed.kind.is_some_and(NotificationKind::auto_dismisses) {
            return;
        }

        let shown_at = store.shown_at().unwrap_or_else(Instant::now);
        let timer = DismissTimer {
            generation: observed.generation,
            deadline: shown_at + self.delay,
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Scheduled dismiss for generation {} in {:?}",
            timer.generation,
            self.delay
        );

        self.timer = Some(timer);
    }

    pub fn tick(&mut self, store: &mut NotificationStore) -> bool {
        self.tick_at(store, Instant::now())
    }

    /// Fire the dismiss timer if it is due. Returns true if the
    /// notification was hidden.
    pub fn tick_at(&mut self, store: &mut NotificationStore, now: Instant) -> bool {
        self.sync(store);

        let Some(timer) = self.timer else {
            return false;
        };
        if timer.generation != store.generation() || now < timer.deadline {
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Auto-dismissing generation {}", timer.generation);

        self.timer = None;
        store.hide_notification();
        self.sync(store);
        true
    }

    /// Explicit dismiss. Returns true if something was visible.
    pub fn close(&mut self, store: &mut NotificationStore) -> bool {
        let was_visible = store.is_visible();
        store.hide_notification();
        self.sync(store);
        was_visible
    }

    /// Run the action button: callback, then redirect, then hide.
    ///
    /// Does nothing while hidden. If the redirect issued a newer
    /// notification, that one stays visible.
    pub fn invoke_action(
        &mut self,
        store: &mut NotificationStore,
        navigator: &mut dyn Navigator,
    ) -> bool {
        if !store.is_visible() {
            return false;
        }
        let generation = store.generation();

        let redirect = match store.descriptor_mut() {
            Some(descriptor) => {
                descriptor.run_action();
                descriptor.redirect().map(str::to_owned)
            }
            None => None,
        };

        if let Some(target) = redirect {
            #[cfg(debug_assertions)]
            log::debug!("Notification action redirecting to {}", target);
            navigator.navigate(&target);
        }

        if store.generation() == generation {
            store.hide_notification();
        }
        self.sync(store);
        true
    }
}

#[cfg(test)]
#[path = "notification_presenter_tests.rs"]
mod notification_presenter_tests;
