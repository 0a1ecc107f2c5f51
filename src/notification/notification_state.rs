//! Notification store
//!
//! Holds the single current notification and whether it is visible.
//! Any view holding the store (see [`super::NotificationScope`]) can show or hide it.

use std::time::Instant;

use super::notification_descriptor::NotificationDescriptor;

/// Store for the one notification the UI may be showing.
///
/// Showing replaces the previous descriptor whether or not it was visible.
/// Hiding only clears the visibility flag; the descriptor is kept until the
/// next show.
#[derive(Debug, Default)]
pub struct NotificationStore {
    current: Option<NotificationDescriptor>,
    visible: bool,
    /// Bumped on every show so timers can tell descriptors apart
    generation: u64,
    shown_at: Option<Instant>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_notification(&mut self, descriptor: NotificationDescriptor) {
        self.show_notification_at(descriptor, Instant::now());
    }

    /// Show a notification with an explicit show instant
    pub fn show_notification_at(&mut self, descriptor: NotificationDescriptor, at: Instant) {
        #[cfg(debug_assertions)]
        log::debug!(
            "Showing {:?} notification '{}' (replaces visible: {})",
            descriptor.kind,
            descriptor.title,
            self.visible
        );

        self.generation = self.generation.wrapping_add(1);
        self.current = Some(descriptor);
        self.visible = true;
        self.shown_at = Some(at);
    }

    pub fn hide_notification(&mut self) {
        if self.visible {
            #[cfg(debug_assertions)]
            log::debug!("Hiding notification (generation {})", self.generation);
        }
        self.visible = false;
    }

    pub fn show_success(&mut self, title: &str, message: &str) {
        self.show_notification(NotificationDescriptor::success(title, message));
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show_notification(NotificationDescriptor::error(title, message));
    }

    pub fn show_info(&mut self, title: &str, message: &str) {
        self.show_notification(NotificationDescriptor::info(title, message));
    }

    pub fn show_warning(&mut self, title: &str, message: &str) {
        self.show_notification(NotificationDescriptor::warning(title, message));
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last descriptor shown, even if it has since been hidden
    pub fn descriptor(&self) -> Option<&NotificationDescriptor> {
        self.current.as_ref()
    }

    pub(crate) fn descriptor_mut(&mut self) -> Option<&mut NotificationDescriptor> {
        self.current.as_mut()
    }

    /// Descriptor to render, `None` while hidden
    pub fn visible_descriptor(&self) -> Option<&NotificationDescriptor> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Get current notification title if visible (test-only)
    #[cfg(test)]
    pub fn current_title(&self) -> Option<&str> {
        self.visible_descriptor().map(|d| d.title.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
