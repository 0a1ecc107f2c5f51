//! Provisioning scope for the notification store
//!
//! Views never reach a global store. The app owns the [`NotificationStore`]
//! and lends it to views through a [`NotificationScope`].

use thiserror::Error;

use super::notification_state::NotificationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notification store used outside its provider")]
    OutsideProvider,
}

/// Borrowed access to the notification store for one view update
#[derive(Debug)]
pub struct NotificationScope<'a> {
    store: Option<&'a mut NotificationStore>,
}

impl<'a> NotificationScope<'a> {
    pub fn provided(store: &'a mut NotificationStore) -> Self {
        Self { store: Some(store) }
    }

    /// Scope with no store behind it; any use is a programming error
    pub fn detached() -> Self {
        Self { store: None }
    }

    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    pub fn use_notifications(&mut self) -> Result<&mut NotificationStore, NotificationError> {
        match self.store.as_deref_mut() {
            Some(store) => Ok(store),
            None => {
                log::error!("Notification store requested outside its provider");
                Err(NotificationError::OutsideProvider)
            }
        }
    }
}
