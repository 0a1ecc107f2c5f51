//! Notification module for leadline
//!
//! Provides the single notification overlay shared by every page. Views
//! reach the store through a [`NotificationScope`]; the presenter owns the
//! auto-dismiss timer and the action button.

mod notification_context;
mod notification_descriptor;
mod notification_presenter;
mod notification_render;
mod notification_state;

pub use notification_context::{NotificationError, NotificationScope};
pub use notification_descriptor::{
    ActionCallback, DEFAULT_ACTION_LABEL, NotificationDescriptor, NotificationKind,
};
pub use notification_presenter::{DEFAULT_DISMISS_DELAY, DismissTimer, NotificationPresenter};
pub use notification_render::{render_notification, wrap_text};
pub use notification_state::NotificationStore;
