//! Notification descriptors
//!
//! A descriptor is the data for one notification: its kind, the text shown
//! in the overlay and what the action button does.

use std::fmt;

use ratatui::style::Color;

use crate::theme;

/// Label shown on the action button when the descriptor does not set one
pub const DEFAULT_ACTION_LABEL: &str = "OK";

/// Side effect run when the user presses the action button
pub type ActionCallback = Box<dyn FnMut()>;

/// Notification kind - determines icon, accent color and dismiss policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Confirmation of a completed operation (green check)
    Success,
    /// Failure the user has to acknowledge (red cross, never auto-dismissed)
    Error,
    /// Neutral information (blue)
    #[default]
    Info,
    /// Something degraded but usable (yellow triangle)
    Warning,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            NotificationKind::Success => theme::notification::SUCCESS,
            NotificationKind::Error => theme::notification::ERROR,
            NotificationKind::Warning => theme::notification::WARNING,
            NotificationKind::Info => theme::notification::INFO,
        }
    }

    /// Errors stay on screen until closed or acted on
    pub fn auto_dismisses(self) -> bool {
        self != NotificationKind::Error
    }
}

/// One notification request.
///
/// Optional fields stay optional here and are resolved when used:
/// a missing label renders as [`DEFAULT_ACTION_LABEL`], a missing callback
/// is a no-op and an empty redirect target is ignored.
pub struct NotificationDescriptor {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub action_label: Option<String>,
    pub on_action: Option<ActionCallback>,
    pub redirect_target: Option<String>,
}

impl NotificationDescriptor {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            action_label: None,
            on_action: None,
            redirect_target: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn with_action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    pub fn with_on_action(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_action = Some(Box::new(callback));
        self
    }

    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = Some(target.into());
        self
    }

    pub fn action_label(&self) -> &str {
        self.action_label.as_deref().unwrap_or(DEFAULT_ACTION_LABEL)
    }

    /// Redirect target exactly as set, unless it is empty or blank
    pub fn redirect(&self) -> Option<&str> {
        self.redirect_target
            .as_deref()
            .filter(|target| !target.trim().is_empty())
    }

    pub(crate) fn run_action(&mut self) {
        if let Some(callback) = self.on_action.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for NotificationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDescriptor")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("action_label", &self.action_label)
            .field("on_action", &self.on_action.as_ref().map(|_| "<callback>"))
            .field("redirect_target", &self.redirect_target)
            .finish()
    }
}
