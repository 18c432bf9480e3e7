//! UI Events
//!
//! Events emitted from the state layer to the UI layer for notifications.

use std::sync::Arc;

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Success message (auto-dismiss)
    Success,
    /// Error message
    Error,
}

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// Display a toast notification
    Toast {
        message: Arc<str>,
        severity: NotificationSeverity,
    },
}

impl UIEvent {
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        UIEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Error,
        }
    }

    pub fn success(message: impl Into<Arc<str>>) -> Self {
        UIEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Success,
        }
    }
}
