//! Per-surface controllers.
//!
//! Every controller follows the same lifecycle: `Idle` until a user action,
//! `Submitting` while validating and dispatching, `Streaming` or `Awaiting`
//! while the backend responds, then back to `Idle`. Errors render one line
//! and also return to `Idle`. A trigger while not `Idle` is ignored, which
//! serializes each instance to one in-flight action.

mod appointment;
mod call;
mod chat;
mod search;
mod upload;

pub use appointment::AppointmentWidget;
pub use call::{CallNegotiator, CallState, PeerTransport};
pub use chat::ChatWidget;
pub use search::SearchWidget;
pub use upload::{UploadWidget, UPLOAD_NOTICE};

use crate::error::WidgetError;

/// Lifecycle of one widget instance between user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Submitting,
    Streaming,
    Awaiting,
}

/// The one line rendered for a failed action.
///
/// Backend rejections show their status; obtaining no response at all
/// degrades to the surface's own "unavailable" wording.
pub(crate) fn error_line(err: &WidgetError, offline_text: &str) -> String {
    match err {
        WidgetError::Network(_) => offline_text.to_string(),
        other => other.user_message(),
    }
}
