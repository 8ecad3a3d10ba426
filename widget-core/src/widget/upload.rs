//! Document upload surface, intentionally inert at this trust level.
//!
//! Ingest requires an elevated key that is never shipped to the page, so the
//! controller accepts the file selection and points the user at the
//! dashboard tool instead of calling the backend. The multipart transport
//! path itself is real; hosts holding elevated credentials use it directly
//! via [`crate::transport::upload_form`].

use crate::render::{RenderTarget, Role};

use super::WidgetState;

/// What the user is told instead of an upload happening.
pub const UPLOAD_NOTICE: &str =
    "Upload requires elevated credentials; use the dashboard tool instead.";

pub struct UploadWidget<R: RenderTarget> {
    target: R,
    state: WidgetState,
}

impl<R: RenderTarget> UploadWidget<R> {
    pub fn new(target: R) -> Self {
        Self {
            target,
            state: WidgetState::Idle,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    /// Accept a file selection. No file chosen is a silent no-op; a chosen
    /// file renders the trust-level notice and nothing leaves the page.
    pub fn submit(&mut self, filename: &str, _contents: &[u8]) {
        let filename = filename.trim();
        if filename.is_empty() {
            return;
        }
        self.state = WidgetState::Submitting;
        self.target.push(Role::User, filename);
        self.target.push(Role::System, UPLOAD_NOTICE);
        self.state = WidgetState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Transcript;

    #[test]
    fn chosen_file_renders_the_notice_only() {
        let mut widget = UploadWidget::new(Transcript::new());
        widget.submit("notes.pdf", b"%PDF-");
        let entries = widget.target().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, "notes.pdf");
        assert_eq!(entries[1].1, UPLOAD_NOTICE);
        assert_eq!(widget.state(), WidgetState::Idle);
    }

    #[test]
    fn no_file_is_a_silent_noop() {
        let mut widget = UploadWidget::new(Transcript::new());
        widget.submit("  ", b"");
        assert!(widget.target().is_empty());
    }
}
