//! Error types for the widget client core.
//!
//! Every failure a controller can hit collapses into one of a small set of
//! kinds, and each kind maps to exactly one rendered line via
//! [`WidgetError::user_message`]. Nothing propagates past the controller
//! boundary to the host page, and nothing is retried.

use thiserror::Error;

/// The error taxonomy of the client core.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Client-side input rejection; never reaches the network.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No response was obtained at all (DNS, refused connection, timeout,
    /// TLS, or the body was cut off mid-read).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. The body is not parsed.
    #[error("backend returned status {status}")]
    Backend { status: u16 },

    /// A 2xx response whose body does not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Call negotiation failed at the given step of the offer/answer
    /// handshake.
    #[error("call negotiation failed during {step}: {message}")]
    Call { step: &'static str, message: String },
}

/// Result type alias for widget core operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Returns true if no response was obtained from the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, WidgetError::Network(_))
    }

    /// Returns true if the backend rejected the request with a status code.
    pub fn is_backend(&self) -> bool {
        matches!(self, WidgetError::Backend { .. })
    }

    /// The HTTP status carried by a backend rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            WidgetError::Backend { status } => Some(*status),
            _ => None,
        }
    }

    /// The single user-facing line a widget renders for this error.
    ///
    /// Backend rejections show the numeric status; everything else degrades
    /// to generic text so no internals leak into the page.
    pub fn user_message(&self) -> String {
        match self {
            WidgetError::Validation(message) => message.clone(),
            WidgetError::Network(_) => "Network error".to_string(),
            WidgetError::Backend { status } => format!("Error: {status}"),
            WidgetError::MalformedResponse(_) => "Invalid response from server".to_string(),
            WidgetError::Call { .. } => format!("Exception: {self}"),
        }
    }
}

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            WidgetError::Backend {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            WidgetError::MalformedResponse(err.to_string())
        } else {
            WidgetError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_carry_their_status() {
        let err = WidgetError::Backend { status: 502 };
        assert!(err.is_backend());
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.user_message(), "Error: 502");
    }

    #[test]
    fn network_errors_have_no_status() {
        let err = WidgetError::Network("connection refused".to_string());
        assert!(err.is_network());
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), "Network error");
    }

    #[test]
    fn malformed_response_hides_parser_detail() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WidgetError = json_err.into();
        assert!(matches!(err, WidgetError::MalformedResponse(_)));
        assert_eq!(err.user_message(), "Invalid response from server");
    }

    #[test]
    fn validation_message_is_rendered_verbatim() {
        let err = WidgetError::Validation("No API configured".to_string());
        assert_eq!(err.user_message(), "No API configured");
    }
}
