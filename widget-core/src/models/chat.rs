use serde::{Deserialize, Serialize};

/// Number of retrieval hits requested when the caller does not override it.
pub const DEFAULT_TOP_K: u32 = 5;

/// One completed exchange replayed to the backend for conversational context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /api/v1/chat` and `POST /api/v1/chat/stream`.
///
/// `tenant` is only set when the call site chose body placement; header
/// placement leaves it `None` and the field off the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            top_k: DEFAULT_TOP_K,
            tenant: None,
            customer_id: None,
            history: Vec::new(),
        }
    }
}

/// Non-streaming answer: `{"answer": "..."}`. A 2xx body missing the field
/// is a malformed response, not an empty answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}
