use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/appointments`.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// `{"ok": bool}` acknowledgement; `false` is a valid booking refusal, not a
/// transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentAck {
    pub ok: bool,
}
