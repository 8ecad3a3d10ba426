//! Wire types for the fixed backend contract.
//!
//! Field names match what the backend emits (snake_case); unknown fields are
//! ignored so backend additions never break a deployed widget.

mod appointment;
mod chat;
mod rtc;
mod search;
mod tenant;

pub use appointment::{AppointmentAck, AppointmentRequest};
pub use chat::{ChatAnswer, ChatRequest, ChatTurn, DEFAULT_TOP_K};
pub use rtc::SessionDescription;
pub use search::{SearchResponse, SearchResult};
pub use tenant::{ServiceLink, TenantInfo};
