//! Client core shared by the embeddable widget surfaces: chat, search,
//! appointment booking, document upload, and the audio-call log.
//!
//! The host (a plugin settings screen, a desktop shell, a test harness)
//! supplies a [`WidgetConfig`] and a [`RenderTarget`]; the core owns request
//! lifecycle, auth header composition, incremental stream decoding, and the
//! per-surface controller state machines. Nothing here touches the host's
//! markup directly and nothing is persisted across requests.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod transport;
pub mod widget;

pub use config::{DeliveryMode, TenantPlacement, WidgetConfig};
pub use error::{WidgetError, WidgetResult};
pub use models::{
    AppointmentAck, AppointmentRequest, ChatAnswer, ChatRequest, ChatTurn, SearchResponse,
    SearchResult, ServiceLink, SessionDescription, TenantInfo, DEFAULT_TOP_K,
};
pub use render::{EntryId, RenderTarget, Role, Transcript};
pub use transport::{
    upload_form, Endpoint, TextStream, TransportClient, Utf8Accumulator, PUBLIC_KEY_HEADER,
    TENANT_HEADER,
};
pub use widget::{
    AppointmentWidget, CallNegotiator, CallState, ChatWidget, PeerTransport, SearchWidget,
    UploadWidget, WidgetState, UPLOAD_NOTICE,
};
