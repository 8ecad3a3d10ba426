/// The fixed set of backend paths the widget surfaces talk to. The contract
/// is owned by the backend; the core never constructs paths dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Chat,
    ChatStream,
    Search,
    TenantInfo,
    Appointments,
    IngestUpload,
    RtcOffer,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Chat => "/api/v1/chat",
            Endpoint::ChatStream => "/api/v1/chat/stream",
            Endpoint::Search => "/api/v1/search",
            Endpoint::TenantInfo => "/api/v1/tenants/info",
            Endpoint::Appointments => "/api/v1/appointments",
            Endpoint::IngestUpload => "/api/v1/ingest/upload",
            Endpoint::RtcOffer => "/api/v1/rtc/offer",
        }
    }
}
