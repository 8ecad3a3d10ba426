//! Outbound calls to the backend.
//!
//! One [`TransportClient`] per widget instance wraps a [`reqwest::Client`]
//! and owns the two things every surface shares: auth header composition and
//! status mapping. It performs a single attempt per user action; retries and
//! timeouts are left to the caller.

mod decode;
mod endpoint;

pub use decode::{TextStream, Utf8Accumulator};
pub use endpoint::Endpoint;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{TenantPlacement, WidgetConfig};
use crate::error::{WidgetError, WidgetResult};

/// Header carrying the client key.
pub const PUBLIC_KEY_HEADER: &str = "X-Public-Key";
/// Header carrying the tenant selector when the call site chose header
/// placement.
pub const TENANT_HEADER: &str = "X-Tenant-Id";

#[derive(Debug, Clone)]
pub struct TransportClient {
    client: Client,
    config: WidgetConfig,
}

impl TransportClient {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// POST a JSON body and parse a JSON reply.
    pub async fn post_json<B, T>(
        &self,
        endpoint: Endpoint,
        body: &B,
        placement: TenantPlacement,
    ) -> WidgetResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.config.validate()?;
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "sending json request");
        let request = self.apply_headers(self.client.post(&url).json(body), placement);
        let response = ensure_success(request.send().await?)?;
        Ok(response.json::<T>().await?)
    }

    /// GET with query parameters and parse a JSON reply. The tenant, when
    /// configured, always travels as a header here since there is no body.
    pub async fn get_json<T>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> WidgetResult<T>
    where
        T: DeserializeOwned,
    {
        self.config.validate()?;
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "sending get request");
        let request = self.apply_headers(
            self.client.get(&url).query(query),
            TenantPlacement::Header,
        );
        let response = ensure_success(request.send().await?)?;
        Ok(response.json::<T>().await?)
    }

    /// POST a multipart form; only the status matters to the caller.
    pub async fn post_multipart(&self, endpoint: Endpoint, form: Form) -> WidgetResult<()> {
        self.config.validate()?;
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "sending multipart request");
        let request = self.apply_headers(
            self.client.post(&url).multipart(form),
            TenantPlacement::Header,
        );
        ensure_success(request.send().await?)?;
        Ok(())
    }

    /// POST a JSON body and hand back the response body as a lazy fragment
    /// sequence instead of a materialized reply.
    pub async fn post_stream<B>(
        &self,
        endpoint: Endpoint,
        body: &B,
        placement: TenantPlacement,
    ) -> WidgetResult<TextStream>
    where
        B: Serialize + ?Sized,
    {
        self.config.validate()?;
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "opening response stream");
        let request = self.apply_headers(self.client.post(&url).json(body), placement);
        let response = ensure_success(request.send().await?)?;
        Ok(TextStream::new(response.bytes_stream()))
    }

    fn apply_headers(
        &self,
        mut request: RequestBuilder,
        placement: TenantPlacement,
    ) -> RequestBuilder {
        if let Some(key) = &self.config.public_key {
            request = request.header(PUBLIC_KEY_HEADER, key);
        }
        if placement == TenantPlacement::Header {
            if let Some(tenant) = &self.config.tenant_id {
                request = request.header(TENANT_HEADER, tenant);
            }
        }
        request
    }
}

fn ensure_success(response: Response) -> WidgetResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), "backend rejected request");
        Err(WidgetError::Backend {
            status: status.as_u16(),
        })
    }
}

/// Multipart form for `POST /api/v1/ingest/upload`: the file plus an
/// optional customer id, matching what the backend's ingest route reads.
pub fn upload_form(filename: &str, contents: Vec<u8>, customer_id: Option<&str>) -> Form {
    let part = Part::bytes(contents).file_name(filename.to_string());
    let mut form = Form::new().part("file", part);
    if let Some(id) = customer_id {
        form = form.text("customer_id", id.to_string());
    }
    form
}
