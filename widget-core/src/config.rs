//! Per-instance widget configuration.
//!
//! A [`WidgetConfig`] is constructed once by the host (the settings screen of
//! whatever embeds the widget) and handed to each controller explicitly.
//! There is no process-wide singleton; two widgets on the same page may point
//! at different tenants.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::transport::Endpoint;

/// How the backend delivers a chat answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// One JSON object with the whole answer.
    Json,
    /// An incremental text stream whose fragments concatenate to the answer.
    #[default]
    Stream,
}

/// Where the tenant selector travels for a given request.
///
/// Header and body placement are mutually exclusive per request. The call
/// site picks one; the transport never decides on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantPlacement {
    /// `X-Tenant-Id` request header.
    Header,
    /// `tenant` field embedded in the JSON payload by the caller.
    Body,
}

/// Immutable configuration record for one rendered widget instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the backend, with or without a trailing slash.
    pub api_base: String,

    /// Client key sent as `X-Public-Key` when present.
    #[serde(default)]
    pub public_key: Option<String>,

    /// Tenant selector; placement per request is chosen by the call site.
    #[serde(default)]
    pub tenant_id: Option<String>,

    /// Id of the host element this instance renders into.
    pub container_id: String,

    /// Chat answer delivery mode.
    #[serde(default)]
    pub mode: DeliveryMode,
}

impl WidgetConfig {
    pub fn new(api_base: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            public_key: None,
            tenant_id: None,
            container_id: container_id.into(),
            mode: DeliveryMode::default(),
        }
    }

    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    pub fn with_tenant_id(mut self, tenant: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant.into());
        self
    }

    pub fn with_mode(mut self, mode: DeliveryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Full URL for one of the fixed backend endpoints.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint.path())
    }

    /// Rejects configurations that cannot produce a request.
    pub fn validate(&self) -> WidgetResult<()> {
        if self.api_base.trim().is_empty() {
            return Err(WidgetError::Validation("No API configured".to_string()));
        }
        Ok(())
    }

    /// Load configuration from an optional TOML file with `WIDGET_*`
    /// environment overrides, the way a host settings layer would resolve it.
    pub fn load(path: Option<&Path>) -> WidgetResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix("WIDGET"));
        let resolved = builder
            .build()
            .map_err(|e| WidgetError::Validation(e.to_string()))?;
        let config: WidgetConfig = resolved
            .try_deserialize()
            .map_err(|e| WidgetError::Validation(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
