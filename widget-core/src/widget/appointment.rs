//! Appointment booking surface.
//!
//! Submits a name and phone number and renders the backend's yes/no answer.
//! `load_services` fetches the tenant's bookable services and booking link so
//! the host can offer them next to the form; each rendered link is bound by
//! the host directly, not through document-wide delegation.

use tracing::debug;

use crate::config::TenantPlacement;
use crate::models::{AppointmentAck, AppointmentRequest, TenantInfo};
use crate::render::{RenderTarget, Role};
use crate::transport::{Endpoint, TransportClient};

use super::{error_line, WidgetState};

const OFFLINE_TEXT: &str = "Booking unavailable";

pub struct AppointmentWidget<R: RenderTarget> {
    transport: TransportClient,
    target: R,
    state: WidgetState,
    customer_id: Option<String>,
}

impl<R: RenderTarget> AppointmentWidget<R> {
    pub fn new(transport: TransportClient, target: R) -> Self {
        Self {
            transport,
            target,
            state: WidgetState::Idle,
            customer_id: None,
        }
    }

    pub fn with_customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
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

    /// Book one appointment. Blank name or phone is a silent no-op.
    pub async fn submit(&mut self, name: &str, phone: &str) {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return;
        }
        if self.state != WidgetState::Idle {
            debug!("booking ignored while busy");
            return;
        }
        self.state = WidgetState::Submitting;
        self.target.push(Role::User, &format!("{name}, {phone}"));

        self.state = WidgetState::Awaiting;
        let request = AppointmentRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            customer_id: self.customer_id.clone(),
        };
        match self
            .transport
            .post_json::<_, AppointmentAck>(
                Endpoint::Appointments,
                &request,
                TenantPlacement::Header,
            )
            .await
        {
            Ok(ack) => {
                let line = if ack.ok { "Booked" } else { "Failed" };
                self.target.push(Role::System, line);
            }
            Err(err) => {
                self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
            }
        }
        self.state = WidgetState::Idle;
    }

    /// Fetch and render the tenant's bookable services and booking link.
    /// Returns the info so the host can also populate its own controls.
    pub async fn load_services(&mut self) -> Option<TenantInfo> {
        if self.state != WidgetState::Idle {
            debug!("service load ignored while busy");
            return None;
        }
        self.state = WidgetState::Awaiting;
        let loaded = match self
            .transport
            .get_json::<TenantInfo>(Endpoint::TenantInfo, &[])
            .await
        {
            Ok(info) => {
                for service in &info.services {
                    let line = match &service.url {
                        Some(url) => format!("{}: {}", service.name, url),
                        None => service.name.clone(),
                    };
                    self.target.push(Role::System, &line);
                }
                if let Some(url) = &info.booking_url {
                    self.target.push(Role::System, &format!("Book online: {url}"));
                }
                Some(info)
            }
            Err(err) => {
                self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
                None
            }
        };
        self.state = WidgetState::Idle;
        loaded
    }
}
