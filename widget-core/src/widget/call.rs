//! Audio-call surface: offer/answer negotiation plus a passive state log.
//!
//! The platform media stack (getUserMedia/RTCPeerConnection in a browser
//! host, a native stack elsewhere) sits behind the [`PeerTransport`] trait;
//! the negotiator drives it and talks to the backend, never to the media
//! layer's wire. Connection-state changes after `Connected` are appended as
//! log lines, not modeled as further states.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::TenantPlacement;
use crate::error::{WidgetError, WidgetResult};
use crate::models::{SessionDescription, TenantInfo};
use crate::render::{RenderTarget, Role};
use crate::transport::{Endpoint, TransportClient};

const OFFLINE_TEXT: &str = "Voice assistant unavailable";

/// Seam over the platform media stack.
#[async_trait]
pub trait PeerTransport: Send {
    /// Attach the local microphone. Best-effort: denial or absence means the
    /// call proceeds without local audio, it never fails the call.
    async fn capture_microphone(&mut self) -> WidgetResult<()>;

    /// Produce the local session description.
    async fn create_offer(&mut self) -> WidgetResult<SessionDescription>;

    /// Apply the backend's answer as the remote description.
    async fn accept_answer(&mut self, answer: SessionDescription) -> WidgetResult<()>;

    /// Most recent transport-reported connection state, for the log.
    fn connection_state(&self) -> String;
}

/// Lifecycle of one call attempt. `Connected` and `Failed` are terminal for
/// the attempt; a new `start` may run from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallState {
    #[default]
    Idle,
    RequestingMicrophone,
    CreatingOffer,
    AwaitingAnswer,
    Connected,
    Failed,
}

pub struct CallNegotiator<R: RenderTarget, P: PeerTransport> {
    transport: TransportClient,
    peer: P,
    target: R,
    state: CallState,
}

impl<R: RenderTarget, P: PeerTransport> CallNegotiator<R, P> {
    pub fn new(transport: TransportClient, peer: P, target: R) -> Self {
        Self {
            transport,
            peer,
            target,
            state: CallState::Idle,
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    pub fn peer(&self) -> &P {
        &self.peer
    }

    /// Run the whole handshake. Every error is caught here and rendered as a
    /// single line; the terminal state records that the attempt failed.
    pub async fn start(&mut self) {
        // Narrower than the `!= Idle` rule of the submit widgets on purpose:
        // `Connected` and `Failed` end the attempt, so a trigger from either
        // starts a fresh negotiation. Only a handshake in flight blocks.
        if matches!(
            self.state,
            CallState::RequestingMicrophone | CallState::CreatingOffer | CallState::AwaitingAnswer
        ) {
            debug!("call trigger ignored while negotiating");
            return;
        }
        match self.negotiate().await {
            Ok(()) => {
                self.state = CallState::Connected;
                self.target.push(Role::System, "Connected.");
            }
            Err(err) => {
                self.state = CallState::Failed;
                let line = match &err {
                    WidgetError::Backend { status } => format!("Error: {status}"),
                    other => format!("Exception: {other}"),
                };
                self.target.push(Role::System, &line);
            }
        }
    }

    async fn negotiate(&mut self) -> WidgetResult<()> {
        self.state = CallState::RequestingMicrophone;
        if let Err(err) = self.peer.capture_microphone().await {
            // No microphone is not a failed call.
            debug!(error = %err, "proceeding without local audio");
        }

        self.state = CallState::CreatingOffer;
        let offer = self
            .peer
            .create_offer()
            .await
            .map_err(|e| WidgetError::Call {
                step: "offer",
                message: e.to_string(),
            })?;

        self.state = CallState::AwaitingAnswer;
        let answer: SessionDescription = self
            .transport
            .post_json(Endpoint::RtcOffer, &offer, TenantPlacement::Header)
            .await?;
        self.peer
            .accept_answer(answer)
            .await
            .map_err(|e| WidgetError::Call {
                step: "answer",
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Append whatever state the media transport currently reports.
    pub fn log_connection_state(&mut self) {
        let state = self.peer.connection_state();
        self.target.push(Role::System, &format!("state: {state}"));
    }

    /// Fetch the tenant's phone numbers for the call surface. On any failure
    /// the surface says the assistant is unavailable and the list stays
    /// empty.
    pub async fn load_info(&mut self) -> Vec<String> {
        match self
            .transport
            .get_json::<TenantInfo>(Endpoint::TenantInfo, &[])
            .await
        {
            Ok(info) => {
                for number in &info.numbers {
                    self.target.push(Role::System, number);
                }
                info.numbers
            }
            Err(err) => {
                warn!(error = %err, "tenant info fetch failed");
                self.target.push(Role::System, OFFLINE_TEXT);
                Vec::new()
            }
        }
    }
}
