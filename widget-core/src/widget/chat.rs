//! Conversational surface.
//!
//! Renders the exchange into its target, echoing the user's message before
//! any network activity, and keeps completed turns so the next request
//! carries the conversation history.

use tracing::debug;

use crate::config::{DeliveryMode, TenantPlacement};
use crate::models::{ChatAnswer, ChatRequest, ChatTurn, DEFAULT_TOP_K};
use crate::render::{RenderTarget, Role};
use crate::transport::{Endpoint, TransportClient};

use super::{error_line, WidgetState};

const OFFLINE_TEXT: &str = "Chat unavailable";

pub struct ChatWidget<R: RenderTarget> {
    transport: TransportClient,
    target: R,
    state: WidgetState,
    placement: TenantPlacement,
    customer_id: Option<String>,
    history: Vec<ChatTurn>,
    top_k: u32,
}

impl<R: RenderTarget> ChatWidget<R> {
    pub fn new(transport: TransportClient, target: R) -> Self {
        Self {
            transport,
            target,
            state: WidgetState::Idle,
            placement: TenantPlacement::Header,
            customer_id: None,
            history: Vec::new(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Embed the tenant in the request body instead of the header.
    pub fn with_tenant_in_body(mut self) -> Self {
        self.placement = TenantPlacement::Body;
        self
    }

    pub fn with_customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    /// Send one message. Empty input is a silent no-op; a trigger while a
    /// previous submission is in flight is ignored.
    pub async fn submit(&mut self, message: &str) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }
        if self.state != WidgetState::Idle {
            debug!("chat submission ignored while busy");
            return;
        }
        self.state = WidgetState::Submitting;
        self.target.push(Role::User, message);
        match self.transport.config().mode {
            DeliveryMode::Json => self.submit_json(message).await,
            DeliveryMode::Stream => self.submit_stream(message).await,
        }
        self.state = WidgetState::Idle;
    }

    fn request(&self, message: &str) -> ChatRequest {
        let tenant = match self.placement {
            TenantPlacement::Body => self.transport.config().tenant_id.clone(),
            TenantPlacement::Header => None,
        };
        ChatRequest {
            message: message.to_string(),
            top_k: self.top_k,
            tenant,
            customer_id: self.customer_id.clone(),
            history: self.history.clone(),
        }
    }

    async fn submit_json(&mut self, message: &str) {
        self.state = WidgetState::Awaiting;
        let request = self.request(message);
        match self
            .transport
            .post_json::<_, ChatAnswer>(Endpoint::Chat, &request, self.placement)
            .await
        {
            Ok(reply) => {
                self.target.push(Role::Assistant, &reply.answer);
                self.remember(message, reply.answer);
            }
            Err(err) => {
                self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
            }
        }
    }

    async fn submit_stream(&mut self, message: &str) {
        self.state = WidgetState::Streaming;
        let request = self.request(message);
        let mut stream = match self
            .transport
            .post_stream(Endpoint::ChatStream, &request, self.placement)
            .await
        {
            Ok(stream) => stream,
            Err(err) => {
                self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
                return;
            }
        };

        // The assistant entry exists before the first fragment arrives and
        // grows in place as fragments land, in arrival order.
        let entry = self.target.push(Role::Assistant, "");
        let mut answer = String::new();
        while let Some(fragment) = stream.next().await {
            match fragment {
                Ok(text) => {
                    self.target.append(entry, &text);
                    answer.push_str(&text);
                }
                Err(err) => {
                    self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
                    return;
                }
            }
        }
        self.remember(message, answer);
    }

    fn remember(&mut self, message: &str, answer: String) {
        self.history.push(ChatTurn::user(message));
        self.history.push(ChatTurn::assistant(answer));
    }
}
