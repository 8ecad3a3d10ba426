//! Document search surface.
//!
//! One GET per submitted query; each result renders as a title line with the
//! score fixed to two decimals, followed by its snippet. Backend ordering is
//! preserved, never re-sorted.

use tracing::debug;

use crate::models::{SearchResponse, DEFAULT_TOP_K};
use crate::render::{RenderTarget, Role};
use crate::transport::{Endpoint, TransportClient};

use super::{error_line, WidgetState};

const OFFLINE_TEXT: &str = "Search unavailable";

pub struct SearchWidget<R: RenderTarget> {
    transport: TransportClient,
    target: R,
    state: WidgetState,
    top_k: u32,
}

impl<R: RenderTarget> SearchWidget<R> {
    pub fn new(transport: TransportClient, target: R) -> Self {
        Self {
            transport,
            target,
            state: WidgetState::Idle,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
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

    /// Run one query. Empty input is a silent no-op; repeated queries are
    /// independent render passes.
    pub async fn submit(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        if self.state != WidgetState::Idle {
            debug!("search ignored while busy");
            return;
        }
        self.state = WidgetState::Submitting;
        self.target.push(Role::User, query);

        self.state = WidgetState::Awaiting;
        let pairs = [
            ("q", query.to_string()),
            ("top_k", self.top_k.to_string()),
        ];
        match self
            .transport
            .get_json::<SearchResponse>(Endpoint::Search, &pairs)
            .await
        {
            Ok(response) => {
                if response.results.is_empty() {
                    self.target.push(Role::System, "No results");
                }
                for result in &response.results {
                    let entry = self.target.push(Role::Assistant, &result.title());
                    if !result.snippet.is_empty() {
                        self.target.append(entry, &format!("\n{}", result.snippet));
                    }
                }
            }
            Err(err) => {
                self.target.push(Role::System, &error_line(&err, OFFLINE_TEXT));
            }
        }
        self.state = WidgetState::Idle;
    }
}
