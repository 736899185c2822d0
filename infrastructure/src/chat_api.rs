use crate::config::Config;
use anyhow::Context;
use domain::backend::{ChatBackend, ChatTurn};
use serde::Deserialize;
use shared::types::Result;
use std::time::Duration;
use tracing::{debug, warn};

/// A hung backend must not wedge the chat loop indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ERROR_SNIPPET_LIMIT: usize = 500;

#[derive(Deserialize)]
struct ChatApiResponse {
    response: String,
}

/// `POST {api_root}/chat` client for the receptionist endpoint.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat", config.api_root()),
        })
    }
}

impl ChatBackend for HttpChatBackend {
    async fn send_turn(&self, turn: &ChatTurn) -> Result<String> {
        debug!(session_id = %turn.session_id, "sending chat turn");
        let response = self
            .client
            .post(&self.endpoint)
            .json(turn)
            .send()
            .await
            .context("failed to reach the chat endpoint")?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .context("failed to read the chat response body")?;

        if !status.is_success() {
            warn!(%status, "chat endpoint returned an error");
            anyhow::bail!("chat endpoint returned {}: {}", status, snippet(&raw));
        }

        Ok(parse_reply(&raw))
    }
}

/// The endpoint answers `{"response": "..."}`; anything that doesn't parse
/// that way is treated as a plain-text reply.
fn parse_reply(raw: &str) -> String {
    match serde_json::from_str::<ChatApiResponse>(raw) {
        Ok(parsed) => parsed.response,
        Err(_) => raw.trim().to_string(),
    }
}

fn snippet(body: &str) -> String {
    if body.len() <= ERROR_SNIPPET_LIMIT {
        return body.to_string();
    }
    let mut cut = ERROR_SNIPPET_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
