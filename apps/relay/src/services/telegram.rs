//! Outbound Telegram Bot API client.
//!
//! Delivery is best-effort and fire-and-forget from the learner's point of
//! view: the handler decides how failures map onto responses, this service
//! only performs the single attempt.

use std::env;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Default Bot API root; override with `TELEGRAM_API_BASE` (used by tests).
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram credentials are not configured")]
    NotConfigured,

    #[error("telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("telegram returned status {0}")]
    HttpStatus(reqwest::StatusCode),
}

#[derive(Clone, Debug)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl TelegramConfig {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` when
    /// either is absent or blank; missing credentials are a soft no-op, not
    /// an error.
    pub fn from_env() -> Option<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok()?;
        if bot_token.trim().is_empty() || chat_id.trim().is_empty() {
            return None;
        }
        let api_base =
            env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Some(Self {
            bot_token,
            chat_id,
            api_base,
        })
    }
}

#[derive(Clone)]
pub struct TelegramService {
    client: Client,
    config: Option<TelegramConfig>,
}

impl TelegramService {
    pub fn from_env() -> Self {
        Self::new(TelegramConfig::from_env())
    }

    pub fn new(config: Option<TelegramConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Send one message to the configured chat. At most one attempt, no
    /// retry.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::NotConfigured` when credentials are absent,
    /// `Request` on transport failure, or `HttpStatus` on a non-2xx reply.
    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let config = self.config.as_ref().ok_or(TelegramError::NotConfigured)?;

        let url = format!(
            "{}/bot{}/sendMessage",
            config.api_base.trim_end_matches('/'),
            config.bot_token
        );
        let response = self
            .client
            .post(url)
            .json(&SendMessageRequest {
                chat_id: &config.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "telegram rejected message");
            return Err(TelegramError::HttpStatus(status));
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}
