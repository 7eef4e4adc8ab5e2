//! Wire types for the relay API.

use serde::{Deserialize, Serialize};

// Re-export shared types from els-core; the request body is the same payload
// the core reporter builds.
pub use els_core::report::{ResultPayload, StudentData};
pub use els_core::session::SessionStatus;
pub use els_core::types::{Score, UnitRef};

/// Body of every `/api/send-result` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendResultResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResultResponse {
    pub fn delivered() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Success-shaped soft no-op used when upstream credentials are absent.
    pub fn not_configured() -> Self {
        Self {
            ok: false,
            error: Some("Telegram not configured".to_string()),
        }
    }
}
