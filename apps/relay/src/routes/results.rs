//! Result relay endpoint.

use axum::{extract::State, Json};
use chrono::Utc;

use els_core::report::format_message;

use crate::error::{ApiError, Result};
use crate::models::{ResultPayload, SendResultResponse};
use crate::services::telegram::TelegramError;
use crate::AppState;

/// POST /api/send-result
///
/// Formats the session result into the instructor message and forwards it to
/// Telegram in a single attempt. Missing credentials are a soft no-op with a
/// success-shaped response; upstream failure becomes a non-2xx JSON error.
pub async fn send_result(
    State(state): State<AppState>,
    Json(payload): Json<ResultPayload>,
) -> Result<Json<SendResultResponse>> {
    let text = format_message(&payload, Utc::now());

    match state.telegram.send_message(&text).await {
        Ok(()) => {
            tracing::info!(
                mode = %payload.mode_label(),
                status = payload.status.as_str(),
                score = %format!("{}/{}", payload.score.correct, payload.total),
                "relayed result"
            );
            Ok(Json(SendResultResponse::delivered()))
        }
        Err(TelegramError::NotConfigured) => {
            tracing::warn!("Telegram env variables are not set; result dropped");
            Ok(Json(SendResultResponse::not_configured()))
        }
        Err(err) => {
            tracing::error!(error = %err, "telegram delivery failed");
            Err(ApiError::Upstream)
        }
    }
}

/// Fallback for any non-POST method on the route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
