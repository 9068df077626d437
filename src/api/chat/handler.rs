// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::ChatApiRequest;
use super::response::ChatApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/chat - Answer a chat message
///
/// # Request
/// - `message`: The user's message (required, string)
///
/// # Response
/// - `response`: Rendered answer text. Degraded collaborator failures and
///   the no-content case are still 200 responses with fallback text.
///
/// # Errors
/// - 400 Bad Request: missing or non-string message
/// - 429 Too Many Requests: rate limited (applied by routing middleware)
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatApiRequest>,
) -> Result<Json<ChatApiResponse>, ApiError> {
    let message = request.validate().map_err(|e| {
        warn!("Chat request validation failed: {}", e);
        ApiError::InvalidRequest(e)
    })?;

    debug!("Chat request: {}", message);

    let response = state.pipeline.respond(message).await;

    info!("Chat response of {} chars", response.len());

    Ok(Json(ChatApiResponse { response }))
}
