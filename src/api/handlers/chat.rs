use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ChatMessage;
use crate::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (session_id, messages) = state.chat.create().await;
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            messages,
        }),
    )
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let messages = state
        .chat
        .transcript(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("chat session {id}")))?;

    Ok(Json(SessionResponse {
        session_id: id,
        messages,
    }))
}

/// The user message is appended before this returns; the assistant reply
/// follows asynchronously and is pushed over `/ws`.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), AppError> {
    let message = state.chat.send(id, &body.text).await?;
    Ok((StatusCode::ACCEPTED, Json(message)))
}
