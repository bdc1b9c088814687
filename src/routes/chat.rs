use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, KeepAliveStream, Sse};
use futures::StreamExt;
use futures::stream::BoxStream;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::timeout;

use crate::AppState;
use crate::boundary;
use crate::error::AppError;
use crate::models::entities::{Conversation, MessageRole, StoredMessage};
use crate::models::requests::{CreateConversationRequest, SendMessageRequest};
use crate::models::responses::{
    ConversationResponse, DeleteConversationResponse, ListMessagesResponse, MessageResponse,
    SendMessageResponse,
};
use crate::personas::{self, Persona};
use crate::services::completion::{CompletionClient, estimate_tokens, validate_reply};

const FALLBACK_ERROR_MESSAGE: &str =
    "I'm having trouble generating a response right now. Please try again.";

/// Events emitted on the SSE streaming endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Content { text: String },
    Done { message_id: String, refused: bool },
    Error { message: String },
}

fn sse_event(event: &ChatEvent) -> Result<Event, Infallible> {
    Ok(Event::default().data(serde_json::to_string(event).unwrap_or_default()))
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            persona: c.persona_name,
            model: c.model,
            created_at: c.created_at,
            updated_at: c.updated_at,
            message_count: c.messages.len(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/conversations",
    request_body = CreateConversationRequest,
    responses(
        (status = 201, body = ConversationResponse, description = "Conversation created"),
        (status = 404, description = "Unknown persona"),
        (status = 422, description = "Unknown model"),
    ),
    tag = "Chat"
)]
pub async fn create_conversation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationResponse>), AppError> {
    let persona = body.validate_persona().map_err(AppError::not_found)?;
    body.validate_model().map_err(AppError::validation_error)?;

    let model = body
        .model
        .as_deref()
        .unwrap_or(state.completions.default_model());

    let conversation = state.sessions.create(persona.name, model);

    Ok((
        StatusCode::CREATED,
        Json(ConversationResponse::from(conversation)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/conversations/{conversation_id}/messages",
    params(("conversation_id" = String, Path, description = "Conversation id")),
    responses(
        (status = 200, body = ListMessagesResponse, description = "Conversation transcript"),
        (status = 404, description = "Conversation not found"),
    ),
    tag = "Chat"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<ListMessagesResponse>, AppError> {
    let conversation = state
        .sessions
        .get(&conversation_id)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    let messages: Vec<MessageResponse> = conversation
        .messages
        .into_iter()
        .map(MessageResponse::from)
        .collect();
    let total = messages.len();

    Ok(Json(ListMessagesResponse {
        conversation_id,
        messages,
        total,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/conversations/{conversation_id}/messages",
    params(("conversation_id" = String, Path, description = "Conversation id")),
    request_body = SendMessageRequest,
    responses(
        (status = 201, body = SendMessageResponse, description = "Turn completed"),
        (status = 404, description = "Conversation not found"),
        (status = 422, description = "Invalid content"),
    ),
    tag = "Chat"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>), AppError> {
    let content = body
        .validate_content()
        .map_err(AppError::validation_error)?
        .to_string();

    let conversation = state
        .sessions
        .get(&conversation_id)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    // Gate before any network call.
    let decision = boundary::evaluate(&content, &conversation.persona_name);

    // Context window excludes the turn being sent.
    let history = state.sessions.history_for_context(&conversation_id);

    let user_message = state
        .sessions
        .append(&conversation_id, MessageRole::User, &content, false, None)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    if !decision.allowed {
        let assistant_message = state
            .sessions
            .append(
                &conversation_id,
                MessageRole::Assistant,
                &decision.response,
                true,
                None,
            )
            .ok_or_else(|| AppError::not_found("Conversation not found"))?;

        return Ok((
            StatusCode::CREATED,
            Json(SendMessageResponse {
                user_message: user_message.into(),
                assistant_message: assistant_message.into(),
            }),
        ));
    }

    let persona = personas::lookup(&conversation.persona_name)
        .ok_or_else(|| AppError::not_found("Persona not found"))?;

    let reply = if !state.completions.is_configured() {
        CompletionClient::demo_reply(persona.name)
    } else {
        match generate_reply(&state, persona, &conversation, &history, &content).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "AI generation failed, using fallback");
                FALLBACK_ERROR_MESSAGE.to_string()
            }
        }
    };

    let reply = if validate_reply(&reply) {
        reply
    } else {
        tracing::warn!("empty completion, using fallback");
        FALLBACK_ERROR_MESSAGE.to_string()
    };

    let token_count = estimate_tokens(&reply);
    let assistant_message = state
        .sessions
        .append(
            &conversation_id,
            MessageRole::Assistant,
            &reply,
            false,
            Some(token_count),
        )
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            user_message: user_message.into(),
            assistant_message: assistant_message.into(),
        }),
    ))
}

/// The single call site that touches the completion service; every failure
/// is converted here or by the caller into a visible conversation turn.
async fn generate_reply(
    state: &AppState,
    persona: &Persona,
    conversation: &Conversation,
    history: &[StoredMessage],
    content: &str,
) -> Result<String, AppError> {
    let stream = state
        .completions
        .stream_reply(
            &conversation.model,
            persona.instruction_prompt,
            history,
            content,
        )
        .await?;

    // The handler holds the sender for the whole collect; nothing cancels
    // the JSON path besides the client's own timeout.
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    state.completions.collect_reply(stream, cancel_rx).await
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/conversations/{conversation_id}/stream",
    params(("conversation_id" = String, Path, description = "Conversation id")),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "SSE stream of chat events"),
        (status = 404, description = "Conversation not found"),
        (status = 422, description = "Invalid content"),
    ),
    tag = "Chat"
)]
pub async fn stream_message(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Sse<KeepAliveStream<BoxStream<'static, Result<Event, Infallible>>>>, AppError> {
    let content = body
        .validate_content()
        .map_err(AppError::validation_error)?
        .to_string();

    let conversation = state
        .sessions
        .get(&conversation_id)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    let decision = boundary::evaluate(&content, &conversation.persona_name);
    let history = state.sessions.history_for_context(&conversation_id);

    state
        .sessions
        .append(&conversation_id, MessageRole::User, &content, false, None)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    // Refusals and demo replies are served from a short canned stream; the
    // completion service is never contacted.
    if !decision.allowed {
        let assistant_message = state
            .sessions
            .append(
                &conversation_id,
                MessageRole::Assistant,
                &decision.response,
                true,
                None,
            )
            .ok_or_else(|| AppError::not_found("Conversation not found"))?;

        return Ok(canned_sse(&decision.response, &assistant_message.id, true));
    }

    let persona = personas::lookup(&conversation.persona_name)
        .ok_or_else(|| AppError::not_found("Persona not found"))?;

    if !state.completions.is_configured() {
        let reply = CompletionClient::demo_reply(persona.name);
        let assistant_message = state
            .sessions
            .append(&conversation_id, MessageRole::Assistant, &reply, false, None)
            .ok_or_else(|| AppError::not_found("Conversation not found"))?;

        return Ok(canned_sse(&reply, &assistant_message.id, false));
    }

    let upstream = state
        .completions
        .stream_reply(
            &conversation.model,
            persona.instruction_prompt,
            history.as_slice(),
            &content,
        )
        .await?;

    let (tx, rx) = mpsc::channel::<ChatEvent>(32);
    tokio::spawn(forward_stream(state.clone(), conversation_id, upstream, tx));

    let events = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|event| (event, rx))
    })
    .map(|event| sse_event(&event))
    .boxed();

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn canned_sse(
    text: &str,
    message_id: &str,
    refused: bool,
) -> Sse<KeepAliveStream<BoxStream<'static, Result<Event, Infallible>>>> {
    let events = vec![
        sse_event(&ChatEvent::Content {
            text: text.to_string(),
        }),
        sse_event(&ChatEvent::Done {
            message_id: message_id.to_string(),
            refused,
        }),
    ];
    Sse::new(futures::stream::iter(events).boxed()).keep_alive(KeepAlive::default())
}

/// Drain the upstream completion, forwarding deltas to the SSE channel.
///
/// If the client disconnects the channel closes; consumption stops there and
/// the partial buffer is still finalized as the assistant turn, so the
/// transcript matches whatever the client last displayed.
async fn forward_stream(
    state: Arc<AppState>,
    conversation_id: String,
    mut upstream: async_openai::types::chat::ChatCompletionResponseStream,
    tx: mpsc::Sender<ChatEvent>,
) {
    let idle = state.completions.idle_timeout();
    let mut buffer = String::new();
    let mut client_gone = false;

    'consume: loop {
        match timeout(idle, upstream.next()).await {
            Err(_) => {
                tracing::warn!("completion stream stalled, finalizing partial reply");
                break;
            }
            Ok(None) => break,
            Ok(Some(Ok(chunk))) => {
                for choice in &chunk.choices {
                    if let Some(delta) = &choice.delta.content {
                        buffer.push_str(delta);
                        let event = ChatEvent::Content {
                            text: delta.clone(),
                        };
                        if tx.send(event).await.is_err() {
                            tracing::debug!("SSE client disconnected, stopping stream");
                            client_gone = true;
                            break 'consume;
                        }
                    }
                }
            }
            Ok(Some(Err(e))) => {
                tracing::error!(error = %e, "completion stream error");
                if buffer.is_empty() {
                    let _ = tx
                        .send(ChatEvent::Error {
                            message: "AI generation failed".to_string(),
                        })
                        .await;
                }
                break;
            }
        }
    }

    let reply = if validate_reply(&buffer) {
        buffer
    } else {
        FALLBACK_ERROR_MESSAGE.to_string()
    };

    let token_count = estimate_tokens(&reply);
    let assistant_message = state.sessions.append(
        &conversation_id,
        MessageRole::Assistant,
        &reply,
        false,
        Some(token_count),
    );

    if client_gone {
        return;
    }

    if let Some(message) = assistant_message {
        let _ = tx
            .send(ChatEvent::Done {
                message_id: message.id,
                refused: false,
            })
            .await;
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/chat/conversations/{conversation_id}",
    params(("conversation_id" = String, Path, description = "Conversation id")),
    responses(
        (status = 200, body = DeleteConversationResponse, description = "Conversation deleted"),
        (status = 404, description = "Conversation not found"),
    ),
    tag = "Chat"
)]
pub async fn delete_conversation(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<DeleteConversationResponse>, AppError> {
    let deleted_messages_count = state
        .sessions
        .delete(&conversation_id)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    Ok(Json(DeleteConversationResponse {
        success: true,
        deleted_conversation_id: conversation_id,
        deleted_messages_count,
    }))
}
