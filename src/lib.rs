pub mod boundary;
pub mod config;
pub mod error;
pub mod models;
pub mod personas;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::http::header;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Settings;
use services::completion::CompletionClient;
use services::session::SessionStore;

pub struct AppState {
    pub settings: Settings,
    pub start_time: Instant,
    pub http_client: reqwest::Client,
    pub completions: CompletionClient,
    pub sessions: SessionStore,
}

pub fn build_state(settings: Settings) -> Arc<AppState> {
    let http_client = reqwest::Client::new();

    let completions = CompletionClient::groq(
        http_client.clone(),
        &settings.groq_api_key,
        &settings.groq_api_base,
        &settings.groq_model,
        settings.groq_max_tokens,
        settings.groq_temperature,
        settings.groq_timeout,
    );

    let sessions = SessionStore::new(
        settings.session_max_messages,
        settings.history_context_turns,
    );

    Arc::new(AppState {
        settings,
        start_time: Instant::now(),
        http_client,
        completions,
        sessions,
    })
}

pub fn build_router(state: Arc<AppState>) -> Router {
    use axum::routing::{delete, get, post};
    use routes::{chat, health, openapi, personas};

    let cors = build_cors(&state.settings);

    Router::new()
        // Health
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/status", get(health::status))
        // Personas
        .route("/api/v1/personas", get(personas::list_personas))
        .route("/api/v1/personas/{name}", get(personas::get_persona))
        .route(
            "/api/v1/personas/{name}/system-prompt",
            get(personas::get_system_prompt),
        )
        .route("/api/v1/models", get(personas::list_models))
        // Chat
        .route(
            "/api/v1/chat/conversations",
            post(chat::create_conversation),
        )
        .route(
            "/api/v1/chat/conversations/{conversation_id}/messages",
            get(chat::list_messages).post(chat::send_message),
        )
        .route(
            "/api/v1/chat/conversations/{conversation_id}/stream",
            post(chat::stream_message),
        )
        .route(
            "/api/v1/chat/conversations/{conversation_id}",
            delete(chat::delete_conversation),
        )
        // API docs
        .merge(openapi::swagger_ui())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(settings: &Settings) -> CorsLayer {
    let origins = settings.cors_origins_list();

    if origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        use axum::http::Method;
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::ORIGIN,
            ])
            .allow_credentials(true)
    }
}
