use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::models::responses::{
    HealthResponse, ServiceHealth, StatusResponse, SystemStatistics,
};
use crate::personas;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, body = HealthResponse, description = "Service health check")),
    tag = "Health"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();
    services.insert(
        "completion_api".to_string(),
        ServiceHealth {
            status: if state.completions.is_configured() {
                "up".to_string()
            } else {
                "demo".to_string()
            },
            error: None,
        },
    );
    services.insert(
        "session_store".to_string(),
        ServiceHealth {
            status: "up".to_string(),
            error: None,
        },
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().naive_utc(),
        services,
    })
}

#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, body = StatusResponse, description = "Detailed service status")),
    tag = "Health"
)]
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let (active_conversations, total_messages) = state.sessions.stats();

    Json(StatusResponse {
        service: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.clone(),
        uptime_seconds: uptime,
        demo_mode: !state.completions.is_configured(),
        statistics: SystemStatistics {
            active_conversations,
            total_messages,
            registered_personas: personas::all().len(),
        },
        timestamp: Utc::now().naive_utc(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service info")),
    tag = "Health"
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": state.settings.app_name,
        "version": state.settings.app_version,
        "status": "running",
        "docs": "/explorer/",
        "health": "/health",
    }))
}
