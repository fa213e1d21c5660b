//! Embedded HTTP server: content catalog API, study stats, and the
//! `/api/chat` proxy, with an optional static front-end directory.
//!
//! The chat route forwards the user's message to the completion API and
//! relays the reply. Upstream failures keep their status code; a missing
//! credential or an unexpected failure becomes a 500. Errors always carry a
//! JSON `{"error": ...}` body so the front-end can show them inline.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::catalog::Catalog;
use crate::chat::{ChatClient, ChatConfig, ChatError};
use crate::stats::StatsStorage;

/// Server configuration.
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Optional directory with the static front-end, served at `/`.
    pub static_dir: Option<PathBuf>,
    /// Data directory for the stats file.
    pub data_dir: PathBuf,
}

/// State shared across requests.
pub struct AppState {
    catalog: Catalog,
    stats: StatsStorage,
    /// None when no API key is configured; the chat route then answers 500.
    chat: Option<ChatClient>,
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct ChatReply {
    response: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Trimmed message text, or None when the message is missing or blank.
fn validate_message(raw: &str) -> Option<&str> {
    let message = raw.trim();
    (!message.is_empty()).then_some(message)
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let message = match validate_message(&request.message) {
        Some(m) => m,
        None => return error_response(StatusCode::BAD_REQUEST, "Message is required"),
    };

    let client = match &state.chat {
        Some(client) => client,
        None => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatError::MissingApiKey.to_string(),
            )
        }
    };

    match client.complete(message).await {
        Ok(text) => (StatusCode::OK, Json(ChatReply { response: text })).into_response(),
        Err(ChatError::Upstream { status, .. }) => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(code, format!("OpenAI API error: {}", status))
        }
        Err(err) => {
            log::error!("chat proxy failure: {}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error. Please try again later.",
            )
        }
    }
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn notes_handler(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
) -> Response {
    Json(state.catalog.notes(&topic)).into_response()
}

async fn quiz_handler(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Response {
    Json(state.catalog.quiz(&subject)).into_response()
}

async fn deck_handler(State(state): State<Arc<AppState>>, Path(key): Path<String>) -> Response {
    Json(state.catalog.deck(&key)).into_response()
}

async fn stats_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.stats.load() {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => {
            log::error!("failed to load stats: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load stats")
        }
    }
}

fn router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .route(
            "/api/chat",
            post(chat_handler).fallback(method_not_allowed),
        )
        .route("/api/notes/{topic}", get(notes_handler))
        .route("/api/quiz/{subject}", get(quiz_handler))
        .route("/api/decks/{deck}", get(deck_handler))
        .route("/api/stats", get(stats_handler))
        .with_state(state)
        .layer(CorsLayer::permissive());

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app
}

/// Run the server until ctrl-c.
pub async fn serve(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let chat = match ChatConfig::from_env() {
        Ok(chat_config) => Some(ChatClient::new(chat_config)),
        Err(err) => {
            log::warn!("{}; /api/chat will return errors until it is set", err);
            None
        }
    };

    let state = Arc::new(AppState {
        catalog: Catalog::new(),
        stats: StatsStorage::new(config.data_dir)?,
        chat,
    });

    let app = router(state, config.static_dir);

    let listener = TcpListener::bind(config.addr).await?;
    log::info!("slaystudy server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            log::info!("slaystudy server shutting down");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert_eq!(validate_message("hi"), Some("hi"));
        assert_eq!(validate_message("  hi  "), Some("hi"));
        assert_eq!(validate_message(""), None);
        assert_eq!(validate_message("   "), None);
    }

    #[test]
    fn test_chat_request_tolerates_missing_message() {
        // A body without "message" must reach the handler and get a 400
        // there, not a deserialization rejection.
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(validate_message(&request.message).is_none());

        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(validate_message(&request.message), Some("hi"));
    }

    #[test]
    fn test_chat_reply_shape() {
        let reply = serde_json::to_value(ChatReply {
            response: "Hello!".to_string(),
        })
        .unwrap();
        assert_eq!(reply["response"], "Hello!");

        let error = serde_json::to_value(ErrorBody {
            error: "Message is required".to_string(),
        })
        .unwrap();
        assert_eq!(error["error"], "Message is required");
    }
}
