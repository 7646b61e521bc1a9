//! HTTP server implementation using Axum.

use crate::assistant::{Assistant, ChatResponse, Outcome};
use crate::request::{ChatRequest, RequestError};
use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use faqbot_core::Suggestion;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Chat replies depend on the request body only and must never be cached.
pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";

/// Build the router with all routes.
pub fn router(assistant: Arc<Assistant>) -> Router {
    Router::new()
        .route("/api/faq-chat", post(faq_chat))
        .route("/api/faq-chat/topics", get(topics))
        .route("/healthz", get(healthz))
        .with_state(assistant)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn serve(assistant: Assistant, bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, entries = assistant.knowledge_base().len(), "faqbot listening");

    axum::serve(listener, router(Arc::new(assistant)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// `POST /api/faq-chat`
async fn faq_chat(
    State(assistant): State<Arc<Assistant>>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let resolved = match body {
        Ok(bytes) => ChatRequest::from_bytes(&bytes),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(RequestError::TooLarge)
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable chat body");
            Err(RequestError::MalformedJson)
        }
    };

    let request = match resolved {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(%err, "rejected chat request");
            let status = match err {
                RequestError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
                RequestError::MissingInput | RequestError::MalformedJson => StatusCode::BAD_REQUEST,
            };
            return (status, Json(ChatResponse::message(err.to_string())));
        }
    };

    let reply = assistant.reply(&request);
    let status = match reply.outcome {
        Outcome::NotFound => StatusCode::NOT_FOUND,
        Outcome::Answered | Outcome::Fallback => StatusCode::OK,
    };
    (status, Json(reply.body))
}

/// `GET /api/faq-chat/topics`
async fn topics(State(assistant): State<Arc<Assistant>>) -> Json<Vec<Suggestion>> {
    Json(assistant.topics())
}

/// `GET /healthz`
async fn healthz() -> &'static str {
    "ok"
}
