#[cfg(test)]
#[path = "server_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatRequest;
use crate::domain::models::GatewayError;
use crate::domain::services::Gateway;

#[derive(Clone)]
struct AppState {
    gateway: Arc<Gateway>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    adapter: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        return (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response();
    }
}

pub fn router(gateway: Arc<Gateway>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    return Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { gateway });
}

pub async fn start(gateway: Arc<Gateway>) -> Result<()> {
    let addr = format!(
        "{host}:{port}",
        host = Config::get(ConfigKey::Host),
        port = Config::get(ConfigKey::Port)
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        adapter = gateway.adapter_name(),
        "Chat gateway listening"
    );

    axum::serve(listener, router(gateway)).await?;

    return Ok(());
}

async fn chat_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let req = match ChatRequest::parse(&body) {
        Ok(req) => req,
        Err(err) => {
            if err.is_validation() {
                tracing::warn!(error = %err, "Rejected chat request");
            } else {
                tracing::error!(error = %err, "Error in chat API");
            }
            return err.into_response();
        }
    };

    // The gateway logs its own failures.
    match state.gateway.respond(&req.messages).await {
        Ok(res) => return Json(res).into_response(),
        Err(err) => return err.into_response(),
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    return Json(HealthResponse {
        status: "ok",
        adapter: state.gateway.adapter_name(),
    });
}
