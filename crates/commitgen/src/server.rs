use crate::config::ServeOptions;
use crate::generator::{generate_message, GeminiClient, Generator};
use crate::prelude::{eprintln, *};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use commitgen_core::{ErrorBody, GenerationRequest, GenerationResult};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const HEALTH_TEXT: &str = "commitgen is running";

#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn Generator>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let client = GeminiClient::new(&options.gemini)?;
    let addr = options.addr();

    if global.verbose {
        eprintln!("Model: {}", options.gemini.model);
        eprintln!("Upstream: {}", options.gemini.base_url);
        eprintln!("Body limit: {} bytes", options.body_limit);
    }

    let app_router = router(Arc::new(client), options.body_limit);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server running on http://{addr}");

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Build the relay's routes around a generator.
pub fn router(generator: Arc<dyn Generator>, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler))
        .route("/generate", post(generate_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(AppState { generator })
}

async fn health_handler() -> &'static str {
    HEALTH_TEXT
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> std::result::Result<Json<GenerationResult>, Error> {
    let Json(request) = payload?;
    let result = generate_message(state.generator.as_ref(), &request).await?;
    Ok(Json(result))
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::BodyTooLarge
        } else {
            Error::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::MissingDiff(_) => (StatusCode::BAD_REQUEST, ErrorBody::MISSING_DIFF),
            Error::InvalidBody(_) => (StatusCode::BAD_REQUEST, ErrorBody::INVALID_BODY),
            Error::BodyTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, ErrorBody::BODY_TOO_LARGE),
            Error::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::GENERATION_FAILED,
            ),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
