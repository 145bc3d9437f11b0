//! HTTP API server implementation

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::core::client::MicrosoftTranslator;
use crate::core::config::GatewayConfig;
use crate::core::errors::GatewayError;
use crate::core::gateway::{TranslationGateway, TRANSLATION_FAILED_MESSAGE};
use crate::core::models::{ErrorResponse, PingResponse, TranslatePayload, TranslateResponse};

/// Application state
pub type AppState = Arc<TranslationGateway>;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            // The cause was already logged by the gateway; never echo it.
            GatewayError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(TRANSLATION_FAILED_MESSAGE)),
            )
                .into_response(),
        }
    }
}

/// Health check handler
async fn ping(State(gateway): State<AppState>) -> Json<PingResponse> {
    Json(gateway.handle_ping())
}

/// Translation handler
///
/// A body that fails to parse is handled exactly like one with no fields.
async fn translate(
    State(gateway): State<AppState>,
    payload: Result<Json<TranslatePayload>, JsonRejection>,
) -> Result<Json<TranslateResponse>, GatewayError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!("Rejected translate body: {}", rejection.body_text());
            TranslatePayload::default()
        }
    };

    gateway.handle_translate(payload).await.map(Json)
}

/// Build the HTTP router for the gateway
pub fn build_router(gateway: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(config: GatewayConfig) -> anyhow::Result<()> {
    config.validate()?;

    let translator = MicrosoftTranslator::new(&config)?;
    let gateway = Arc::new(TranslationGateway::new(Arc::new(translator)));
    let app = build_router(gateway);

    // Bind address
    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Starting server on {}", addr);
    info!("Upstream: {} (region: {})", config.api_endpoint, config.region);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wait for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
