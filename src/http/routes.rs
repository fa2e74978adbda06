use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::application::{AppError, VoteService};
use crate::domain::VoteIntent;

/// Response body for both read and mutation endpoints.
#[derive(Debug, Serialize)]
pub struct VotesBody {
    pub votes: i64,
}

/// Optional POST payload. The toggle policy reads `voted` (absent means
/// vote); `voterId` is recorded when present and only enforced when
/// uniqueness enforcement is on.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoteRequest {
    pub voted: Option<bool>,
    pub voter_id: Option<String>,
}

impl From<VoteRequest> for VoteIntent {
    fn from(req: VoteRequest) -> Self {
        VoteIntent {
            voted: req.voted.unwrap_or(true),
            voter_id: req.voter_id,
        }
    }
}

/// Domain error carried up to the HTTP boundary.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            // Fixed body shape: the UI matches on it verbatim.
            AppError::ReportNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Report not found" })),
            )
                .into_response(),
        }
    }
}

/// Build the router over a shared vote service.
/// CORS is permissive: the UI runs on another origin/port in development.
pub fn router(service: Arc<VoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/reports/{id}/vote", get(get_votes).post(post_vote))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Bind a listener and serve the vote API until the process is killed.
pub async fn serve(service: Arc<VoteService>, addr: SocketAddr) -> Result<()> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "vote service listening");
    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;
    Ok(())
}

async fn root() -> &'static str {
    "civicvote server running. Use /api/reports/{id}/vote"
}

async fn get_votes(
    State(service): State<Arc<VoteService>>,
    Path(id): Path<String>,
) -> Result<Json<VotesBody>, ApiError> {
    let votes = service.get_count(&id).await?;
    Ok(Json(VotesBody { votes }))
}

async fn post_vote(
    State(service): State<Arc<VoteService>>,
    Path(id): Path<String>,
    body: Option<Json<VoteRequest>>,
) -> Result<Json<VotesBody>, ApiError> {
    // Empty body is a plain upvote; the monotonic policy ignores payloads anyway.
    let intent = body.map(|Json(req)| req.into()).unwrap_or_default();
    let votes = service.apply_vote(&id, intent).await?;
    Ok(Json(VotesBody { votes }))
}
