//! Axum route handlers for the roster API.

use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use indexmap::IndexMap;
use roster_core::{Activity, ActivityName, Enrollment};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{error::GatewayError, state::SharedDirectory};

// ── Shared state ─────────────────────────────────────────────────────────────

type Roster = Arc<SharedDirectory>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query string carrying the participant email (`?email=...`).
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn require(self) -> Result<String, GatewayError> {
        self.email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                GatewayError::InvalidRequest("missing query parameter 'email'".to_owned())
            })
    }
}

/// Confirmation returned by signup and removal.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn signed_up(enrollment: &Enrollment) -> Self {
        Self {
            message: format!("Signed up {} for {}", enrollment.email, enrollment.activity),
        }
    }

    fn removed(enrollment: &Enrollment) -> Self {
        Self {
            message: format!("Removed {} from {}", enrollment.email, enrollment.activity),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over `directory`, serving static assets from
/// `static_dir` under `/static`.
pub fn create_router(directory: Roster, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route(
            "/activities/{activity_name}/participants/{email}",
            delete(remove_participant),
        )
        .route("/activities/{activity_name}/unregister", delete(unregister))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /`: send browsers to the static front page.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /activities`: every activity with its full record.
pub async fn list_activities(
    State(directory): State<Roster>,
) -> Json<IndexMap<ActivityName, Activity>> {
    Json(directory.snapshot())
}

/// `POST /activities/{activity_name}/signup?email=...`
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `email` is missing and
/// [`GatewayError::Directory`] if the directory rejects the signup.
pub async fn signup(
    State(directory): State<Roster>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = query.require()?;
    let enrollment = directory.signup(&activity_name, &email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
    })?;
    info!(activity = %enrollment.activity, email = %enrollment.email, "participant signed up");
    Ok(Json(MessageResponse::signed_up(&enrollment)))
}

/// `DELETE /activities/{activity_name}/participants/{email}`
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity is unknown or the
/// email is not enrolled.
pub async fn remove_participant(
    State(directory): State<Roster>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, GatewayError> {
    remove(&directory, &activity_name, &email)
}

/// `DELETE /activities/{activity_name}/unregister?email=...`
///
/// # Errors
/// Same as [`remove_participant`], plus [`GatewayError::InvalidRequest`] if
/// `email` is missing.
pub async fn unregister(
    State(directory): State<Roster>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = query.require()?;
    remove(&directory, &activity_name, &email)
}

fn remove(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<Json<MessageResponse>, GatewayError> {
    let enrollment = directory.unregister(activity_name, email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "removal rejected");
    })?;
    info!(activity = %enrollment.activity, email = %enrollment.email, "participant removed");
    Ok(Json(MessageResponse::removed(&enrollment)))
}
