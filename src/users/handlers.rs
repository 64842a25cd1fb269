use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{MessageResponse, RegisterRequest},
        repo_types::User,
        services::validate_registration,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user", post(register))
        .route("/api/users", get(list_users))
}

#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Only a JSON object is accepted; serde would otherwise bind a sequence
    // positionally onto the struct fields.
    let Json(body) = body.map_err(|rejection| {
        warn!(error = %rejection, "rejected register body");
        ApiError::from(rejection)
    })?;
    let payload: RegisterRequest = serde_json::from_value(Value::Object(body)).map_err(|e| {
        warn!(error = %e, "register body has wrong field types");
        ApiError::Validation(e.to_string())
    })?;

    if let Err(e) = validate_registration(&payload) {
        warn!(error = %e, "invalid registration");
        return Err(e);
    }

    if let Err(e) = state.users.insert(&payload.email, &payload.password).await {
        error!(error = %e, "insert user failed");
        return Err(ApiError::Internal("Failed to insert user"));
    }

    info!(email = %payload.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully",
    }))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    match state.users.list().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            error!(error = %e, "list users failed");
            Err(ApiError::Internal("Failed to fetch users"))
        }
    }
}
