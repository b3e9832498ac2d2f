//! Users endpoints, nested under `/api/v1`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{UserIdPath, ValidJson};
use crate::http::server::AppState;
use crate::models::{User, UserPayload};

/// Delete confirmation
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

/// GET /users - list all users in id order
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(payload).await?;
    tracing::debug!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - replace name and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.update(id, payload).await?;
    tracing::debug!(user_id = user.id, "user updated");

    Ok(Json(user))
}

/// DELETE /users/{id} - hard delete, 404 when absent
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.users.delete(id).await?;
    tracing::debug!(user_id = id.get(), "user deleted");

    Ok(Json(DeleteResponse {
        id: id.get(),
        deleted: true,
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
