//! User management endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{validate_user, User};

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!(email = %user.email, "Creating user");

    validate_user(&user)?;

    let created = state.user_service.create(user).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    debug!(id, "Fetching user");

    let user = state.user_service.get(id).await?;

    Ok(Json(user))
}

/// PUT /api/users/{id}
///
/// The path identifier overrides whatever identifier the body carries.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut user): Json<User>,
) -> Result<Json<User>, ApiError> {
    debug!(id, "Updating user");

    user.id = Some(id);
    validate_user(&user)?;

    let updated = state.user_service.update(user).await?;

    Ok(Json(updated))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Deleting user");

    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(users))
}
