use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crud_core::{CreateUser, Resource, UpdateUser, User};

use crate::error::ApiError;
use crate::extract::{record_id, IdSegment, JsonBody};
use crate::AppState;

/// Routes mounted under `/api/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.read().await;
    Ok(Json(users.list()?.to_vec()))
}

async fn get_user(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
) -> Result<Json<User>, ApiError> {
    let id = record_id(&id, Resource::User)?;
    let users = state.users.read().await;
    Ok(Json(users.get(id)?.clone()))
}

async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.write().await.create(input)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
    JsonBody(input): JsonBody<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    let id = record_id(&id, Resource::User)?;
    let user = state.users.write().await.update(id, input)?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
) -> Result<StatusCode, ApiError> {
    let id = record_id(&id, Resource::User)?;
    state.users.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
