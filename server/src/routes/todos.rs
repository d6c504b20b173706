use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crud_core::{CreateTodo, Resource, Todo, UpdateTodo};

use crate::error::ApiError;
use crate::extract::{record_id, IdSegment, JsonBody};
use crate::AppState;

/// Routes mounted under `/api/todos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.read().await;
    Ok(Json(todos.list()?.to_vec()))
}

async fn get_todo(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
) -> Result<Json<Todo>, ApiError> {
    let id = record_id(&id, Resource::Todo)?;
    let todos = state.todos.read().await;
    Ok(Json(todos.get(id)?.clone()))
}

async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.todos.write().await.create(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let id = record_id(&id, Resource::Todo)?;
    let todo = state.todos.write().await.update(id, input)?;
    Ok(Json(todo))
}

// Unlike users, a deleted todo is echoed back with 200.
async fn delete_todo(
    State(state): State<AppState>,
    IdSegment(id): IdSegment,
) -> Result<Json<Todo>, ApiError> {
    let id = record_id(&id, Resource::Todo)?;
    let todo = state.todos.write().await.delete(id)?;
    Ok(Json(todo))
}
