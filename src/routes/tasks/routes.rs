use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateTask, ListParams, StatusFilter, UpdateTask};
use super::model::Task;
use super::queries;
use crate::error::AppError;
use crate::routes::middleware_auth::AuthUser;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Task>>, AppError> {
    let filter = StatusFilter::parse(params.status.as_deref());
    let tasks = queries::list_tasks(&state.db, owner_id, filter).await?;
    Ok(Json(tasks))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Json(body): Json<CreateTask>,
) -> Result<impl IntoResponse, AppError> {
    let (title, description) = body.validated()?;
    let task = queries::create_task(&state.db, owner_id, &title, description.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTask>,
) -> Result<Json<Task>, AppError> {
    let body = body.validated()?;
    queries::update_task(
        &state.db,
        owner_id,
        id,
        body.title.as_deref(),
        body.description.as_deref(),
        body.completed,
    )
    .await?
    .map(Json)
    .ok_or_else(AppError::task_not_found)
}

pub async fn toggle(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, AppError> {
    queries::toggle_task(&state.db, owner_id, id)
        .await?
        .map(Json)
        .ok_or_else(AppError::task_not_found)
}

pub async fn delete(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if queries::delete_task(&state.db, owner_id, id).await? {
        Ok(Json(
            serde_json::json!({ "message": "Task deleted successfully" }),
        ))
    } else {
        Err(AppError::task_not_found())
    }
}
