use chrono::Utc;
use sqlx::{Result, SqlitePool};
use uuid::Uuid;

use super::dto::StatusFilter;
use super::model::Task;

pub async fn create_task(
    pool: &SqlitePool,
    owner_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<Task> {
    let now = Utc::now();
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, owner_id, title, description, completed, created_at, updated_at)
        VALUES (?, ?, ?, ?, 0, ?, ?)
        RETURNING id, owner_id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list_tasks(
    pool: &SqlitePool,
    owner_id: Uuid,
    filter: StatusFilter,
) -> Result<Vec<Task>> {
    let completed = filter.as_completed();
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, owner_id, title, description, completed, created_at, updated_at
        FROM tasks
        WHERE owner_id = ? AND (? IS NULL OR completed = ?)
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .bind(completed)
    .bind(completed)
    .fetch_all(pool)
    .await
}

/// Applies only the supplied fields. Returns None when no task with this id
/// is owned by `owner_id`.
pub async fn update_task(
    pool: &SqlitePool,
    owner_id: Uuid,
    id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
    completed: Option<bool>,
) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET
            title = COALESCE(?, title),
            description = COALESCE(?, description),
            completed = COALESCE(?, completed),
            updated_at = ?
        WHERE id = ? AND owner_id = ?
        RETURNING id, owner_id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(completed)
    .bind(Utc::now())
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

pub async fn toggle_task(pool: &SqlitePool, owner_id: Uuid, id: Uuid) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET completed = NOT completed, updated_at = ?
        WHERE id = ? AND owner_id = ?
        RETURNING id, owner_id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(Utc::now())
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Returns false when nothing was removed, i.e. the task is absent or owned
/// by someone else.
pub async fn delete_task(pool: &SqlitePool, owner_id: Uuid, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
