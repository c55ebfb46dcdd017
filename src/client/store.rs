use uuid::Uuid;

use super::{ClientError, TasksClient};
use crate::routes::tasks::dto::{StatusFilter, UpdateTask};
use crate::routes::tasks::model::Task;

/// Client-side task list state. The list mirrors the server: fetch replaces
/// it wholesale, add prepends, update and toggle replace the matching entry
/// in place, delete removes it. Failures record an error message and leave
/// the list untouched.
///
/// Every operation returns `Result<(), String>` with the recorded message, so
/// callers can branch without digging into `error` themselves.
#[derive(Default)]
pub struct TaskStore {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }

    pub async fn fetch_tasks(
        &mut self,
        client: &TasksClient,
        filter: StatusFilter,
    ) -> Result<(), String> {
        self.loading = true;
        let outcome = match client.list(filter).await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
                Ok(())
            }
            Err(err) => Err(self.record_error(err, "Failed to fetch tasks")),
        };
        self.loading = false;
        outcome
    }

    pub async fn add_task(
        &mut self,
        client: &TasksClient,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), String> {
        match client.create(title, description).await {
            Ok(task) => {
                self.tasks.insert(0, task);
                Ok(())
            }
            Err(err) => Err(self.record_error(err, "Failed to add task")),
        }
    }

    pub async fn update_task(
        &mut self,
        client: &TasksClient,
        id: Uuid,
        updates: &UpdateTask,
    ) -> Result<(), String> {
        match client.update(id, updates).await {
            Ok(task) => {
                self.replace(task);
                Ok(())
            }
            Err(err) => Err(self.record_error(err, "Failed to update task")),
        }
    }

    pub async fn toggle_task(&mut self, client: &TasksClient, id: Uuid) -> Result<(), String> {
        match client.toggle(id).await {
            Ok(task) => {
                self.replace(task);
                Ok(())
            }
            Err(err) => Err(self.record_error(err, "Failed to toggle task")),
        }
    }

    pub async fn delete_task(&mut self, client: &TasksClient, id: Uuid) -> Result<(), String> {
        match client.delete(id).await {
            Ok(_) => {
                self.tasks.retain(|t| t.id != id);
                Ok(())
            }
            Err(err) => Err(self.record_error(err, "Failed to delete task")),
        }
    }

    // Stable position: the entry keeps its place in the list.
    fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    fn record_error(&mut self, err: ClientError, fallback: &str) -> String {
        let message = match err {
            ClientError::Api { message } => message,
            ClientError::Transport(_) => fallback.to_string(),
        };
        self.error = Some(message.clone());
        message
    }
}
