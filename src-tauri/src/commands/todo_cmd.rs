//! Tauri Commands for Todo CRUD
//!
//! The four-operation RPC surface exposed to the frontend.

use tauri::State;
use tracing::info;

use crate::domain::{DomainError, Todo, TodoStatus};
use crate::repository::{Repository, StatusFilteredRepository};
use crate::AppState;

/// List todos whose status is in `statuses`, in creation order
#[tauri::command]
pub async fn get_all_todos(
    state: State<'_, AppState>,
    statuses: Vec<TodoStatus>,
) -> Result<Vec<Todo>, String> {
    state
        .todo_repo
        .list_by_statuses(&statuses)
        .await
        .map_err(|e| e.to_string())
}

/// Create a new pending todo
#[tauri::command]
pub async fn create_todo(state: State<'_, AppState>, body: String) -> Result<Todo, String> {
    if body.trim().is_empty() {
        return Err(DomainError::InvalidInput("todo body must not be blank".to_string()).to_string());
    }

    let created = state
        .todo_repo
        .create(&Todo::new(0, body))
        .await
        .map_err(|e| e.to_string())?;

    info!(id = created.id, "created todo");
    Ok(created)
}

/// Set a todo's status
#[tauri::command]
pub async fn update_todo_status(
    state: State<'_, AppState>,
    todo_id: u32,
    status: TodoStatus,
) -> Result<Todo, String> {
    let mut todo = state
        .todo_repo
        .find_by_id(todo_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("todo {}", todo_id)).to_string())?;

    todo.status = status;

    let updated = state
        .todo_repo
        .update(&todo)
        .await
        .map_err(|e| e.to_string())?;

    info!(id = todo_id, status = status.as_str(), "updated todo status");
    Ok(updated)
}

/// Delete a todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.todo_repo.delete(id).await.map_err(|e| e.to_string())?;

    info!(id, "deleted todo");
    Ok(())
}
