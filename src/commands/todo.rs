//! Todo Commands
//!
//! Frontend bindings for the four todo backend commands.

use serde::Serialize;

use super::{err_to_string, invoke};
use crate::models::{Todo, TodoStatus};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct GetAllArgs<'a> {
    statuses: &'a [TodoStatus],
}

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct UpdateStatusArgs {
    #[serde(rename = "todoId")]
    todo_id: u32,
    status: TodoStatus,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

pub async fn get_all_todos(statuses: &[TodoStatus]) -> Result<Vec<Todo>, String> {
    let js_args = serde_wasm_bindgen::to_value(&GetAllArgs { statuses }).map_err(|e| e.to_string())?;
    let result = invoke("get_all_todos", js_args).await.map_err(err_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(body: &str) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateTodoArgs { body }).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args).await.map_err(err_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_todo_status(todo_id: u32, status: TodoStatus) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateStatusArgs { todo_id, status })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_todo_status", js_args).await.map_err(err_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_todo", js_args).await.map_err(err_to_string)?;
    Ok(())
}
