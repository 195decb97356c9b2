//! Todo App Backend
//!
//! Layered architecture:
//! - domain: Core entities and error types
//! - repository: Data access abstractions and the SQLite implementation
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod domain;
mod repository;

use repository::{init_db, TodoRepository};

/// Application state shared across commands
pub struct AppState {
    pub todo_repo: TodoRepository,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("todo_app.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tauri::Builder::default()
        .setup(|app| {
            let db_path = get_db_path(app.handle())?;
            let conn = init_db(&db_path)?;
            info!(path = %db_path.display(), "database initialized");

            app.manage(AppState {
                todo_repo: TodoRepository::new(Arc::new(Mutex::new(conn))),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_all_todos,
            commands::create_todo,
            commands::update_todo_status,
            commands::delete_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
