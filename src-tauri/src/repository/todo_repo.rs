//! Todo Repository
//!
//! SQLite-backed implementation of the todo CRUD operations.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use tokio::sync::Mutex;

use super::traits::{Repository, StatusFilteredRepository};
use crate::domain::{DomainError, DomainResult, Todo, TodoStatus};

/// SQLite implementation of the todo repository
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO todos (body, status) VALUES (?1, ?2)",
            params![entity.body, entity.status.as_str()],
        )?;
        let id = conn.last_insert_rowid() as u32;

        Ok(Todo {
            id,
            body: entity.body.clone(),
            status: entity.status,
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;

        let row = conn
            .query_row(
                "SELECT id, body, status FROM todos WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, u32>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, body, status)| row_to_todo(id, body, status))
            .transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, body, status FROM todos ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut todos = Vec::new();
        for row in rows {
            let (id, body, status) = row?;
            todos.push(row_to_todo(id, body, status)?);
        }
        Ok(todos)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE todos SET body = ?1, status = ?2 WHERE id = ?3",
            params![entity.body, entity.status.as_str(), entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", entity.id)));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let changed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }

        Ok(())
    }
}

#[async_trait]
impl StatusFilteredRepository for TodoRepository {
    async fn list_by_statuses(&self, statuses: &[TodoStatus]) -> DomainResult<Vec<Todo>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.conn.lock().await;

        let placeholders = vec!["?"; statuses.len()].join(", ");
        let sql = format!(
            "SELECT id, body, status FROM todos WHERE status IN ({}) ORDER BY id ASC",
            placeholders
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params_from_iter(statuses.iter().map(|s| s.as_str())),
            |row| {
                Ok((
                    row.get::<_, u32>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )?;

        let mut todos = Vec::new();
        for row in rows {
            let (id, body, status) = row?;
            todos.push(row_to_todo(id, body, status)?);
        }
        Ok(todos)
    }
}

/// Convert raw row values to a Todo, rejecting unknown status strings
fn row_to_todo(id: u32, body: String, status: String) -> DomainResult<Todo> {
    let status = TodoStatus::from_str(&status)
        .ok_or_else(|| DomainError::Internal(format!("todo {}: unknown status '{}'", id, status)))?;
    Ok(Todo { id, body, status })
}
