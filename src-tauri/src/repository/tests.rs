//! Repository Integration Tests
//!
//! Tests for TodoRepository with in-memory SQLite databases.

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use crate::domain::{Todo, TodoStatus};
    use crate::repository::{init_db, Repository, StatusFilteredRepository, TodoRepository};

    fn setup_test_db() -> TodoRepository {
        let conn = init_db(Path::new(":memory:")).expect("Failed to init test DB");
        TodoRepository::new(Arc::new(Mutex::new(conn)))
    }

    #[tokio::test]
    async fn test_create_todo() {
        let repo = setup_test_db();

        let todo = Todo::new(0, "Buy milk".to_string());
        let created = repo.create(&todo).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.body, "Buy milk");
        assert_eq!(created.status, TodoStatus::Pending);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_db();

        let created = repo
            .create(&Todo::new(0, "Find me".to_string()))
            .await
            .expect("Failed to create");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert_eq!(found, Some(created));

        let missing = repo.find_by_id(9999).await.expect("Find failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let repo = setup_test_db();

        repo.create(&Todo::new(0, "First".to_string())).await.unwrap();
        repo.create(&Todo::new(0, "Second".to_string())).await.unwrap();
        repo.create(&Todo::new(0, "Third".to_string())).await.unwrap();

        let todos = repo.list().await.expect("List failed");
        let bodies: Vec<&str> = todos.iter().map(|t| t.body.as_str()).collect();
        assert_eq!(bodies, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_update_todo() {
        let repo = setup_test_db();

        let mut created = repo.create(&Todo::new(0, "Original".to_string())).await.unwrap();

        created.body = "Updated".to_string();
        created.status = TodoStatus::Completed;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.body, "Updated");
        assert_eq!(updated.status, TodoStatus::Completed);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = setup_test_db();

        let ghost = Todo::new(42, "Ghost".to_string());
        let result = repo.update(&ghost).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_status() {
        let repo = setup_test_db();

        let created = repo.create(&Todo::new(0, "Toggle me".to_string())).await.unwrap();
        let original = created.status;

        let mut toggled = created.clone();
        toggled.status = toggled.status.toggled();
        let toggled = repo.update(&toggled).await.unwrap();
        assert_ne!(toggled.status, original);

        let mut back = toggled.clone();
        back.status = back.status.toggled();
        repo.update(&back).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.status, original);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = setup_test_db();

        let keep = repo.create(&Todo::new(0, "Keep".to_string())).await.unwrap();
        let doomed = repo.create(&Todo::new(0, "Doomed".to_string())).await.unwrap();

        repo.delete(doomed.id).await.expect("Delete failed");

        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, keep.id);

        assert!(repo.find_by_id(doomed.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = setup_test_db();

        let result = repo.delete(9999).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_by_statuses_filters() {
        let repo = setup_test_db();

        let pending = repo.create(&Todo::new(0, "Pending one".to_string())).await.unwrap();
        let mut completed = repo.create(&Todo::new(0, "Done one".to_string())).await.unwrap();
        completed.status = TodoStatus::Completed;
        let completed = repo.update(&completed).await.unwrap();

        let only_pending = repo.list_by_statuses(&[TodoStatus::Pending]).await.unwrap();
        assert_eq!(only_pending, vec![pending.clone()]);
        assert!(only_pending.iter().all(|t| t.status == TodoStatus::Pending));

        let only_completed = repo.list_by_statuses(&[TodoStatus::Completed]).await.unwrap();
        assert_eq!(only_completed, vec![completed.clone()]);

        let both = repo
            .list_by_statuses(&[TodoStatus::Pending, TodoStatus::Completed])
            .await
            .unwrap();
        assert_eq!(both, vec![pending, completed]);
    }

    #[tokio::test]
    async fn test_list_by_statuses_empty_subset() {
        let repo = setup_test_db();

        repo.create(&Todo::new(0, "Invisible".to_string())).await.unwrap();

        let none = repo.list_by_statuses(&[]).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("todo_app.db");

        {
            let conn = init_db(&db_path).expect("Failed to init DB");
            let repo = TodoRepository::new(Arc::new(Mutex::new(conn)));
            repo.create(&Todo::new(0, "Survive restart".to_string())).await.unwrap();
        }

        let conn = init_db(&db_path).expect("Failed to reopen DB");
        let repo = TodoRepository::new(Arc::new(Mutex::new(conn)));
        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].body, "Survive restart");
    }
}
