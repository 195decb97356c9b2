//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access. Implementations can use
//! SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, Todo, TodoStatus};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. All operations are async to support
/// various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for todo repositories that filter by status subset
#[async_trait]
pub trait StatusFilteredRepository: Repository<Todo> {
    /// List todos whose status is in `statuses`, in creation order
    async fn list_by_statuses(&self, statuses: &[TodoStatus]) -> DomainResult<Vec<Todo>>;
}
