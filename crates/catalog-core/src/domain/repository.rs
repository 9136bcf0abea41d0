//! Repository traits
//!
//! These traits abstract over storage backends. The in-memory
//! implementations live in `infrastructure::memory`.

use async_trait::async_trait;

use crate::domain::entity::Entity;
use crate::domain::search::{SearchFilter, SearchParams, SearchResult};
use crate::error::Result;

/// Collection of entities addressed by identity
///
/// Uniqueness of identities is the caller's policy; `insert` does not check it.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Append an entity
    async fn insert(&mut self, entity: E) -> Result<()>;

    /// Append several entities, preserving their relative order
    async fn bulk_insert(&mut self, entities: Vec<E>) -> Result<()>;

    /// Replace the stored entity with the same identity, in place
    ///
    /// Fails with `Error::NotFound` when no entity has that identity.
    async fn update(&mut self, entity: E) -> Result<()>;

    /// Remove the entity with the given identity
    ///
    /// Fails with `Error::NotFound` when no entity has that identity.
    async fn delete(&mut self, id: &E::Id) -> Result<()>;

    /// Get an entity by identity
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>>;

    /// All stored entities, in storage order
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Entity type name stored by this repository
    fn entity_name(&self) -> &'static str {
        E::entity_name()
    }
}

/// Repository supporting filtered, sorted, paginated search
#[async_trait]
pub trait SearchableRepository<E: Entity, F: SearchFilter = String>: Repository<E> {
    /// Field names accepted as sort keys
    fn sortable_fields(&self) -> Vec<&'static str>;

    /// Run a search; never fails for out-of-range pages
    async fn search(&self, params: &SearchParams<F>) -> Result<SearchResult<E>>;
}
