//! Generic in-memory repositories
//!
//! The store is exclusively owned by one repository and mutated through
//! `&mut self`, so no locks are involved.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entity::Entity;
use crate::domain::repository::{Repository, SearchableRepository};
use crate::domain::search::{SearchParams, SearchPolicy, SearchResult, search_items};
use crate::error::{Error, Result};

/// Vec-backed repository preserving insertion order
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `items`
    pub fn with_items(items: Vec<E>) -> Self {
        Self { items }
    }

    /// Borrow the stored sequence
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &E::Id) -> Option<usize> {
        self.items.iter().position(|item| item.entity_id() == id)
    }

    fn not_found(id: &E::Id) -> Error {
        debug!(entity = E::entity_name(), id = %id, "Entity not found");
        Error::not_found(id, E::entity_name())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&mut self, entity: E) -> Result<()> {
        debug!(entity = E::entity_name(), id = %entity.entity_id(), "Inserting entity");
        self.items.push(entity);
        Ok(())
    }

    async fn bulk_insert(&mut self, entities: Vec<E>) -> Result<()> {
        debug!(entity = E::entity_name(), count = entities.len(), "Bulk inserting entities");
        self.items.extend(entities);
        Ok(())
    }

    async fn update(&mut self, entity: E) -> Result<()> {
        let index = self
            .position(entity.entity_id())
            .ok_or_else(|| Self::not_found(entity.entity_id()))?;
        debug!(entity = E::entity_name(), id = %entity.entity_id(), "Updating entity");
        self.items[index] = entity;
        Ok(())
    }

    async fn delete(&mut self, id: &E::Id) -> Result<()> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        debug!(entity = E::entity_name(), id = %id, "Deleting entity");
        self.items.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        Ok(self.position(id).map(|index| self.items[index].clone()))
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.items.clone())
    }
}

/// In-memory repository whose search filter comes from a [`SearchPolicy`]
#[derive(Debug, Clone)]
pub struct InMemorySearchableRepository<E, P> {
    store: InMemoryRepository<E>,
    policy: P,
}

impl<E: Entity, P: SearchPolicy<E>> InMemorySearchableRepository<E, P> {
    pub fn new(policy: P) -> Self {
        Self {
            store: InMemoryRepository::new(),
            policy,
        }
    }

    pub fn with_items(policy: P, items: Vec<E>) -> Self {
        Self {
            store: InMemoryRepository::with_items(items),
            policy,
        }
    }

    /// Borrow the stored sequence
    pub fn items(&self) -> &[E] {
        self.store.items()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<E: Entity, P: SearchPolicy<E> + Default> Default for InMemorySearchableRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

#[async_trait]
impl<E: Entity, P: SearchPolicy<E>> Repository<E> for InMemorySearchableRepository<E, P> {
    async fn insert(&mut self, entity: E) -> Result<()> {
        self.store.insert(entity).await
    }

    async fn bulk_insert(&mut self, entities: Vec<E>) -> Result<()> {
        self.store.bulk_insert(entities).await
    }

    async fn update(&mut self, entity: E) -> Result<()> {
        self.store.update(entity).await
    }

    async fn delete(&mut self, id: &E::Id) -> Result<()> {
        self.store.delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        self.store.find_all().await
    }
}

#[async_trait]
impl<E: Entity, P: SearchPolicy<E>> SearchableRepository<E, P::Filter>
    for InMemorySearchableRepository<E, P>
{
    fn sortable_fields(&self) -> Vec<&'static str> {
        self.policy.sortable_fields().names()
    }

    async fn search(&self, params: &SearchParams<P::Filter>) -> Result<SearchResult<E>> {
        Ok(search_items(self.store.items(), params, &self.policy))
    }
}
