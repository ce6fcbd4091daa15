use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, assigning its identity
    async fn create(&self, entity: &Entity) -> CatalogResult<Entity>;

    // replaces an existing entity, all fields at once
    async fn update(&self, id: i64, entity: &Entity) -> CatalogResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> CatalogResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> CatalogResult<usize>;

    // total number of entities currently present
    async fn count(&self) -> CatalogResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
}
