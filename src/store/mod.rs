pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::recipe::{NewRecipe, Recipe};

/// Errors from recipe stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence abstraction for recipes, independent of the storage engine.
///
/// Listing is the only read path: exactly the records owned by the given
/// identity, most recent id first. Reads never mutate.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Fetch all recipes where `owner_id == owner`, ordered by id descending.
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Recipe>, StoreError>;

    /// Persist a new recipe for `owner`; assigns the next id and timestamp.
    async fn insert(&self, owner: Uuid, draft: NewRecipe) -> Result<Recipe, StoreError>;

    /// Liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
