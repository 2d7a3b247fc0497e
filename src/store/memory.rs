use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::recipe::{NewRecipe, Recipe};
use crate::store::{RecipeStore, StoreError};

/// In-memory store. Used by the integration tests and for credential-less
/// local runs (`RECIPE_STORE=memory`). Ids are assigned from a single
/// process-wide counter, so creation order is observable across owners.
pub struct MemoryStore {
    rows: RwLock<Vec<Recipe>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Recipe>, StoreError> {
        let rows = self.rows.read().await;
        let mut matches: Vec<Recipe> = rows
            .iter()
            .filter(|r| r.owner_id == owner)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matches)
    }

    async fn insert(&self, owner: Uuid, draft: NewRecipe) -> Result<Recipe, StoreError> {
        let recipe = Recipe {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            owner_id: owner,
            title: draft.title,
            time_minutes: draft.time_minutes,
            price: draft.price,
            description: draft.description,
            link: draft.link,
            created_at: Utc::now(),
        };

        let mut rows = self.rows.write().await;
        rows.push(recipe.clone());
        Ok(recipe)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
