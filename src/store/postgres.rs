use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::config;
use crate::models::recipe::{NewRecipe, Recipe};
use crate::store::{RecipeStore, StoreError};

/// Postgres-backed store. Expects the `recipes` table from schema.sql.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect using DATABASE_URL with pool limits from config.
    pub async fn connect() -> Result<Self, StoreError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| StoreError::Unavailable("DATABASE_URL not set".to_string()))?;

        let db_config = &config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(db_config.connection_timeout))
            .connect(&url)
            .await?;

        tracing::info!(
            "Connected recipe store (max_connections={})",
            db_config.max_connections
        );

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecipeStore for PgStore {
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Recipe>, StoreError> {
        let rows = sqlx::query_as::<_, Recipe>(
            "SELECT id, owner_id, title, time_minutes, price, description, link, created_at \
             FROM recipes WHERE owner_id = $1 ORDER BY id DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, owner: Uuid, draft: NewRecipe) -> Result<Recipe, StoreError> {
        let row = sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (owner_id, title, time_minutes, price, description, link) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, owner_id, title, time_minutes, price, description, link, created_at",
        )
        .bind(owner)
        .bind(draft.title)
        .bind(draft.time_minutes)
        .bind(draft.price)
        .bind(draft.description)
        .bind(draft.link)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
