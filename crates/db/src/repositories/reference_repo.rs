//! Reference table lookups.

use sqlx::PgPool;

use crate::models::reference::NamedItem;

/// Name lists for the filter panels.
pub struct ReferenceRepo;

impl ReferenceRepo {
    pub async fn sites(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(pool, "SELECT id, name FROM sites ORDER BY name").await
    }

    pub async fn teams(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(pool, "SELECT id, name FROM teams ORDER BY name").await
    }

    pub async fn groups(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(pool, "SELECT id, name FROM agent_groups ORDER BY name").await
    }

    pub async fn experiences(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(pool, "SELECT id, name FROM experiences ORDER BY name").await
    }

    pub async fn contexts(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(pool, "SELECT id, name FROM contexts ORDER BY name").await
    }

    /// Enabled activities only; disabled ones are hidden everywhere.
    pub async fn activities(pool: &PgPool) -> Result<Vec<NamedItem>, sqlx::Error> {
        named(
            pool,
            "SELECT id, name FROM activities WHERE enabled ORDER BY name",
        )
        .await
    }
}

async fn named(pool: &PgPool, query: &str) -> Result<Vec<NamedItem>, sqlx::Error> {
    sqlx::query_as::<_, NamedItem>(query).fetch_all(pool).await
}
