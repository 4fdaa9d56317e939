use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_write_error;
use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionDraft};

/// Persistence contract for regions
///
/// `update` and `delete` return `None` when no region has the given id.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Region>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>>;
    async fn create(&self, draft: RegionDraft) -> Result<Region>;
    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>>;
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;
}

/// Read-only capability used to check that a region reference resolves
#[async_trait]
pub trait RegionLookup: Send + Sync {
    async fn region_exists(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
impl<T> RegionLookup for T
where
    T: RegionRepository,
{
    async fn region_exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}

/// PostgreSQL-backed region repository
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn list_all(&self) -> Result<Vec<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, lat, lng, population
            FROM regions
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, lat, lng, population
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, draft: RegionDraft) -> Result<Region> {
        sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (code, name, area, lat, lng, population)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, name, area, lat, lng, population
            "#,
        )
        .bind(draft.code)
        .bind(draft.name)
        .bind(draft.area)
        .bind(draft.lat)
        .bind(draft.long)
        .bind(draft.population)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create region: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            UPDATE regions
            SET code = $1,
                name = $2,
                area = $3,
                lat = $4,
                lng = $5,
                population = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING id, code, name, area, lat, lng, population
            "#,
        )
        .bind(draft.code)
        .bind(draft.name)
        .bind(draft.area)
        .bind(draft.lat)
        .bind(draft.long)
        .bind(draft.population)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, area, lat, lng, population
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                AppError::Conflict(format!(
                    "Region {} is still referenced by one or more walks",
                    id
                ))
            })
        })
    }
}
