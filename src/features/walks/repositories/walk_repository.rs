use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_write_error;
use crate::core::error::{AppError, Result};
use crate::features::walks::models::{Walk, WalkDraft, WalkRow};

/// Persistence contract for walks
///
/// Every returned walk has its region and walk difficulty loaded.
#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Walk>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>>;
    async fn create(&self, draft: WalkDraft) -> Result<Walk>;
    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>>;
    async fn delete(&self, id: Uuid) -> Result<Option<Walk>>;
}

/// Columns selected from `w` (walks), `r` (regions) and `d` (walk_difficulties)
const WALK_COLUMNS: &str = r#"
    w.id, w.name, w.length, w.region_id, w.walk_difficulty_id,
    r.code AS region_code, r.name AS region_name, r.area AS region_area,
    r.lat AS region_lat, r.lng AS region_lng, r.population AS region_population,
    d.code AS walk_difficulty_code
"#;

const WALK_JOINS: &str = r#"
    JOIN regions r ON r.id = w.region_id
    JOIN walk_difficulties d ON d.id = w.walk_difficulty_id
"#;

pub struct PgWalkRepository {
    pool: PgPool,
}

impl PgWalkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn reference_error() -> AppError {
    AppError::BadRequest("Referenced region or walk difficulty does not exist.".to_string())
}

#[async_trait]
impl WalkRepository for PgWalkRepository {
    async fn list_all(&self) -> Result<Vec<Walk>> {
        let query = format!(
            "SELECT {} FROM walks w {} ORDER BY w.name ASC",
            WALK_COLUMNS, WALK_JOINS
        );

        let rows: Vec<WalkRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch walks: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Walk::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>> {
        let query = format!(
            "SELECT {} FROM walks w {} WHERE w.id = $1",
            WALK_COLUMNS, WALK_JOINS
        );

        let row: Option<WalkRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch walk {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Walk::from))
    }

    async fn create(&self, draft: WalkDraft) -> Result<Walk> {
        let query = format!(
            r#"
            WITH w AS (
                INSERT INTO walks (name, length, region_id, walk_difficulty_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT {} FROM w {}
            "#,
            WALK_COLUMNS, WALK_JOINS
        );

        let row: WalkRow = sqlx::query_as(&query)
            .bind(draft.name)
            .bind(draft.length)
            .bind(draft.region_id)
            .bind(draft.walk_difficulty_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, reference_error))?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>> {
        let query = format!(
            r#"
            WITH w AS (
                UPDATE walks
                SET name = $1,
                    length = $2,
                    region_id = $3,
                    walk_difficulty_id = $4,
                    updated_at = NOW()
                WHERE id = $5
                RETURNING *
            )
            SELECT {} FROM w {}
            "#,
            WALK_COLUMNS, WALK_JOINS
        );

        let row: Option<WalkRow> = sqlx::query_as(&query)
            .bind(draft.name)
            .bind(draft.length)
            .bind(draft.region_id)
            .bind(draft.walk_difficulty_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, reference_error))?;

        Ok(row.map(Walk::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        let query = format!(
            r#"
            WITH w AS (
                DELETE FROM walks
                WHERE id = $1
                RETURNING *
            )
            SELECT {} FROM w {}
            "#,
            WALK_COLUMNS, WALK_JOINS
        );

        let row: Option<WalkRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete walk {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Walk::from))
    }
}
