use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_write_error;
use crate::core::error::{AppError, Result};
use crate::features::walk_difficulties::models::{WalkDifficulty, WalkDifficultyDraft};

/// Persistence contract for walk difficulties
#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<WalkDifficulty>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
    async fn create(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty>;
    async fn update(&self, id: Uuid, draft: WalkDifficultyDraft)
        -> Result<Option<WalkDifficulty>>;
    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
}

/// Read-only capability used to check that a walk difficulty reference resolves
#[async_trait]
pub trait WalkDifficultyLookup: Send + Sync {
    async fn walk_difficulty_exists(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
impl<T> WalkDifficultyLookup for T
where
    T: WalkDifficultyRepository,
{
    async fn walk_difficulty_exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}

pub struct PgWalkDifficultyRepository {
    pool: PgPool,
}

impl PgWalkDifficultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for PgWalkDifficultyRepository {
    async fn list_all(&self) -> Result<Vec<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            r#"
            SELECT id, code
            FROM walk_difficulties
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch walk difficulties: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            r#"
            SELECT id, code
            FROM walk_difficulties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch walk difficulty {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty> {
        sqlx::query_as::<_, WalkDifficulty>(
            r#"
            INSERT INTO walk_difficulties (code)
            VALUES ($1)
            RETURNING id, code
            "#,
        )
        .bind(draft.code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create walk difficulty: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            r#"
            UPDATE walk_difficulties
            SET code = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, code
            "#,
        )
        .bind(draft.code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update walk difficulty {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        sqlx::query_as::<_, WalkDifficulty>(
            r#"
            DELETE FROM walk_difficulties
            WHERE id = $1
            RETURNING id, code
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                AppError::Conflict(format!(
                    "Walk difficulty {} is still referenced by one or more walks",
                    id
                ))
            })
        })
    }
}
