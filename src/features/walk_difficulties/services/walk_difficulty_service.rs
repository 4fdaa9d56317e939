use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::walk_difficulties::dtos::{
    AddWalkDifficultyDto, UpdateWalkDifficultyDto, WalkDifficultyResponseDto,
};
use crate::features::walk_difficulties::models::WalkDifficultyDraft;
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;
use crate::features::walk_difficulties::validation::{
    validate_add_walk_difficulty, validate_update_walk_difficulty,
};

/// Service for managing walk difficulties
pub struct WalkDifficultyService {
    repository: Arc<dyn WalkDifficultyRepository>,
}

impl WalkDifficultyService {
    pub fn new(repository: Arc<dyn WalkDifficultyRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<WalkDifficultyResponseDto>> {
        let difficulties = self.repository.list_all().await?;
        Ok(difficulties.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<WalkDifficultyResponseDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(
        &self,
        payload: Option<AddWalkDifficultyDto>,
    ) -> Result<WalkDifficultyResponseDto> {
        let dto = validate_add_walk_difficulty(payload)?;

        let difficulty = self
            .repository
            .create(WalkDifficultyDraft::from(dto))
            .await?;
        tracing::info!(
            "Walk difficulty created: id={}, code={}",
            difficulty.id,
            difficulty.code
        );

        Ok(difficulty.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: Option<UpdateWalkDifficultyDto>,
    ) -> Result<WalkDifficultyResponseDto> {
        let dto = validate_update_walk_difficulty(payload)?;

        let difficulty = self
            .repository
            .update(id, WalkDifficultyDraft::from(dto))
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Walk difficulty updated: id={}", difficulty.id);

        Ok(difficulty.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<WalkDifficultyResponseDto> {
        let difficulty = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Walk difficulty deleted: id={}", difficulty.id);

        Ok(difficulty.into())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Walk difficulty with id {} not found", id))
}
