use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::RegionLookup;
use crate::features::walk_difficulties::WalkDifficultyLookup;
use crate::features::walks::dtos::{AddWalkDto, UpdateWalkDto, WalkResponseDto};
use crate::features::walks::models::WalkDraft;
use crate::features::walks::repositories::WalkRepository;
use crate::features::walks::validation::{validate_add_walk, validate_update_walk};

/// Service for managing walks
///
/// Region and walk difficulty access is limited to existence checks.
pub struct WalkService {
    repository: Arc<dyn WalkRepository>,
    regions: Arc<dyn RegionLookup>,
    walk_difficulties: Arc<dyn WalkDifficultyLookup>,
}

impl WalkService {
    pub fn new(
        repository: Arc<dyn WalkRepository>,
        regions: Arc<dyn RegionLookup>,
        walk_difficulties: Arc<dyn WalkDifficultyLookup>,
    ) -> Self {
        Self {
            repository,
            regions,
            walk_difficulties,
        }
    }

    pub async fn list(&self) -> Result<Vec<WalkResponseDto>> {
        let walks = self.repository.list_all().await?;
        Ok(walks.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<WalkResponseDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, payload: Option<AddWalkDto>) -> Result<WalkResponseDto> {
        let dto = validate_add_walk(
            payload,
            self.regions.as_ref(),
            self.walk_difficulties.as_ref(),
        )
        .await?;

        let walk = self.repository.create(WalkDraft::from(dto)).await?;
        tracing::info!(
            "Walk created: id={}, region_id={}, walk_difficulty_id={}",
            walk.id,
            walk.region_id,
            walk.walk_difficulty_id
        );

        Ok(walk.into())
    }

    pub async fn update(&self, id: Uuid, payload: Option<UpdateWalkDto>) -> Result<WalkResponseDto> {
        let dto = validate_update_walk(
            payload,
            self.regions.as_ref(),
            self.walk_difficulties.as_ref(),
        )
        .await?;

        let walk = self
            .repository
            .update(id, WalkDraft::from(dto))
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Walk updated: id={}", walk.id);

        Ok(walk.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<WalkResponseDto> {
        let walk = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Walk deleted: id={}", walk.id);

        Ok(walk.into())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Walk with id {} not found", id))
}
