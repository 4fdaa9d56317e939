use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{AddRegionDto, RegionResponseDto, UpdateRegionDto};
use crate::features::regions::models::RegionDraft;
use crate::features::regions::repositories::RegionRepository;
use crate::features::regions::validation::{validate_add_region, validate_update_region};

/// Service for managing regions
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<RegionResponseDto>> {
        let regions = self.repository.list_all().await?;
        Ok(regions.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RegionResponseDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Validate and persist a new region; the store assigns the id
    pub async fn create(&self, payload: Option<AddRegionDto>) -> Result<RegionResponseDto> {
        let dto = validate_add_region(payload)?;

        let region = self.repository.create(RegionDraft::from(dto)).await?;
        tracing::info!("Region created: id={}, code={}", region.id, region.code);

        Ok(region.into())
    }

    /// Validate and replace every field of an existing region
    pub async fn update(
        &self,
        id: Uuid,
        payload: Option<UpdateRegionDto>,
    ) -> Result<RegionResponseDto> {
        let dto = validate_update_region(payload)?;

        let region = self
            .repository
            .update(id, RegionDraft::from(dto))
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Region updated: id={}", region.id);

        Ok(region.into())
    }

    /// Delete a region, returning its last state
    pub async fn delete(&self, id: Uuid) -> Result<RegionResponseDto> {
        let region = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Region deleted: id={}", region.id);

        Ok(region.into())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Region with id {} not found", id))
}
