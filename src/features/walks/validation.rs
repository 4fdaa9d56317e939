//! Walk request validation.
//!
//! Besides the field rules declared on the DTOs, a walk must reference an
//! existing region and walk difficulty. Both lookups run concurrently and
//! their failures are reported together with the field errors.

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::RegionLookup;
use crate::features::walk_difficulties::WalkDifficultyLookup;
use crate::features::walks::dtos::{AddWalkDto, UpdateWalkDto};
use crate::shared::validation::{field_errors, require_payload, FieldErrors};

pub async fn validate_add_walk(
    payload: Option<AddWalkDto>,
    regions: &dyn RegionLookup,
    walk_difficulties: &dyn WalkDifficultyLookup,
) -> Result<AddWalkDto> {
    let dto = require_payload(payload, "Add Walk Data is required.")?;

    let mut errors = field_errors(&dto);
    check_references(
        &mut errors,
        dto.region_id,
        dto.walk_difficulty_id,
        regions,
        walk_difficulties,
    )
    .await?;
    errors.into_result()?;

    Ok(dto)
}

pub async fn validate_update_walk(
    payload: Option<UpdateWalkDto>,
    regions: &dyn RegionLookup,
    walk_difficulties: &dyn WalkDifficultyLookup,
) -> Result<UpdateWalkDto> {
    let dto = require_payload(payload, "Update Walk Data is required.")?;

    let mut errors = field_errors(&dto);
    check_references(
        &mut errors,
        dto.region_id,
        dto.walk_difficulty_id,
        regions,
        walk_difficulties,
    )
    .await?;
    errors.into_result()?;

    Ok(dto)
}

async fn check_references(
    errors: &mut FieldErrors,
    region_id: Uuid,
    walk_difficulty_id: Uuid,
    regions: &dyn RegionLookup,
    walk_difficulties: &dyn WalkDifficultyLookup,
) -> Result<()> {
    let (region_exists, walk_difficulty_exists) = futures::try_join!(
        regions.region_exists(region_id),
        walk_difficulties.walk_difficulty_exists(walk_difficulty_id),
    )?;

    if !region_exists {
        errors.add("regionId", "RegionId is invalid.");
    }
    if !walk_difficulty_exists {
        errors.add("walkDifficultyId", "WalkDifficultyId is invalid.");
    }

    Ok(())
}
