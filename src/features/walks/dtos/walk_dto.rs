use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::dtos::RegionResponseDto;
use crate::features::walk_difficulties::dtos::WalkDifficultyResponseDto;
use crate::features::walks::models::{Walk, WalkDraft};
use crate::shared::validation::not_blank;

/// Request DTO for creating a walk
///
/// `region_id` and `walk_difficulty_id` must reference existing records;
/// those checks need a store lookup and run in `walks::validation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkDto {
    #[validate(custom(
        function = "not_blank",
        message = "Name cannot be null or empty or white space."
    ))]
    pub name: String,

    #[validate(range(
        exclusive_min = 0.0,
        message = "Length cannot be less than or equal to zero."
    ))]
    pub length: f64,

    pub region_id: Uuid,

    pub walk_difficulty_id: Uuid,
}

/// Request DTO for replacing a walk
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkDto {
    #[validate(custom(
        function = "not_blank",
        message = "Name cannot be null or empty or white space."
    ))]
    pub name: String,

    #[validate(range(
        exclusive_min = 0.0,
        message = "Length cannot be less than or equal to zero."
    ))]
    pub length: f64,

    pub region_id: Uuid,

    pub walk_difficulty_id: Uuid,
}

/// Response DTO for a walk with its region and difficulty expanded inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkResponseDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region: Option<RegionResponseDto>,
    pub walk_difficulty: Option<WalkDifficultyResponseDto>,
}

impl From<Walk> for WalkResponseDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
            region: walk.region.map(Into::into),
            walk_difficulty: walk.walk_difficulty.map(Into::into),
        }
    }
}

impl From<WalkResponseDto> for Walk {
    fn from(dto: WalkResponseDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
            region: dto.region.map(Into::into),
            walk_difficulty: dto.walk_difficulty.map(Into::into),
        }
    }
}

impl From<AddWalkDto> for WalkDraft {
    fn from(dto: AddWalkDto) -> Self {
        Self {
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
        }
    }
}

impl From<UpdateWalkDto> for WalkDraft {
    fn from(dto: UpdateWalkDto) -> Self {
        Self {
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
        }
    }
}
