use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::walk_difficulties::models::{WalkDifficulty, WalkDifficultyDraft};
use crate::shared::validation::not_blank;

/// Request DTO for creating a walk difficulty
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkDifficultyDto {
    #[validate(custom(
        function = "not_blank",
        message = "Code cannot be null or empty or white space."
    ))]
    pub code: String,
}

/// Request DTO for replacing a walk difficulty
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkDifficultyDto {
    #[validate(custom(
        function = "not_blank",
        message = "Code cannot be null or empty or white space."
    ))]
    pub code: String,
}

/// Response DTO for walk difficulty data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyResponseDto {
    pub id: Uuid,
    pub code: String,
}

impl From<WalkDifficulty> for WalkDifficultyResponseDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.id,
            code: difficulty.code,
        }
    }
}

impl From<WalkDifficultyResponseDto> for WalkDifficulty {
    fn from(dto: WalkDifficultyResponseDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
        }
    }
}

impl From<AddWalkDifficultyDto> for WalkDifficultyDraft {
    fn from(dto: AddWalkDifficultyDto) -> Self {
        Self { code: dto.code }
    }
}

impl From<UpdateWalkDifficultyDto> for WalkDifficultyDraft {
    fn from(dto: UpdateWalkDifficultyDto) -> Self {
        Self { code: dto.code }
    }
}
