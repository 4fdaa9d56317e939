use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::models::{Region, RegionDraft};
use crate::shared::validation::{latitude, longitude, not_blank};

/// Request DTO for creating a region
///
/// Missing fields fall back to their defaults so they surface as field
/// errors rather than as a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRegionDto {
    #[validate(custom(
        function = "not_blank",
        message = "Code cannot be null or empty or white space."
    ))]
    pub code: String,

    #[validate(custom(
        function = "not_blank",
        message = "Name cannot be null or empty or white space."
    ))]
    pub name: String,

    #[validate(range(
        exclusive_min = 0.0,
        message = "Area cannot be less than or equal to zero."
    ))]
    pub area: f64,

    #[validate(custom(function = "latitude"))]
    pub lat: f64,

    #[validate(custom(function = "longitude"))]
    pub long: f64,

    #[validate(range(min = 0, message = "Population cannot be less than zero."))]
    pub population: i64,
}

/// Request DTO for replacing a region's fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRegionDto {
    #[validate(custom(
        function = "not_blank",
        message = "Code cannot be null or empty or white space."
    ))]
    pub code: String,

    #[validate(custom(
        function = "not_blank",
        message = "Name cannot be null or empty or white space."
    ))]
    pub name: String,

    #[validate(range(
        exclusive_min = 0.0,
        message = "Area cannot be less than or equal to zero."
    ))]
    pub area: f64,

    #[validate(custom(function = "latitude"))]
    pub lat: f64,

    #[validate(custom(function = "longitude"))]
    pub long: f64,

    #[validate(range(min = 0, message = "Population cannot be less than zero."))]
    pub population: i64,
}

/// Response DTO for region data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

impl From<RegionResponseDto> for Region {
    fn from(dto: RegionResponseDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}

impl From<AddRegionDto> for RegionDraft {
    fn from(dto: AddRegionDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}

impl From<UpdateRegionDto> for RegionDraft {
    fn from(dto: UpdateRegionDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}
