use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::regions::dtos::{AddRegionDto, RegionResponseDto, UpdateRegionDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all regions
#[utoipa::path(
    get,
    path = "/Regions",
    responses(
        (status = 200, description = "List of regions", body = ApiResponse<Vec<RegionResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regions = service.list().await?;
    let meta = Meta::for_items(&regions);
    Ok(Json(ApiResponse::success(Some(regions), None, Some(meta))))
}

/// Get a region by ID
#[utoipa::path(
    get,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(region), None, None)))
}

/// Create a new region
#[utoipa::path(
    post,
    path = "/Regions",
    request_body = AddRegionDto,
    responses(
        (status = 201, description = "Region created", body = ApiResponse<RegionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "regions"
)]
pub async fn create_region(
    State(service): State<Arc<RegionService>>,
    AppJson(dto): AppJson<Option<AddRegionDto>>,
) -> Result<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<ApiResponse<RegionResponseDto>>,
)> {
    let region = service.create(dto).await?;
    let location = format!("/Regions/{}", region.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(region), None, None)),
    ))
}

/// Update a region
#[utoipa::path(
    put,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    request_body = UpdateRegionDto,
    responses(
        (status = 200, description = "Region updated", body = ApiResponse<RegionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn update_region(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<Option<UpdateRegionDto>>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(region), None, None)))
}

/// Delete a region
///
/// Returns the deleted region.
#[utoipa::path(
    delete,
    path = "/Regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region deleted", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found"),
        (status = 409, description = "Region is still referenced by walks")
    ),
    tag = "regions"
)]
pub async fn delete_region(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(region), None, None)))
}
