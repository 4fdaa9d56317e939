use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::walks::dtos::{AddWalkDto, UpdateWalkDto, WalkResponseDto};
use crate::features::walks::services::WalkService;
use crate::shared::types::{ApiResponse, Meta};

/// List all walks with their region and difficulty
#[utoipa::path(
    get,
    path = "/walks",
    responses(
        (status = 200, description = "List of walks", body = ApiResponse<Vec<WalkResponseDto>>)
    ),
    tag = "walks"
)]
pub async fn list_walks(
    State(service): State<Arc<WalkService>>,
) -> Result<Json<ApiResponse<Vec<WalkResponseDto>>>> {
    let walks = service.list().await?;
    let meta = Meta::for_items(&walks);
    Ok(Json(ApiResponse::success(Some(walks), None, Some(meta))))
}

/// Get a walk by ID
#[utoipa::path(
    get,
    path = "/walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk ID")
    ),
    responses(
        (status = 200, description = "Walk details", body = ApiResponse<WalkResponseDto>),
        (status = 404, description = "Walk not found")
    ),
    tag = "walks"
)]
pub async fn get_walk(
    State(service): State<Arc<WalkService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WalkResponseDto>>> {
    let walk = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(walk), None, None)))
}

/// Create a new walk
///
/// The referenced region and walk difficulty must exist.
#[utoipa::path(
    post,
    path = "/walks",
    request_body = AddWalkDto,
    responses(
        (status = 201, description = "Walk created", body = ApiResponse<WalkResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "walks"
)]
pub async fn create_walk(
    State(service): State<Arc<WalkService>>,
    AppJson(dto): AppJson<Option<AddWalkDto>>,
) -> Result<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<ApiResponse<WalkResponseDto>>,
)> {
    let walk = service.create(dto).await?;
    let location = format!("/walks/{}", walk.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(walk), None, None)),
    ))
}

/// Update a walk
#[utoipa::path(
    put,
    path = "/walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk ID")
    ),
    request_body = UpdateWalkDto,
    responses(
        (status = 200, description = "Walk updated", body = ApiResponse<WalkResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Walk not found")
    ),
    tag = "walks"
)]
pub async fn update_walk(
    State(service): State<Arc<WalkService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<Option<UpdateWalkDto>>,
) -> Result<Json<ApiResponse<WalkResponseDto>>> {
    let walk = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(walk), None, None)))
}

/// Delete a walk
#[utoipa::path(
    delete,
    path = "/walks/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk ID")
    ),
    responses(
        (status = 200, description = "Walk deleted", body = ApiResponse<WalkResponseDto>),
        (status = 404, description = "Walk not found")
    ),
    tag = "walks"
)]
pub async fn delete_walk(
    State(service): State<Arc<WalkService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WalkResponseDto>>> {
    let walk = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(walk), None, None)))
}
