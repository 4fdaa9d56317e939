use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::walk_difficulties::dtos::{
    AddWalkDifficultyDto, UpdateWalkDifficultyDto, WalkDifficultyResponseDto,
};
use crate::features::walk_difficulties::services::WalkDifficultyService;
use crate::shared::types::{ApiResponse, Meta};

/// List all walk difficulties
#[utoipa::path(
    get,
    path = "/walkdifficulties",
    responses(
        (status = 200, description = "List of walk difficulties", body = ApiResponse<Vec<WalkDifficultyResponseDto>>)
    ),
    tag = "walk-difficulties"
)]
pub async fn list_walk_difficulties(
    State(service): State<Arc<WalkDifficultyService>>,
) -> Result<Json<ApiResponse<Vec<WalkDifficultyResponseDto>>>> {
    let difficulties = service.list().await?;
    let meta = Meta::for_items(&difficulties);
    Ok(Json(ApiResponse::success(
        Some(difficulties),
        None,
        Some(meta),
    )))
}

/// Get a walk difficulty by ID
#[utoipa::path(
    get,
    path = "/walkdifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty ID")
    ),
    responses(
        (status = 200, description = "Walk difficulty details", body = ApiResponse<WalkDifficultyResponseDto>),
        (status = 404, description = "Walk difficulty not found")
    ),
    tag = "walk-difficulties"
)]
pub async fn get_walk_difficulty(
    State(service): State<Arc<WalkDifficultyService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WalkDifficultyResponseDto>>> {
    let difficulty = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(difficulty), None, None)))
}

/// Create a new walk difficulty
#[utoipa::path(
    post,
    path = "/walkdifficulties",
    request_body = AddWalkDifficultyDto,
    responses(
        (status = 201, description = "Walk difficulty created", body = ApiResponse<WalkDifficultyResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "walk-difficulties"
)]
pub async fn create_walk_difficulty(
    State(service): State<Arc<WalkDifficultyService>>,
    AppJson(dto): AppJson<Option<AddWalkDifficultyDto>>,
) -> Result<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<ApiResponse<WalkDifficultyResponseDto>>,
)> {
    let difficulty = service.create(dto).await?;
    let location = format!("/walkdifficulties/{}", difficulty.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(difficulty), None, None)),
    ))
}

/// Update a walk difficulty
#[utoipa::path(
    put,
    path = "/walkdifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty ID")
    ),
    request_body = UpdateWalkDifficultyDto,
    responses(
        (status = 200, description = "Walk difficulty updated", body = ApiResponse<WalkDifficultyResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Walk difficulty not found")
    ),
    tag = "walk-difficulties"
)]
pub async fn update_walk_difficulty(
    State(service): State<Arc<WalkDifficultyService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<Option<UpdateWalkDifficultyDto>>,
) -> Result<Json<ApiResponse<WalkDifficultyResponseDto>>> {
    let difficulty = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(difficulty), None, None)))
}

/// Delete a walk difficulty
#[utoipa::path(
    delete,
    path = "/walkdifficulties/{id}",
    params(
        ("id" = Uuid, Path, description = "Walk difficulty ID")
    ),
    responses(
        (status = 200, description = "Walk difficulty deleted", body = ApiResponse<WalkDifficultyResponseDto>),
        (status = 404, description = "Walk difficulty not found"),
        (status = 409, description = "Walk difficulty is still referenced by walks")
    ),
    tag = "walk-difficulties"
)]
pub async fn delete_walk_difficulty(
    State(service): State<Arc<WalkDifficultyService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WalkDifficultyResponseDto>>> {
    let difficulty = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(difficulty), None, None)))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::walk_difficulties::routes;
    use crate::shared::test_helpers::InMemoryWalkDifficultyRepository;

    fn server(repository: Arc<InMemoryWalkDifficultyRepository>) -> TestServer {
        let service = Arc::new(WalkDifficultyService::new(repository));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_list() {
        let server = server(Arc::new(InMemoryWalkDifficultyRepository::default()));

        let created = server
            .post("/walkdifficulties")
            .json(&json!({ "code": "Easy" }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created: Value = created.json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let fetched: Value = server
            .get(&format!("/walkdifficulties/{}", id))
            .await
            .json();
        assert_eq!(fetched["data"], json!({ "id": id, "code": "Easy" }));

        let listed: Value = server.get("/walkdifficulties").await.json();
        assert_eq!(listed["meta"]["total"], 1);
        assert_eq!(listed["data"][0]["code"], "Easy");
    }

    #[tokio::test]
    async fn test_create_location_header() {
        let server = server(Arc::new(InMemoryWalkDifficultyRepository::default()));

        let response = server
            .post("/walkdifficulties")
            .json(&json!({ "code": "Hard" }))
            .await;

        let body: Value = response.json();
        assert_eq!(
            response.header(header::LOCATION),
            format!("/walkdifficulties/{}", body["data"]["id"].as_str().unwrap())
        );
    }

    #[tokio::test]
    async fn test_null_payload_is_rejected_without_persisting() {
        let repository = Arc::new(InMemoryWalkDifficultyRepository::default());
        let server = server(Arc::clone(&repository));

        let response = server.post("/walkdifficulties").json(&Value::Null).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!({ "payload": ["Add Walk Difficulty Data is required."] })
        );
        assert_eq!(repository.write_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_body_is_a_missing_payload() {
        let repository = Arc::new(InMemoryWalkDifficultyRepository::default());
        let server = server(Arc::clone(&repository));

        let response = server.post("/walkdifficulties").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!({ "payload": ["Add Walk Difficulty Data is required."] })
        );
        assert_eq!(repository.write_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_code_is_rejected() {
        let server = server(Arc::new(InMemoryWalkDifficultyRepository::default()));

        let response = server
            .post("/walkdifficulties")
            .json(&json!({ "code": "   " }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            body["errors"]["code"],
            json!(["Code cannot be null or empty or white space."])
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let server = server(Arc::new(InMemoryWalkDifficultyRepository::default()));
        let created: Value = server
            .post("/walkdifficulties")
            .json(&json!({ "code": "Medium" }))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let updated = server
            .put(&format!("/walkdifficulties/{}", id))
            .json(&json!({ "code": "Moderate" }))
            .await;
        updated.assert_status_ok();
        let updated: Value = updated.json();
        assert_eq!(updated["data"]["code"], "Moderate");

        let deleted = server.delete(&format!("/walkdifficulties/{}", id)).await;
        deleted.assert_status_ok();
        let deleted: Value = deleted.json();
        assert_eq!(deleted["data"], updated["data"]);

        server
            .delete(&format!("/walkdifficulties/{}", id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let server = server(Arc::new(InMemoryWalkDifficultyRepository::default()));

        let response = server
            .put(&format!("/walkdifficulties/{}", Uuid::new_v4()))
            .json(&json!({ "code": "Easy" }))
            .await;

        response.assert_status_not_found();
        assert!(response.as_bytes().is_empty());
    }
}
