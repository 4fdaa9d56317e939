use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::walk_difficulties::{
    dtos as walk_difficulties_dtos, handlers as walk_difficulties_handlers,
};
use crate::features::walks::{dtos as walks_dtos, handlers as walks_handlers};
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::FieldErrors;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::create_region,
        regions_handlers::update_region,
        regions_handlers::delete_region,
        // Walk difficulties
        walk_difficulties_handlers::list_walk_difficulties,
        walk_difficulties_handlers::get_walk_difficulty,
        walk_difficulties_handlers::create_walk_difficulty,
        walk_difficulties_handlers::update_walk_difficulty,
        walk_difficulties_handlers::delete_walk_difficulty,
        // Walks
        walks_handlers::list_walks,
        walks_handlers::get_walk,
        walks_handlers::create_walk,
        walks_handlers::update_walk,
        walks_handlers::delete_walk,
    ),
    components(
        schemas(
            Meta,
            FieldErrors,
            // Regions
            regions_dtos::AddRegionDto,
            regions_dtos::UpdateRegionDto,
            regions_dtos::RegionResponseDto,
            ApiResponse<regions_dtos::RegionResponseDto>,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            // Walk difficulties
            walk_difficulties_dtos::AddWalkDifficultyDto,
            walk_difficulties_dtos::UpdateWalkDifficultyDto,
            walk_difficulties_dtos::WalkDifficultyResponseDto,
            ApiResponse<walk_difficulties_dtos::WalkDifficultyResponseDto>,
            ApiResponse<Vec<walk_difficulties_dtos::WalkDifficultyResponseDto>>,
            // Walks
            walks_dtos::AddWalkDto,
            walks_dtos::UpdateWalkDto,
            walks_dtos::WalkResponseDto,
            ApiResponse<walks_dtos::WalkResponseDto>,
            ApiResponse<Vec<walks_dtos::WalkResponseDto>>,
        )
    ),
    tags(
        (name = "regions", description = "Geographic regions that walks belong to"),
        (name = "walk-difficulties", description = "Walk difficulty grades"),
        (name = "walks", description = "Walking tracks with their region and difficulty"),
    ),
    info(
        title = "NZ Walks API",
        version = "0.1.0",
        description = "API documentation for NZ Walks",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_resource_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/Regions",
            "/Regions/{id}",
            "/walkdifficulties",
            "/walkdifficulties/{id}",
            "/walks",
            "/walks/{id}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_metadata() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Walks".to_string(),
            version: "2.0.0".to_string(),
            description: "Tracks".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Walks");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Tracks"));
    }
}
