mod walk_dto;

pub use walk_dto::{AddWalkDto, UpdateWalkDto, WalkResponseDto};
