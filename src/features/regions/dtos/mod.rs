mod region_dto;

pub use region_dto::{AddRegionDto, RegionResponseDto, UpdateRegionDto};
