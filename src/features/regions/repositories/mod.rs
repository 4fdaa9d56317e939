mod region_repository;

pub use region_repository::{PgRegionRepository, RegionLookup, RegionRepository};
