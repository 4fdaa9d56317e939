mod walk_repository;

pub use walk_repository::{PgWalkRepository, WalkRepository};
