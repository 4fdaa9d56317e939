mod walk_difficulty_repository;

pub use walk_difficulty_repository::{
    PgWalkDifficultyRepository, WalkDifficultyLookup, WalkDifficultyRepository,
};
