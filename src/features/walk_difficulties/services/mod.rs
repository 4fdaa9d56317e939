mod walk_difficulty_service;

pub use walk_difficulty_service::WalkDifficultyService;
