mod walk_difficulty_handler;

pub use walk_difficulty_handler::*;
