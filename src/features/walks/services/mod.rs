mod walk_service;

pub use walk_service::WalkService;
