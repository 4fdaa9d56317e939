//! Walk difficulties feature: the grades a walk can be assigned.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::{PgWalkDifficultyRepository, WalkDifficultyLookup};
pub use services::WalkDifficultyService;
