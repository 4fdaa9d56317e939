//! Walks feature.
//!
//! A walk belongs to a region and is graded by a walk difficulty. Both are
//! references checked on create and update, and are embedded in every walk
//! response.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/walks` | List all walks |
//! | GET | `/walks/{id}` | Get walk by ID |
//! | POST | `/walks` | Create a walk |
//! | PUT | `/walks/{id}` | Replace a walk's fields |
//! | DELETE | `/walks/{id}` | Delete a walk |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::PgWalkRepository;
pub use services::WalkService;
