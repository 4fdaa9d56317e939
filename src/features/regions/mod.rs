//! Regions feature.
//!
//! A region is a named geographic area (code, area, coordinates and
//! population) that walks belong to.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/Regions` | List all regions |
//! | GET | `/Regions/{id}` | Get region by ID |
//! | POST | `/Regions` | Create a region |
//! | PUT | `/Regions/{id}` | Replace a region's fields |
//! | DELETE | `/Regions/{id}` | Delete a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::{PgRegionRepository, RegionLookup};
pub use services::RegionService;
