use sqlx::FromRow;
use uuid::Uuid;

use crate::features::regions::models::Region;
use crate::features::walk_difficulties::models::WalkDifficulty;

/// Walk model
///
/// `region` and `walk_difficulty` are references loaded alongside the walk;
/// the walk does not own them.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region: Option<Region>,
    pub walk_difficulty: Option<WalkDifficulty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Flat row of a walk joined with its region and walk difficulty
#[derive(Debug, FromRow)]
pub struct WalkRow {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region_code: String,
    pub region_name: String,
    pub region_area: f64,
    pub region_lat: f64,
    pub region_lng: f64,
    pub region_population: i64,
    pub walk_difficulty_code: String,
}

impl From<WalkRow> for Walk {
    fn from(row: WalkRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            length: row.length,
            region_id: row.region_id,
            walk_difficulty_id: row.walk_difficulty_id,
            region: Some(Region {
                id: row.region_id,
                code: row.region_code,
                name: row.region_name,
                area: row.region_area,
                lat: row.region_lat,
                long: row.region_lng,
                population: row.region_population,
            }),
            walk_difficulty: Some(WalkDifficulty {
                id: row.walk_difficulty_id,
                code: row.walk_difficulty_code,
            }),
        }
    }
}
