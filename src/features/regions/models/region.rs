use sqlx::FromRow;
use uuid::Uuid;

/// Region model representing a geographic area that walks belong to
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    #[sqlx(rename = "lng")]
    pub long: f64,
    pub population: i64,
}

/// Region fields without an identifier, used for create and full-replace update
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

#[cfg(test)]
impl RegionDraft {
    /// Attach an identifier supplied by the store
    pub fn into_region(self, id: Uuid) -> Region {
        Region {
            id,
            code: self.code,
            name: self.name,
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
        }
    }
}
