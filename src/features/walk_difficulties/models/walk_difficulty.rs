use sqlx::FromRow;
use uuid::Uuid;

/// Walk difficulty grade (e.g. "Easy", "Medium", "Hard")
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDifficultyDraft {
    pub code: String,
}

#[cfg(test)]
impl WalkDifficultyDraft {
    pub fn into_walk_difficulty(self, id: Uuid) -> WalkDifficulty {
        WalkDifficulty {
            id,
            code: self.code,
        }
    }
}
