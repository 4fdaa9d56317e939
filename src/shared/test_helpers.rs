use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fake::faker::address::en::CityName;
use fake::Fake;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionDraft};
use crate::features::regions::repositories::RegionRepository;
use crate::features::walk_difficulties::models::{WalkDifficulty, WalkDifficultyDraft};
use crate::features::walk_difficulties::repositories::WalkDifficultyRepository;
use crate::features::walks::models::{Walk, WalkDraft};
use crate::features::walks::repositories::WalkRepository;

/// Valid add-region request body with randomized values
pub fn add_region_payload() -> Value {
    let name: String = CityName().fake();
    json!({
        "code": name.chars().take(3).collect::<String>().to_uppercase(),
        "name": name,
        "area": (1.0..50_000.0).fake::<f64>(),
        "lat": (-90.0..90.0).fake::<f64>(),
        "long": (-180.0..180.0).fake::<f64>(),
        "population": (0..2_000_000).fake::<i64>()
    })
}

pub async fn seed_region(repository: &InMemoryRegionRepository) -> Region {
    let name: String = CityName().fake();
    repository
        .create(RegionDraft {
            code: name.chars().take(3).collect::<String>().to_uppercase(),
            name,
            area: (1.0..50_000.0).fake::<f64>(),
            lat: (-47.0..-34.0).fake::<f64>(),
            long: (166.0..179.0).fake::<f64>(),
            population: (0..2_000_000).fake::<i64>(),
        })
        .await
        .unwrap()
}

pub async fn seed_walk_difficulty(repository: &InMemoryWalkDifficultyRepository) -> WalkDifficulty {
    repository
        .create(WalkDifficultyDraft {
            code: "Medium".to_string(),
        })
        .await
        .unwrap()
}

/// Region store backed by a vector, counting writes and id lookups
#[derive(Default)]
pub struct InMemoryRegionRepository {
    regions: RwLock<Vec<Region>>,
    writes: AtomicUsize,
    lookups: AtomicUsize,
}

impl InMemoryRegionRepository {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    async fn find(&self, id: Uuid) -> Option<Region> {
        self.regions.read().await.iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn list_all(&self) -> Result<Vec<Region>> {
        Ok(self.regions.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.find(id).await)
    }

    async fn create(&self, draft: RegionDraft) -> Result<Region> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let region = draft.into_region(Uuid::new_v4());
        self.regions.write().await.push(region.clone());
        Ok(region)
    }

    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut regions = self.regions.write().await;
        Ok(regions.iter_mut().find(|r| r.id == id).map(|existing| {
            *existing = draft.into_region(id);
            existing.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut regions = self.regions.write().await;
        let position = regions.iter().position(|r| r.id == id);
        Ok(position.map(|index| regions.remove(index)))
    }
}

#[derive(Default)]
pub struct InMemoryWalkDifficultyRepository {
    difficulties: RwLock<Vec<WalkDifficulty>>,
    writes: AtomicUsize,
    lookups: AtomicUsize,
}

impl InMemoryWalkDifficultyRepository {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    async fn find(&self, id: Uuid) -> Option<WalkDifficulty> {
        self.difficulties
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }
}

#[async_trait]
impl WalkDifficultyRepository for InMemoryWalkDifficultyRepository {
    async fn list_all(&self) -> Result<Vec<WalkDifficulty>> {
        Ok(self.difficulties.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.find(id).await)
    }

    async fn create(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let difficulty = draft.into_walk_difficulty(Uuid::new_v4());
        self.difficulties.write().await.push(difficulty.clone());
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut difficulties = self.difficulties.write().await;
        Ok(difficulties.iter_mut().find(|d| d.id == id).map(|existing| {
            *existing = draft.into_walk_difficulty(id);
            existing.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut difficulties = self.difficulties.write().await;
        let position = difficulties.iter().position(|d| d.id == id);
        Ok(position.map(|index| difficulties.remove(index)))
    }
}

/// Walk store that expands references from the sibling in-memory stores
pub struct InMemoryWalkRepository {
    walks: RwLock<Vec<WalkDraftRecord>>,
    regions: Arc<InMemoryRegionRepository>,
    walk_difficulties: Arc<InMemoryWalkDifficultyRepository>,
    writes: AtomicUsize,
}

struct WalkDraftRecord {
    id: Uuid,
    draft: WalkDraft,
}

impl InMemoryWalkRepository {
    pub fn new(
        regions: Arc<InMemoryRegionRepository>,
        walk_difficulties: Arc<InMemoryWalkDifficultyRepository>,
    ) -> Self {
        Self {
            walks: RwLock::new(Vec::new()),
            regions,
            walk_difficulties,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn expand(&self, id: Uuid, draft: &WalkDraft) -> Result<Walk> {
        let region = self.regions.find(draft.region_id).await;
        let walk_difficulty = self.walk_difficulties.find(draft.walk_difficulty_id).await;
        if region.is_none() || walk_difficulty.is_none() {
            return Err(AppError::BadRequest(
                "Referenced region or walk difficulty does not exist.".to_string(),
            ));
        }

        Ok(Walk {
            id,
            name: draft.name.clone(),
            length: draft.length,
            region_id: draft.region_id,
            walk_difficulty_id: draft.walk_difficulty_id,
            region,
            walk_difficulty,
        })
    }
}

#[async_trait]
impl WalkRepository for InMemoryWalkRepository {
    async fn list_all(&self) -> Result<Vec<Walk>> {
        let walks = self.walks.read().await;
        let mut expanded = Vec::with_capacity(walks.len());
        for record in walks.iter() {
            expanded.push(self.expand(record.id, &record.draft).await?);
        }
        Ok(expanded)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>> {
        let walks = self.walks.read().await;
        match walks.iter().find(|w| w.id == id) {
            Some(record) => Ok(Some(self.expand(record.id, &record.draft).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, draft: WalkDraft) -> Result<Walk> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        let walk = self.expand(id, &draft).await?;
        self.walks.write().await.push(WalkDraftRecord { id, draft });
        Ok(walk)
    }

    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut walks = self.walks.write().await;
        let Some(record) = walks.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        let walk = self.expand(id, &draft).await?;
        record.draft = draft;
        Ok(Some(walk))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut walks = self.walks.write().await;
        let Some(position) = walks.iter().position(|w| w.id == id) else {
            return Ok(None);
        };
        let record = walks.remove(position);
        Ok(Some(self.expand(record.id, &record.draft).await?))
    }
}
