use crate::model::{GenericError, ReceiptId};
use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Identifier to points mapping. Records are written once and never updated
/// or deleted.
#[async_trait]
pub trait ScoreStorage: Send + Sync {
    /// Stores `points` under a freshly generated identifier and returns it.
    async fn save(&self, points: u64) -> Result<ReceiptId, GenericError>;

    async fn get(&self, id: &str) -> Result<Option<u64>, GenericError>;

    async fn count(&self) -> Result<usize, GenericError>;
}

/// Process-lifetime store behind a single lock.
#[derive(Default)]
pub struct InMemoryScoreStorage {
    scores: RwLock<HashMap<ReceiptId, u64>>,
}

impl InMemoryScoreStorage {
    pub fn new() -> Self {
        tracing::info!("Initializing in-memory score storage");
        Self {
            scores: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ScoreStorage for InMemoryScoreStorage {
    async fn save(&self, points: u64) -> Result<ReceiptId, GenericError> {
        let mut scores = self.scores.write().await;
        loop {
            let id = Uuid::new_v4().to_string();
            match scores.entry(id) {
                Entry::Vacant(entry) => {
                    let id = entry.key().clone();
                    entry.insert(points);
                    return Ok(id);
                }
                Entry::Occupied(entry) => {
                    tracing::warn!(
                        id = %entry.key(),
                        "Generated receipt id already in use, regenerating"
                    );
                }
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<u64>, GenericError> {
        Ok(self.scores.read().await.get(id).copied())
    }

    async fn count(&self) -> Result<usize, GenericError> {
        Ok(self.scores.read().await.len())
    }
}
