use crate::models::Creature;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory, append-only creature store.
///
/// Multiple requests may race on the underlying vector, so mutations go
/// through an async lock. Contents live only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct CreatureRegistry {
    creatures: Arc<RwLock<Vec<Creature>>>,
}

impl CreatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a creature. No uniqueness check, no update or delete path.
    pub async fn add(&self, creature: Creature) {
        self.creatures.write().await.push(creature);
    }

    pub async fn len(&self) -> usize {
        self.creatures.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.creatures.read().await.is_empty()
    }
}
