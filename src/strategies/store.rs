//! Strategy repository kept outside the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::models::strategy::Strategy;

pub type StrategyId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredStrategy {
    pub id: StrategyId,
    pub strategy: Strategy,
    pub created_at: DateTime<Utc>,
}

/// Put/get access to validated strategies by generated id.
pub trait StrategyStore: Send + Sync {
    fn put(&self, strategy: Strategy) -> StrategyId;

    fn get(&self, id: StrategyId) -> Option<StoredStrategy>;

    fn list(&self) -> Vec<StoredStrategy>;

    /// Returns `false` when no strategy had that id.
    fn delete(&self, id: StrategyId) -> bool;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryStrategyStore {
    next_id: AtomicI64,
    strategies: RwLock<BTreeMap<StrategyId, StoredStrategy>>,
}

impl InMemoryStrategyStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            strategies: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryStrategyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyStore for InMemoryStrategyStore {
    fn put(&self, strategy: Strategy) -> StrategyId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredStrategy {
            id,
            strategy,
            created_at: Utc::now(),
        };
        self.strategies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, stored);
        id
    }

    fn get(&self, id: StrategyId) -> Option<StoredStrategy> {
        self.strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn list(&self) -> Vec<StoredStrategy> {
        self.strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn delete(&self, id: StrategyId) -> bool {
        self.strategies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }
}
