use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

use learnstreak_domain::activity::{ActivityRecord, ActivityStore};
use learnstreak_domain::shared::{DomainError, UserId};

/// Process-local activity log keyed by user.
///
/// Records are kept in insertion order per user and re-sorted by
/// `recorded_at` on read, so back-dated imports still come out oldest first.
pub struct InMemoryActivityStore {
    activities: RwLock<HashMap<UserId, Vec<ActivityRecord>>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(HashMap::new()),
        }
    }

    /// Total number of records across all users
    pub async fn len(&self) -> usize {
        let activities = self.activities.read().await;
        activities.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn append(&self, record: &ActivityRecord) -> Result<(), DomainError> {
        let mut activities = self.activities.write().await;
        let log = activities.entry(record.user_id().clone()).or_default();
        log.push(record.clone());

        debug!(
            "[activity_store] appended user_id={} type={} total={}",
            record.user_id(),
            record.activity_type(),
            log.len()
        );
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<ActivityRecord>, DomainError> {
        let activities = self.activities.read().await;
        let mut records = activities.get(user_id).cloned().unwrap_or_default();
        records.sort_by_key(|r| r.recorded_at());
        Ok(records)
    }

    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError> {
        let activities = self.activities.read().await;
        let mut ids: Vec<UserId> = activities
            .iter()
            .filter(|(_, log)| !log.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }
}
