use async_trait::async_trait;
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use learnstreak_domain::events::{DomainEvent, DynamicEventHandler, EventBus};
use learnstreak_domain::shared::DomainError;

/// In-memory event bus implementation
/// Dispatches events to subscribed handlers in subscription order
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<HashMap<String, Vec<Arc<dyn DynamicEventHandler>>>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe a handler to a specific event type
    pub async fn subscribe<E: DomainEvent + 'static>(
        &self,
        handler: Arc<dyn DynamicEventHandler>,
    ) -> Result<(), DomainError> {
        let event_type_name = std::any::type_name::<E>();
        let mut handlers = self.handlers.write().await;

        handlers
            .entry(event_type_name.to_string())
            .or_default()
            .push(handler);

        info!("Subscribed handler for event type: {}", event_type_name);
        Ok(())
    }

    /// Get the number of handlers for a specific event type
    pub async fn handler_count<E: DomainEvent + 'static>(&self) -> usize {
        let event_type_name = std::any::type_name::<E>();
        let handlers = self.handlers.read().await;
        handlers.get(event_type_name).map_or(0, |h| h.len())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let event_type_name = event.event_type_name();
        let event_any = event.as_any();

        let handlers = self.handlers.read().await;

        let Some(event_handlers) = handlers.get(event_type_name) else {
            info!("No handlers registered for event type: {}", event_type_name);
            return Ok(());
        };

        for handler in event_handlers {
            // A failing handler must not starve the others.
            if let Err(e) = handler.handle_dynamic(event_any).await {
                error!("Handler failed to process event {}: {}", event_type_name, e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use learnstreak_domain::events::streak_events::{ActivityRecorded, MilestoneUnlocked};
    use learnstreak_domain::events::{EventHandler, TypedEventHandlerWrapper};
    use learnstreak_domain::shared::{ActivityId, UserId};
    use learnstreak_domain::streak::ActivityType;

    struct CountingHandler {
        calls: Arc<RwLock<u32>>,
    }

    #[async_trait]
    impl EventHandler<MilestoneUnlocked> for CountingHandler {
        async fn handle(&self, _event: &MilestoneUnlocked) -> Result<(), DomainError> {
            *self.calls.write().await += 1;
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler<MilestoneUnlocked> for FailingHandler {
        async fn handle(&self, _event: &MilestoneUnlocked) -> Result<(), DomainError> {
            Err(DomainError::Infrastructure("boom".to_string()))
        }
    }

    fn milestone_event() -> Box<MilestoneUnlocked> {
        Box::new(MilestoneUnlocked {
            user_id: UserId::from_string("user-1"),
            milestone_days: 7,
            title: "Week Warrior".to_string(),
            points_reward: 25,
            current_streak: 7,
            occurred_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn test_event_bus_publishes_to_handlers() {
        let bus = InMemoryEventBus::new();
        let calls = Arc::new(RwLock::new(0));

        let wrapper = Arc::new(TypedEventHandlerWrapper::new(CountingHandler {
            calls: calls.clone(),
        }));
        bus.subscribe::<MilestoneUnlocked>(wrapper).await.unwrap();

        bus.publish(milestone_event()).await.unwrap();

        assert_eq!(*calls.read().await, 1);
        assert_eq!(bus.handler_count::<MilestoneUnlocked>().await, 1);
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_block_others() {
        let bus = InMemoryEventBus::new();
        let calls = Arc::new(RwLock::new(0));

        bus.subscribe::<MilestoneUnlocked>(Arc::new(TypedEventHandlerWrapper::new(FailingHandler)))
            .await
            .unwrap();
        bus.subscribe::<MilestoneUnlocked>(Arc::new(TypedEventHandlerWrapper::new(
            CountingHandler {
                calls: calls.clone(),
            },
        )))
        .await
        .unwrap();

        assert!(bus.publish(milestone_event()).await.is_ok());
        assert_eq!(*calls.read().await, 1);
    }

    #[tokio::test]
    async fn test_unsubscribed_event_is_ignored() {
        let bus = InMemoryEventBus::new();
        let event = Box::new(ActivityRecorded {
            activity_id: ActivityId::new(),
            user_id: UserId::from_string("user-1"),
            activity_type: ActivityType::Chat,
            points_earned: 2,
            streak_bonus: 0,
            current_streak: 1,
            occurred_at: Utc::now(),
        });

        assert!(bus.publish(event).await.is_ok());
        assert_eq!(bus.handler_count::<ActivityRecorded>().await, 0);
    }
}
