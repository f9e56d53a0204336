//! Change notifications for UI layers.
//!
//! Components publish a [`StoreEvent`] after every state change. Observers
//! call `subscribe` and drain the receiver; receivers that have been dropped
//! are pruned on the next publish.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PromptsChanged,
    CollectionsChanged,
    ChallengeChanged,
    /// A write to the named key did not reach durable storage
    PersistFailed { key: String },
}

#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Sender<StoreEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    pub fn publish(&self, event: StoreEvent) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return;
        };
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = EventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(StoreEvent::PromptsChanged);

        assert_eq!(a.try_recv().unwrap(), StoreEvent::PromptsChanged);
        assert_eq!(b.try_recv().unwrap(), StoreEvent::PromptsChanged);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let bus = EventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(StoreEvent::CollectionsChanged);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), StoreEvent::CollectionsChanged);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = EventBus::new();
        let rx = bus.subscribe();

        bus.clone().publish(StoreEvent::ChallengeChanged);
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::ChallengeChanged);
    }
}
