//=========================================================================
// Notification Hub (outbound)
//=========================================================================
//
// Publish/subscribe fan-out for notifications the coordinator produces.
//
// Architecture:
//   subscribe() ──> Subscription (receiver)      one per listener
//   publish(n)  ──> clone n into every live subscriber's channel
//
// Subscribers detach by dropping their `Subscription`. Detached
// channels are pruned on the next publish.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::host::VehicleId;

//=== Notification ========================================================

/// Notification produced by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The active player vehicle changed identity.
    VehicleChanged {
        previous: Option<VehicleId>,
        current: VehicleId,
    },

    /// The global behavior preset index was altered.
    BehaviorChanged { index: usize },
}

//=== Subscription ========================================================

/// Listener end of a hub subscription.
pub struct Subscription {
    rx: Receiver<Notification>,
}

impl Subscription {
    /// Returns the next pending notification, if any.
    pub fn try_recv(&self) -> Option<Notification> {
        self.rx.try_recv().ok()
    }

    /// Takes every pending notification in publish order.
    pub fn drain(&self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }

    /// Detaches from the hub.
    pub fn unsubscribe(self) {}
}

//=== NotificationHub =====================================================

#[derive(Default)]
pub struct NotificationHub {
    subscribers: Vec<Sender<Notification>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    pub fn publish(&mut self, notification: Notification) {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|tx| tx.send(notification).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            debug!("Pruned {} detached notification subscriber(s)", pruned);
        }
    }

    /// Number of subscribers still attached as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_each_notification() {
        let mut hub = NotificationHub::new();
        let first = hub.subscribe();
        let second = hub.subscribe();

        hub.publish(Notification::BehaviorChanged { index: 2 });

        assert_eq!(first.drain(), vec![Notification::BehaviorChanged { index: 2 }]);
        assert_eq!(second.drain(), vec![Notification::BehaviorChanged { index: 2 }]);
    }

    #[test]
    fn test_late_subscriber_misses_earlier_notifications() {
        let mut hub = NotificationHub::new();
        hub.publish(Notification::BehaviorChanged { index: 0 });

        let late = hub.subscribe();
        assert!(late.try_recv().is_none());
    }

    #[test]
    fn test_unsubscribed_listener_is_pruned_on_publish() {
        let mut hub = NotificationHub::new();
        let kept = hub.subscribe();
        let gone = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        gone.unsubscribe();
        hub.publish(Notification::BehaviorChanged { index: 1 });

        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(kept.drain().len(), 1);
    }
}
