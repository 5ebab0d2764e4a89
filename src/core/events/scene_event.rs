//=========================================================================
// Scene Events (inbound)
//=========================================================================
//
// Lifecycle notifications fired by spawners, the camera and the input
// layer, consumed by the coordinator.
//
// Architecture:
//   Spawners ──EventSender::send()──> unbounded channel ──> EventInbox
//                                                             │
//   SceneCoordinator::update() ──────────── drain() ──────────┘
//
// Lifecycle events are never dropped, however many arrive in one
// frame. The inbox exists only while the coordinator is enabled. Disabling it
// drops the receiving end; every outstanding sender then reports
// `SceneError::Disconnected`.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Internal Dependencies ===============================================

use crate::core::error::{SceneError, SceneResult};
use crate::core::host::{CameraId, CharacterId, VehicleId};

//=== SceneEvent ==========================================================

/// Notification consumed by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    PlayerVehicleSpawned(VehicleId),
    PlayerVehicleDestroyed(VehicleId),
    AiVehicleSpawned(VehicleId),
    AiVehicleDestroyed(VehicleId),
    CameraSpawned(CameraId),
    /// Slow-motion input toggled on (`true`) or off (`false`).
    SlowMotion(bool),
    CharacterSpawned(CharacterId),
    CharacterDestroyed(CharacterId),
}

//=== EventSender =========================================================

/// Cloneable handle external systems use to notify the coordinator.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<SceneEvent>,
}

impl EventSender {
    /// Queues an event for the next coordinator update.
    ///
    /// Never blocks. Fails only once the coordinator is disabled.
    pub fn send(&self, event: SceneEvent) -> SceneResult<()> {
        self.tx.send(event).map_err(|_| SceneError::Disconnected)
    }
}

//=== EventInbox ==========================================================

/// Receiving side of the event channel, owned by the coordinator.
pub(crate) struct EventInbox {
    tx: Sender<SceneEvent>,
    rx: Receiver<SceneEvent>,
}

impl EventInbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> EventSender {
        EventSender { tx: self.tx.clone() }
    }

    /// Takes every queued event in send order.
    pub(crate) fn drain(&self) -> Vec<SceneEvent> {
        self.rx.try_iter().collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_send_order() {
        let inbox = EventInbox::new();
        let sender = inbox.sender();

        sender.send(SceneEvent::AiVehicleSpawned(VehicleId(1))).unwrap();
        sender.send(SceneEvent::SlowMotion(true)).unwrap();
        sender.send(SceneEvent::AiVehicleDestroyed(VehicleId(1))).unwrap();

        assert_eq!(
            inbox.drain(),
            vec![
                SceneEvent::AiVehicleSpawned(VehicleId(1)),
                SceneEvent::SlowMotion(true),
                SceneEvent::AiVehicleDestroyed(VehicleId(1)),
            ]
        );
        assert!(inbox.drain().is_empty());
    }

    #[test]
    fn test_burst_of_events_is_never_dropped() {
        let inbox = EventInbox::new();
        let sender = inbox.sender();

        for id in 0..500 {
            sender.send(SceneEvent::AiVehicleSpawned(VehicleId(id))).unwrap();
        }
        assert_eq!(inbox.drain().len(), 500);
    }

    #[test]
    fn test_dropped_inbox_disconnects_senders() {
        let inbox = EventInbox::new();
        let sender = inbox.sender();
        drop(inbox);

        let err = sender.send(SceneEvent::SlowMotion(true)).unwrap_err();
        assert!(matches!(err, SceneError::Disconnected));
    }
}
