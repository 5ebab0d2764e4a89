//=========================================================================
// Scene Events
//=========================================================================
//
// Process-wide notifications in both directions.
//
// Architecture:
//   inbound:  EventSender ──> EventInbox ──> SceneCoordinator
//   outbound: SceneCoordinator ──> NotificationHub ──> Subscription
//
//=========================================================================

//=== Module Declarations =================================================

mod notification_hub;
mod scene_event;

//=== Public API ==========================================================

pub use notification_hub::{Notification, NotificationHub, Subscription};
pub use scene_event::{EventSender, SceneEvent};

pub(crate) use scene_event::EventInbox;
