//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_drive::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Coordinator
pub use crate::coordinator::{SceneCoordinator, SceneCoordinatorBuilder};

// Host seam
pub use crate::core::host::{
    CameraId, CameraRig, CanvasId, CharacterId, DashboardCanvas, DisplayType, SceneHost,
    TerrainId, VehicleId,
};
pub use crate::core::integration::EnterExitIntegration;
pub use crate::core::vehicle::{Vehicle, Wheel};

// Events
pub use crate::core::events::{EventSender, Notification, SceneEvent, Subscription};

// Systems
pub use crate::core::recorder::RecordMode;
pub use crate::core::session::RegisterOptions;
pub use crate::core::terrain::{PhysicMaterial, TerrainData, TerrainHandle, TerrainSnapshot};

// Configuration & errors
pub use crate::core::error::{SceneError, SceneResult};
pub use crate::core::settings::SceneSettings;

// Math
pub use glam::{Quat, Vec3};
