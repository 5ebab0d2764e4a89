//=========================================================================
// Scene Host
//=========================================================================
//
// Seam between the coordinator and the host engine's scene graph.
//
// The coordinator never owns engine objects. It stores typed ids and
// resolves them through `SceneHost` on every use, so a destroyed object
// simply stops resolving (the equivalent of a dangling reference).
//
// Architecture:
//   SceneCoordinator ──id──> SceneHost ──> Vehicle / CameraRig /
//                                          DashboardCanvas / Terrain
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::terrain::TerrainHandle;
use crate::core::vehicle::Vehicle;

//=== Identifiers =========================================================

macro_rules! scene_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

scene_id!(
    /// Identity of a simulated vehicle, player or AI.
    VehicleId
);
scene_id!(
    /// Identity of a camera rig that can follow a vehicle.
    CameraId
);
scene_id!(
    /// Identity of the dashboard canvas.
    CanvasId
);
scene_id!(
    /// Identity of an on-foot player character.
    CharacterId
);
scene_id!(
    /// Identity of an active terrain.
    TerrainId
);

//=== Display Type ========================================================

/// Display mode of the dashboard canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayType {
    /// Gauges and controls shown.
    #[default]
    Full,
    /// Customization menu open; left alone by the coordinator.
    Customization,
    /// Dashboard hidden.
    Off,
}

//=== Collaborator Traits =================================================

/// Camera rig that follows the player vehicle.
pub trait CameraRig {
    /// Starts following `vehicle`.
    fn set_target(&mut self, vehicle: VehicleId);

    /// Stops following whatever vehicle is targeted.
    fn remove_target(&mut self);

    /// Cycles to the next camera mode.
    fn change_camera(&mut self);
}

/// Dashboard canvas whose visibility the coordinator derives.
pub trait DashboardCanvas {
    /// Current display mode.
    fn display_type(&self) -> DisplayType;

    /// Switches the display mode.
    fn set_display_type(&mut self, display: DisplayType);
}

//=== SceneHost ===========================================================

/// Host engine view used by the coordinator.
///
/// Every lookup returns `None` once the engine object is gone. The
/// coordinator checks every lookup and skips the dependent operation
/// rather than failing.
pub trait SceneHost {
    /// Vehicle state, `None` once destroyed.
    fn vehicle(&self, id: VehicleId) -> Option<&Vehicle>;

    fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle>;

    fn camera_mut(&mut self, id: CameraId) -> Option<&mut dyn CameraRig>;

    /// Dashboard canvas, read and written once per frame.
    fn canvas_mut(&mut self, id: CanvasId) -> Option<&mut dyn DashboardCanvas>;

    /// Locates the dashboard canvas in the loaded scene, if any.
    fn find_canvas(&self) -> Option<CanvasId> {
        None
    }

    /// Camera currently rendering the scene.
    fn main_camera(&self) -> Option<CameraId> {
        None
    }

    /// All terrains active in the scene, in engine order.
    fn active_terrains(&self) -> Vec<TerrainHandle> {
        Vec::new()
    }

    /// Applies persisted customization to `vehicle`.
    fn load_customization(&mut self, _vehicle: VehicleId) {}
}
