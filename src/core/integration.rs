//=========================================================================
// Enter/Exit Integration
//=========================================================================
//
// Optional capability for games where the player can leave a vehicle
// and walk around as a character. Absent by default; installed through
// `SceneCoordinatorBuilder::with_enter_exit`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::host::{CameraId, CharacterId, VehicleId};

//=== EnterExitIntegration ================================================

pub trait EnterExitIntegration {
    /// A player vehicle spawned; bind its enter/exit point to `camera`.
    fn on_vehicle_spawned(&mut self, vehicle: VehicleId, camera: Option<CameraId>);

    fn on_character_spawned(&mut self, _character: CharacterId) {}

    fn on_character_destroyed(&mut self, _character: CharacterId) {}
}
