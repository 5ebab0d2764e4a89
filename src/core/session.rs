//=========================================================================
// Player Session
//=========================================================================
//
// The player's active vehicle, camera, dashboard canvas and character.
//
// Invariants:
// - At most one of each is active at a time.
// - Dashboard visibility is derived from the active vehicle, never set
//   independently while UI hiding is enabled.
// - A vehicle change is reported once per change of identity.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::events::Notification;
use crate::core::host::{
    CameraId, CameraRig, CanvasId, CharacterId, DisplayType, SceneHost, VehicleId,
};

//=== RegisterOptions =====================================================

/// Optional state forced onto a vehicle when it becomes the player's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterOptions {
    pub controllable: Option<bool>,
    pub engine_running: Option<bool>,
}

impl RegisterOptions {
    pub fn controllable(controllable: bool) -> Self {
        Self {
            controllable: Some(controllable),
            engine_running: None,
        }
    }

    pub fn with_engine(mut self, running: bool) -> Self {
        self.engine_running = Some(running);
        self
    }
}

//=== PlayerSession =======================================================

#[derive(Debug, Default)]
pub struct PlayerSession {
    vehicle: Option<VehicleId>,
    last_vehicle: Option<VehicleId>,
    camera: Option<CameraId>,
    main_camera: Option<CameraId>,
    canvas: Option<CanvasId>,
    character: Option<CharacterId>,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Accessors --------------------------------------------------------

    /// The player's vehicle, cleared on deregistration or destruction.
    pub fn vehicle(&self) -> Option<VehicleId> {
        self.vehicle
    }

    /// Camera rig following the player's vehicle.
    pub fn camera(&self) -> Option<CameraId> {
        self.camera
    }

    /// Camera rendering the scene as of the last update.
    pub fn main_camera(&self) -> Option<CameraId> {
        self.main_camera
    }

    pub fn canvas(&self) -> Option<CanvasId> {
        self.canvas
    }

    pub fn character(&self) -> Option<CharacterId> {
        self.character
    }

    pub fn set_camera(&mut self, camera: CameraId) {
        debug!("Active player camera is now {}", camera);
        self.camera = Some(camera);
    }

    pub fn set_canvas(&mut self, canvas: Option<CanvasId>) {
        self.canvas = canvas;
    }

    pub fn set_character(&mut self, character: Option<CharacterId>) {
        self.character = character;
    }

    pub(crate) fn refresh_main_camera(&mut self, host: &dyn SceneHost) {
        self.main_camera = host.main_camera();
    }

    //--- Registration -----------------------------------------------------

    /// Makes `vehicle` the player's vehicle and points the camera at it.
    pub fn register(
        &mut self,
        host: &mut dyn SceneHost,
        vehicle: VehicleId,
        options: RegisterOptions,
        load_customization: bool,
    ) {
        info!("Registering {} as player vehicle", vehicle);
        self.vehicle = Some(vehicle);

        if let Some(body) = host.vehicle_mut(vehicle) {
            if let Some(controllable) = options.controllable {
                body.set_can_control(controllable);
            }
            if let Some(running) = options.engine_running {
                body.set_engine(running);
            }
        }

        if let Some(camera) = self.camera_rig(host) {
            camera.set_target(vehicle);
        }

        if load_customization {
            host.load_customization(vehicle);
        }
    }

    /// Releases the player's vehicle and the camera target.
    pub fn deregister(&mut self, host: &mut dyn SceneHost) {
        if let Some(id) = self.vehicle.take() {
            info!("Deregistering player vehicle {}", id);
            if let Some(body) = host.vehicle_mut(id) {
                body.set_can_control(false);
            }
        }

        if let Some(camera) = self.camera_rig(host) {
            camera.remove_target();
        }
    }

    /// Forgets the player's vehicle if `vehicle` is it. The host already
    /// dropped the vehicle, so nothing is written back.
    pub fn vehicle_destroyed(&mut self, vehicle: VehicleId) {
        if self.vehicle == Some(vehicle) {
            info!("Player vehicle {} destroyed", vehicle);
            self.vehicle = None;
        }
    }

    pub fn change_camera(&mut self, host: &mut dyn SceneHost) {
        if let Some(camera) = self.camera_rig(host) {
            camera.change_camera();
        }
    }

    fn camera_rig<'h>(&self, host: &'h mut dyn SceneHost) -> Option<&'h mut dyn CameraRig> {
        match self.camera {
            Some(id) => host.camera_mut(id),
            None => None,
        }
    }

    //--- Per-Frame Checks -------------------------------------------------

    /// Reports a change of player vehicle since the last call.
    ///
    /// Only tracks while a vehicle is active: dropping to no vehicle and
    /// back to the same one is not a change.
    pub fn detect_change(&mut self) -> Option<Notification> {
        let current = self.vehicle?;
        let previous = self.last_vehicle.replace(current);

        (previous != Some(current)).then_some(Notification::VehicleChanged { previous, current })
    }

    /// Derives dashboard visibility from the player vehicle.
    pub fn check_canvas(&self, host: &mut dyn SceneHost) {
        let drivable = match self.vehicle {
            Some(id) => host.vehicle(id).is_some_and(|body| body.is_drivable()),
            None => false,
        };

        let Some(canvas_id) = self.canvas else {
            return;
        };
        let Some(canvas) = host.canvas_mut(canvas_id) else {
            return;
        };

        if !drivable {
            canvas.set_display_type(DisplayType::Off);
        } else if canvas.display_type() != DisplayType::Customization {
            canvas.set_display_type(DisplayType::Full);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
