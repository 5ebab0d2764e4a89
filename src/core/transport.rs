//=========================================================================
// Transport
//=========================================================================
//
// Teleports a vehicle and locks it out of control while physics settles.
//
// Freeze window (resumed once per rendered frame):
// ```text
//   transport() ──> reset vehicle, remaining = duration, lock control
//   frame(dt)   ──> remaining -= dt
//                     remaining > 0  → lock control, keep only vertical
//                                      velocity, zero angular velocity
//                     remaining <= 0 → restore control, window closes
// ```
// Transporting a vehicle that is already frozen restarts its window.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::host::{SceneHost, VehicleId};
use crate::core::vehicle::Vehicle;

//=== Teleport ============================================================

/// Places `vehicle` at the pose and puts its drivetrain at rest.
pub fn teleport(vehicle: &mut Vehicle, position: Vec3, rotation: Quat) {
    vehicle.velocity = Vec3::ZERO;
    vehicle.angular_velocity = Vec3::ZERO;

    vehicle.position = position;
    vehicle.rotation = rotation;

    vehicle.throttle_input = 0.0;
    vehicle.brake_input = 1.0;
    vehicle.engine_rpm = vehicle.min_engine_rpm;
    vehicle.current_gear = 0;

    for wheel in &mut vehicle.wheels {
        wheel.motor_torque = 0.0;
    }
}

fn hold(vehicle: &mut Vehicle) {
    vehicle.can_control = false;
    vehicle.velocity = Vec3::new(0.0, vehicle.velocity.y, 0.0);
    vehicle.angular_velocity = Vec3::ZERO;
}

//=== FreezeWindow ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct FreezeWindow {
    vehicle: VehicleId,
    remaining: f32,
}

//=== TransportFreezes ====================================================

/// Open freeze windows, at most one per vehicle.
#[derive(Debug)]
pub struct TransportFreezes {
    duration: f32,
    windows: Vec<FreezeWindow>,
}

impl TransportFreezes {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            windows: Vec::new(),
        }
    }

    /// Teleports `vehicle` and opens its freeze window.
    ///
    /// Returns `false` if the vehicle no longer exists.
    pub fn transport(
        &mut self,
        host: &mut dyn SceneHost,
        vehicle: VehicleId,
        position: Vec3,
        rotation: Quat,
    ) -> bool {
        let Some(body) = host.vehicle_mut(vehicle) else {
            warn!("Cannot transport {}: vehicle not found", vehicle);
            return false;
        };

        teleport(body, position, rotation);
        hold(body);
        debug!("Transported {} to {}", vehicle, position);

        let window = FreezeWindow {
            vehicle,
            remaining: self.duration,
        };
        match self.windows.iter_mut().find(|w| w.vehicle == vehicle) {
            Some(existing) => *existing = window,
            None => self.windows.push(window),
        }
        true
    }

    /// Advances every window by one frame of `delta` seconds.
    pub fn frame(&mut self, host: &mut dyn SceneHost, delta: f32) {
        self.windows.retain_mut(|window| {
            let Some(body) = host.vehicle_mut(window.vehicle) else {
                debug!("Dropping freeze of vanished {}", window.vehicle);
                return false;
            };

            window.remaining -= delta;
            if window.remaining > 0.0 {
                hold(body);
                return true;
            }

            body.can_control = true;
            debug!("Released freeze on {}", window.vehicle);
            false
        });
    }

    pub fn is_frozen(&self, vehicle: VehicleId) -> bool {
        self.windows.iter().any(|w| w.vehicle == vehicle)
    }

    pub fn remaining(&self, vehicle: VehicleId) -> Option<f32> {
        self.windows
            .iter()
            .find(|w| w.vehicle == vehicle)
            .map(|w| w.remaining)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::{CameraId, CameraRig, CanvasId, DashboardCanvas};
    use crate::core::vehicle::Wheel;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Track {
        vehicles: HashMap<VehicleId, Vehicle>,
    }

    impl SceneHost for Track {
        fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
            self.vehicles.get(&id)
        }
        fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
            self.vehicles.get_mut(&id)
        }
        fn camera_mut(&mut self, _id: CameraId) -> Option<&mut dyn CameraRig> {
            None
        }
        fn canvas_mut(&mut self, _id: CanvasId) -> Option<&mut dyn DashboardCanvas> {
            None
        }
    }

    fn speeding_vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new();
        vehicle.velocity = Vec3::new(20.0, -3.0, 5.0);
        vehicle.angular_velocity = Vec3::new(0.1, 2.0, 0.0);
        vehicle.throttle_input = 1.0;
        vehicle.engine_rpm = 6500.0;
        vehicle.current_gear = 4;
        vehicle.wheels = vec![Wheel { motor_torque: 300.0 }; 4];
        vehicle
    }

    #[test]
    fn test_teleport_resets_vehicle() {
        let mut vehicle = speeding_vehicle();
        let rotation = Quat::from_rotation_y(1.0);
        teleport(&mut vehicle, Vec3::new(1.0, 2.0, 3.0), rotation);

        assert_eq!(vehicle.velocity, Vec3::ZERO);
        assert_eq!(vehicle.angular_velocity, Vec3::ZERO);
        assert_eq!(vehicle.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(vehicle.rotation, rotation);
        assert_eq!(vehicle.throttle_input, 0.0);
        assert_eq!(vehicle.brake_input, 1.0);
        assert_eq!(vehicle.engine_rpm, vehicle.min_engine_rpm);
        assert_eq!(vehicle.current_gear, 0);
        assert!(vehicle.wheels.iter().all(|w| w.motor_torque == 0.0));
    }

    #[test]
    fn test_freeze_restores_control_after_full_duration() {
        let mut track = Track::default();
        track.vehicles.insert(VehicleId(1), speeding_vehicle());
        let mut freezes = TransportFreezes::new(1.0);

        assert!(freezes.transport(&mut track, VehicleId(1), Vec3::ZERO, Quat::IDENTITY));
        assert!(!track.vehicles[&VehicleId(1)].can_control);

        for _ in 0..3 {
            freezes.frame(&mut track, 0.25);
            assert!(!track.vehicles[&VehicleId(1)].can_control);
            assert!(freezes.is_frozen(VehicleId(1)));
        }

        freezes.frame(&mut track, 0.25);
        assert!(track.vehicles[&VehicleId(1)].can_control);
        assert!(!freezes.is_frozen(VehicleId(1)));
    }

    #[test]
    fn test_freeze_keeps_only_vertical_velocity() {
        let mut track = Track::default();
        track.vehicles.insert(VehicleId(1), Vehicle::new());
        let mut freezes = TransportFreezes::new(1.0);
        freezes.transport(&mut track, VehicleId(1), Vec3::ZERO, Quat::IDENTITY);

        let body = track.vehicles.get_mut(&VehicleId(1)).unwrap();
        body.velocity = Vec3::new(4.0, -9.8, 1.0);
        body.angular_velocity = Vec3::ONE;
        body.can_control = true;

        freezes.frame(&mut track, 0.1);
        let body = &track.vehicles[&VehicleId(1)];
        assert_eq!(body.velocity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(body.angular_velocity, Vec3::ZERO);
        assert!(!body.can_control);
    }

    #[test]
    fn test_retransport_restarts_window() {
        let mut track = Track::default();
        track.vehicles.insert(VehicleId(1), Vehicle::new());
        let mut freezes = TransportFreezes::new(1.0);

        freezes.transport(&mut track, VehicleId(1), Vec3::ZERO, Quat::IDENTITY);
        freezes.frame(&mut track, 0.75);
        freezes.transport(&mut track, VehicleId(1), Vec3::X, Quat::IDENTITY);
        assert_eq!(freezes.remaining(VehicleId(1)), Some(1.0));

        freezes.frame(&mut track, 0.5);
        assert!(!track.vehicles[&VehicleId(1)].can_control);
    }

    #[test]
    fn test_missing_vehicle_is_not_transported() {
        let mut track = Track::default();
        let mut freezes = TransportFreezes::new(1.0);
        assert!(!freezes.transport(&mut track, VehicleId(7), Vec3::ZERO, Quat::IDENTITY));
        assert!(!freezes.is_frozen(VehicleId(7)));
    }

    #[test]
    fn test_vanished_vehicle_drops_its_window() {
        let mut track = Track::default();
        track.vehicles.insert(VehicleId(1), Vehicle::new());
        let mut freezes = TransportFreezes::new(1.0);
        freezes.transport(&mut track, VehicleId(1), Vec3::ZERO, Quat::IDENTITY);

        track.vehicles.clear();
        freezes.frame(&mut track, 0.1);
        assert!(!freezes.is_frozen(VehicleId(1)));
    }
}
