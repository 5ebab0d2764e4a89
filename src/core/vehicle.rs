//=========================================================================
// Vehicle
//=========================================================================
//
// Engine-side view of a simulated car.
//
// Only the fields the coordinator reads or writes are modelled here. The
// drivetrain, suspension and AI driving logic live in the host engine and
// keep these fields current between ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};

//=== Wheel ===============================================================

/// Wheel collider state the coordinator touches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wheel {
    pub motor_torque: f32,
}

//=== Vehicle =============================================================

/// Public state of a vehicle as exposed by the host engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    //--- Control ----------------------------------------------------------
    pub can_control: bool,
    pub engine_running: bool,
    pub enabled: bool,
    pub active_in_hierarchy: bool,

    //--- Inputs -----------------------------------------------------------
    pub throttle_input: f32,
    pub brake_input: f32,
    pub steer_input: f32,

    //--- Drivetrain -------------------------------------------------------
    pub current_gear: u8,
    pub engine_rpm: f32,
    pub min_engine_rpm: f32,
    pub wheels: Vec<Wheel>,

    //--- Rigid Body -------------------------------------------------------
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl Vehicle {
    /// Creates a controllable, idle four-wheel vehicle at the origin.
    pub fn new() -> Self {
        Self {
            can_control: true,
            engine_running: true,
            enabled: true,
            active_in_hierarchy: true,
            throttle_input: 0.0,
            brake_input: 0.0,
            steer_input: 0.0,
            current_gear: 0,
            engine_rpm: 800.0,
            min_engine_rpm: 800.0,
            wheels: vec![Wheel::default(); 4],
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }

    pub fn set_can_control(&mut self, can_control: bool) {
        self.can_control = can_control;
    }

    pub fn set_engine(&mut self, running: bool) {
        self.engine_running = running;
        if !running {
            self.engine_rpm = 0.0;
        }
    }

    /// Whether the dashboard should be shown for this vehicle.
    pub fn is_drivable(&self) -> bool {
        self.can_control && self.enabled && self.active_in_hierarchy
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_is_drivable() {
        let vehicle = Vehicle::new();
        assert!(vehicle.is_drivable());
        assert_eq!(vehicle.wheels.len(), 4);
    }

    #[test]
    fn test_inactive_or_disabled_vehicle_is_not_drivable() {
        let mut vehicle = Vehicle::new();
        vehicle.active_in_hierarchy = false;
        assert!(!vehicle.is_drivable());

        let mut vehicle = Vehicle::new();
        vehicle.enabled = false;
        assert!(!vehicle.is_drivable());

        let mut vehicle = Vehicle::new();
        vehicle.set_can_control(false);
        assert!(!vehicle.is_drivable());
    }

    #[test]
    fn test_stopping_engine_drops_rpm() {
        let mut vehicle = Vehicle::new();
        vehicle.set_engine(false);
        assert!(!vehicle.engine_running);
        assert_eq!(vehicle.engine_rpm, 0.0);
    }
}
