//=========================================================================
// Vehicle Registry
//=========================================================================
//
// Roster of every live vehicle in the scene, player and AI alike.
//
// Holds ids only; the host engine owns the vehicles. Updated from spawn
// and destroy notifications. Insertion order is kept but carries no
// meaning.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::host::VehicleId;

//=== VehicleRegistry =====================================================

/// Set of live vehicle ids, without duplicates.
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<VehicleId>,
}

impl VehicleRegistry {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vehicle` if absent. Returns `false` when it was already live.
    pub fn insert(&mut self, vehicle: VehicleId) -> bool {
        if self.contains(vehicle) {
            debug!("{} already registered, ignoring spawn", vehicle);
            return false;
        }

        debug!("Registered vehicle {}", vehicle);
        self.vehicles.push(vehicle);
        true
    }

    /// Removes `vehicle` if present. Returns `false` when it was unknown.
    pub fn remove(&mut self, vehicle: VehicleId) -> bool {
        match self.vehicles.iter().position(|id| *id == vehicle) {
            Some(pos) => {
                self.vehicles.remove(pos);
                debug!("Unregistered vehicle {}", vehicle);
                true
            }
            None => false,
        }
    }

    /// Checks whether `vehicle` is live.
    pub fn contains(&self, vehicle: VehicleId) -> bool {
        self.vehicles.contains(&vehicle)
    }

    /// Iterates over live vehicles in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.vehicles.iter().copied()
    }

    /// Number of live vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if no vehicle is live.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut registry = VehicleRegistry::new();
        assert!(registry.insert(VehicleId(1)));
        assert!(!registry.insert(VehicleId(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_unknown_vehicle_is_noop() {
        let mut registry = VehicleRegistry::new();
        registry.insert(VehicleId(1));
        assert!(!registry.remove(VehicleId(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_interleaved_spawns_and_destroys_settle_to_live_set() {
        let mut registry = VehicleRegistry::new();
        registry.insert(VehicleId(1));
        registry.insert(VehicleId(2));
        registry.insert(VehicleId(3));
        registry.remove(VehicleId(2));
        registry.insert(VehicleId(3));
        registry.insert(VehicleId(2));
        registry.remove(VehicleId(1));

        let mut live: Vec<_> = registry.iter().collect();
        live.sort();
        assert_eq!(live, vec![VehicleId(2), VehicleId(3)]);
        assert!(!registry.contains(VehicleId(1)));
    }
}
