#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use aetheric_drive::prelude::*;

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//--- Camera ----------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TestCamera {
    pub target: Option<VehicleId>,
    pub mode_changes: u32,
}

impl CameraRig for TestCamera {
    fn set_target(&mut self, vehicle: VehicleId) {
        self.target = Some(vehicle);
    }

    fn remove_target(&mut self) {
        self.target = None;
    }

    fn change_camera(&mut self) {
        self.mode_changes += 1;
    }
}

//--- Dashboard -------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TestCanvas {
    pub display: DisplayType,
}

impl DashboardCanvas for TestCanvas {
    fn display_type(&self) -> DisplayType {
        self.display
    }

    fn set_display_type(&mut self, display: DisplayType) {
        self.display = display;
    }
}

//--- Host ------------------------------------------------------------------

/// In-memory scene standing in for the host engine.
#[derive(Default)]
pub struct TestHost {
    pub vehicles: HashMap<VehicleId, Vehicle>,
    pub cameras: HashMap<CameraId, TestCamera>,
    pub canvas: Option<(CanvasId, TestCanvas)>,
    pub main_camera: Option<CameraId>,
    pub terrains: Vec<TerrainHandle>,
    pub customized: Vec<VehicleId>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_vehicle(&mut self, id: u64) -> VehicleId {
        let id = VehicleId(id);
        self.vehicles.insert(id, Vehicle::new());
        id
    }

    pub fn spawn_camera(&mut self, id: u64) -> CameraId {
        let id = CameraId(id);
        self.cameras.insert(id, TestCamera::default());
        id
    }

    pub fn with_canvas(mut self) -> Self {
        self.canvas = Some((CanvasId(1), TestCanvas::default()));
        self
    }

    pub fn add_terrain(&mut self, id: u64, data: Option<TerrainData>) {
        self.terrains.push(TerrainHandle {
            id: TerrainId(id),
            name: format!("Terrain {id}"),
            data: data.map(Arc::new),
            collider_material: None,
        });
    }

    pub fn vehicle_ref(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[&id]
    }

    pub fn display(&self) -> DisplayType {
        self.canvas.as_ref().map(|(_, c)| c.display).unwrap_or_default()
    }

    pub fn set_display(&mut self, display: DisplayType) {
        if let Some((_, canvas)) = self.canvas.as_mut() {
            canvas.display = display;
        }
    }
}

impl SceneHost for TestHost {
    fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    fn camera_mut(&mut self, id: CameraId) -> Option<&mut dyn CameraRig> {
        match self.cameras.get_mut(&id) {
            Some(camera) => Some(camera),
            None => None,
        }
    }

    fn canvas_mut(&mut self, id: CanvasId) -> Option<&mut dyn DashboardCanvas> {
        match &mut self.canvas {
            Some((canvas_id, canvas)) if *canvas_id == id => Some(canvas),
            _ => None,
        }
    }

    fn find_canvas(&self) -> Option<CanvasId> {
        self.canvas.as_ref().map(|(id, _)| *id)
    }

    fn main_camera(&self) -> Option<CameraId> {
        self.main_camera
    }

    fn active_terrains(&self) -> Vec<TerrainHandle> {
        self.terrains.clone()
    }

    fn load_customization(&mut self, vehicle: VehicleId) {
        self.customized.push(vehicle);
    }
}
