//=========================================================================
// Terrain Snapshot Cache
//=========================================================================
//
// One-time capture of splat-map metadata for every active terrain.
//
// Architecture:
//   TerrainCache
//     ├─ capture: Option<TerrainCapture>   (running task)
//     ├─ snapshots: Vec<TerrainSnapshot>   (read-only once ready)
//     └─ ready: bool
//
//=========================================================================

//=== Module Declarations =================================================

mod capture;
mod snapshot;

//=== Public API ==========================================================

pub use snapshot::{PhysicMaterial, TerrainData, TerrainHandle, TerrainSnapshot};

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::host::{SceneHost, TerrainId};
use capture::TerrainCapture;

//=== TerrainCache ========================================================

/// Terrain snapshots of the current scene, captured once.
#[derive(Debug, Default)]
pub struct TerrainCache {
    capture: Option<TerrainCapture>,
    snapshots: Vec<TerrainSnapshot>,
    ready: bool,
}

impl TerrainCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the capture task. Has no effect once a capture ran.
    pub fn start(&mut self) {
        if self.ready || self.capture.is_some() {
            warn!("Terrain capture already started, ignoring");
            return;
        }
        self.capture = Some(TerrainCapture::new());
    }

    pub(crate) fn fixed_step(&mut self, host: &dyn SceneHost) {
        if let Some(snapshots) = self.capture.as_mut().and_then(|c| c.fixed_step(host)) {
            self.finish(snapshots);
        }
    }

    pub(crate) fn frame(&mut self, host: &dyn SceneHost) {
        if let Some(snapshots) = self.capture.as_mut().and_then(|c| c.frame(host)) {
            self.finish(snapshots);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// `true` once every terrain has been processed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn snapshots(&self) -> &[TerrainSnapshot] {
        &self.snapshots
    }

    pub fn snapshot(&self, terrain: TerrainId) -> Option<&TerrainSnapshot> {
        self.snapshots.iter().find(|s| s.terrain == terrain)
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish(&mut self, snapshots: Vec<TerrainSnapshot>) {
        debug_assert!(self.capture.as_ref().is_some_and(TerrainCapture::is_done));
        self.snapshots = snapshots;
        self.capture = None;
        self.ready = true;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
