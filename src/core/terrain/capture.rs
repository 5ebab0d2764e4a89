//=========================================================================
// Terrain Capture
//=========================================================================
//
// Resumable task that snapshots every active terrain once per scene.
//
// Phases:
// ```text
//   AwaitFirstStep ──fixed──> enumerate terrains
//   AwaitSecondStep ─fixed──> Scanning(0)
//   Scanning(i) ── data missing ──> log, AwaitFrame(i) ──frame──> retry i,
//                                                         Scanning(i + 1)
//   Scanning(end) ──> build snapshots ──> Done
// ```
// The two physics steps give the engine time to finish loading terrain
// data. A terrain still missing data is logged, given one frame, and
// then captured as an empty snapshot; the capture never aborts.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use super::snapshot::{TerrainHandle, TerrainSnapshot};
use crate::core::host::SceneHost;

//=== CapturePhase ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapturePhase {
    AwaitFirstStep,
    AwaitSecondStep,
    AwaitFrame(usize),
    Done,
}

//=== TerrainCapture ======================================================

#[derive(Debug)]
pub(crate) struct TerrainCapture {
    phase: CapturePhase,
    terrains: Vec<TerrainHandle>,
}

impl TerrainCapture {
    pub(crate) fn new() -> Self {
        Self {
            phase: CapturePhase::AwaitFirstStep,
            terrains: Vec::new(),
        }
    }

    /// Resumes on a physics step. Returns the snapshots once complete.
    pub(crate) fn fixed_step(&mut self, host: &dyn SceneHost) -> Option<Vec<TerrainSnapshot>> {
        match self.phase {
            CapturePhase::AwaitFirstStep => {
                self.terrains = host.active_terrains();
                debug!("Enumerated {} active terrain(s)", self.terrains.len());
                self.phase = CapturePhase::AwaitSecondStep;
                None
            }
            CapturePhase::AwaitSecondStep => self.scan_from(0),
            CapturePhase::AwaitFrame(_) | CapturePhase::Done => None,
        }
    }

    /// Resumes on a rendered frame. Returns the snapshots once complete.
    pub(crate) fn frame(&mut self, host: &dyn SceneHost) -> Option<Vec<TerrainSnapshot>> {
        let CapturePhase::AwaitFrame(index) = self.phase else {
            return None;
        };

        self.retry(index, host);
        self.scan_from(index + 1)
    }

    pub(crate) fn is_done(&self) -> bool {
        self.phase == CapturePhase::Done
    }

    //--- Internal Helpers -------------------------------------------------

    fn scan_from(&mut self, start: usize) -> Option<Vec<TerrainSnapshot>> {
        for index in start..self.terrains.len() {
            let terrain = &self.terrains[index];
            if terrain.data.is_none() {
                error!(
                    "Terrain data of {} ({}) is missing, check the terrain data",
                    terrain.name, terrain.id
                );
                self.phase = CapturePhase::AwaitFrame(index);
                return None;
            }
        }

        let snapshots: Vec<_> = self.terrains.iter().map(TerrainSnapshot::capture).collect();
        info!("Captured {} terrain snapshot(s)", snapshots.len());
        self.phase = CapturePhase::Done;
        Some(snapshots)
    }

    fn retry(&mut self, index: usize, host: &dyn SceneHost) {
        let id = self.terrains[index].id;
        let refreshed = host
            .active_terrains()
            .into_iter()
            .find(|t| t.id == id && t.data.is_some());

        if let Some(handle) = refreshed {
            debug!("Terrain data of {} arrived after retry", id);
            self.terrains[index] = handle;
        }
    }
}
