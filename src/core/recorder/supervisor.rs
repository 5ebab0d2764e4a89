//=========================================================================
// Recorder Supervisor
//=========================================================================
//
// Keeps exactly one recorder per live vehicle and fans out global
// record/play/stop commands.
//
// Consistency pass (resumable, driven by physics steps):
// ```text
//   schedule_sweep() ──> AwaitPrune ──step──> prune dangling recorders
//                                     └─────> AwaitRefresh ──step──> idle
// ```
// Scheduling while a pass is pending restarts it, so the latest
// spawn/destroy always gets the full settle delay.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::recorder::{RecordMode, Recorder};
use crate::core::host::{SceneHost, VehicleId};

//=== RecorderSweep =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecorderSweep {
    AwaitPrune,
    AwaitRefresh,
}

//=== RecorderSupervisor ==================================================

#[derive(Debug, Default)]
pub struct RecorderSupervisor {
    recorders: Vec<Recorder>,
    sweep: Option<RecorderSweep>,
}

impl RecorderSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Binding ----------------------------------------------------------

    /// Attaches a recorder to `vehicle` unless one is already bound.
    ///
    /// Returns `true` if a recorder was created.
    pub fn ensure_recorder(&mut self, vehicle: VehicleId) -> bool {
        if self.recorder_for(vehicle).is_some() {
            return false;
        }

        debug!("Attaching recorder to {}", vehicle);
        self.recorders.push(Recorder::new(vehicle));
        true
    }

    pub fn recorder_for(&self, vehicle: VehicleId) -> Option<&Recorder> {
        self.recorders
            .iter()
            .find(|r| r.vehicle() == Some(vehicle))
    }

    pub fn recorder_for_mut(&mut self, vehicle: VehicleId) -> Option<&mut Recorder> {
        self.recorders
            .iter_mut()
            .find(|r| r.vehicle() == Some(vehicle))
    }

    pub fn recorders(&self) -> &[Recorder] {
        &self.recorders
    }

    //--- Global Commands --------------------------------------------------

    pub fn record(&mut self) {
        self.recorders.iter_mut().for_each(Recorder::record);
    }

    pub fn play(&mut self) {
        self.recorders.iter_mut().for_each(Recorder::play);
    }

    pub fn stop(&mut self) {
        self.recorders.iter_mut().for_each(Recorder::stop);
    }

    /// Mode of the first recorder, used as the scene-wide indicator.
    pub fn mode(&self) -> Option<RecordMode> {
        self.recorders.first().map(Recorder::mode)
    }

    //--- Consistency Pass -------------------------------------------------

    pub fn schedule_sweep(&mut self) {
        self.sweep = Some(RecorderSweep::AwaitPrune);
    }

    pub fn sweep_pending(&self) -> bool {
        self.sweep.is_some()
    }

    /// Advances the consistency pass and steps every bound recorder.
    pub fn fixed_step(&mut self, host: &mut dyn SceneHost) {
        self.advance_sweep(host);

        for recorder in &mut self.recorders {
            let Some(id) = recorder.vehicle() else {
                continue;
            };
            if let Some(vehicle) = host.vehicle_mut(id) {
                recorder.step(vehicle);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn advance_sweep(&mut self, host: &dyn SceneHost) {
        self.sweep = match self.sweep {
            Some(RecorderSweep::AwaitPrune) => {
                let before = self.recorders.len();
                self.recorders.retain(|recorder| {
                    recorder
                        .vehicle()
                        .is_some_and(|id| host.vehicle(id).is_some())
                });

                let pruned = before - self.recorders.len();
                if pruned > 0 {
                    debug!("Removed {} dangling recorder(s)", pruned);
                }
                Some(RecorderSweep::AwaitRefresh)
            }
            Some(RecorderSweep::AwaitRefresh) => {
                debug!("Recorder pass settled with {} recorder(s)", self.recorders.len());
                None
            }
            None => None,
        };
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
