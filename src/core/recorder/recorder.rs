//=========================================================================
// Recorder
//=========================================================================
//
// Captures and replays one vehicle's inputs and rigid-body state.
//
// State machine:
// ```text
//            record()                 play() [clip exists]
//   Neutral ─────────> Record   Neutral ──────────────────> Play
//      ^                 │         ^                          │
//      └──── record() ───┘         └── play() / end of clip ──┘
//            stop()                    stop()
// ```
//
// Leaving Record through any transition keeps the captured frames as
// the last clip, provided at least one frame was captured.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::host::VehicleId;
use crate::core::vehicle::Vehicle;

//=== RecordMode ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordMode {
    #[default]
    Neutral,
    Play,
    Record,
}

//=== RecordedFrame =======================================================

/// One physics step worth of captured vehicle state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedFrame {
    pub throttle: f32,
    pub brake: f32,
    pub steer: f32,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

impl RecordedFrame {
    fn capture(vehicle: &Vehicle) -> Self {
        Self {
            throttle: vehicle.throttle_input,
            brake: vehicle.brake_input,
            steer: vehicle.steer_input,
            position: vehicle.position,
            rotation: vehicle.rotation,
            velocity: vehicle.velocity,
        }
    }

    fn apply(&self, vehicle: &mut Vehicle) {
        vehicle.throttle_input = self.throttle;
        vehicle.brake_input = self.brake;
        vehicle.steer_input = self.steer;
        vehicle.position = self.position;
        vehicle.rotation = self.rotation;
        vehicle.velocity = self.velocity;
    }
}

//=== Recorder ============================================================

#[derive(Debug)]
pub struct Recorder {
    vehicle: Option<VehicleId>,
    mode: RecordMode,
    capture: Vec<RecordedFrame>,
    clip: Option<Vec<RecordedFrame>>,
    cursor: usize,
}

impl Recorder {
    pub fn new(vehicle: VehicleId) -> Self {
        Self {
            vehicle: Some(vehicle),
            mode: RecordMode::Neutral,
            capture: Vec::new(),
            clip: None,
            cursor: 0,
        }
    }

    //--- Binding ----------------------------------------------------------

    pub fn vehicle(&self) -> Option<VehicleId> {
        self.vehicle
    }

    /// Drops the vehicle binding. Unbound recorders are pruned by the
    /// next consistency pass.
    pub fn unbind(&mut self) {
        self.vehicle = None;
    }

    //--- Queries ----------------------------------------------------------

    pub fn mode(&self) -> RecordMode {
        self.mode
    }

    pub fn clip(&self) -> Option<&[RecordedFrame]> {
        self.clip.as_deref()
    }

    //--- Commands ---------------------------------------------------------

    /// Toggles recording.
    pub fn record(&mut self) {
        match self.mode {
            RecordMode::Record => {
                self.finish_capture();
                self.mode = RecordMode::Neutral;
            }
            RecordMode::Neutral | RecordMode::Play => {
                self.capture.clear();
                self.mode = RecordMode::Record;
            }
        }
    }

    /// Toggles playback of the last clip.
    pub fn play(&mut self) {
        if self.mode == RecordMode::Record {
            self.finish_capture();
        }

        if self.clip.is_none() {
            warn!("No recorded clip to play for {:?}", self.vehicle);
            self.mode = RecordMode::Neutral;
            return;
        }

        match self.mode {
            RecordMode::Play => self.mode = RecordMode::Neutral,
            RecordMode::Neutral | RecordMode::Record => {
                self.cursor = 0;
                self.mode = RecordMode::Play;
            }
        }
    }

    pub fn stop(&mut self) {
        if self.mode == RecordMode::Record {
            self.finish_capture();
        }
        self.mode = RecordMode::Neutral;
    }

    //--- Physics Step -----------------------------------------------------

    /// Captures into or replays from the clip, depending on the mode.
    pub fn step(&mut self, vehicle: &mut Vehicle) {
        match self.mode {
            RecordMode::Neutral => {}
            RecordMode::Record => self.capture.push(RecordedFrame::capture(vehicle)),
            RecordMode::Play => {
                let frame = self
                    .clip
                    .as_ref()
                    .and_then(|clip| clip.get(self.cursor))
                    .copied();

                match frame {
                    Some(frame) => {
                        frame.apply(vehicle);
                        self.cursor += 1;
                    }
                    None => {
                        debug!("Playback finished for {:?}", self.vehicle);
                        self.mode = RecordMode::Neutral;
                    }
                }
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish_capture(&mut self) {
        if self.capture.is_empty() {
            return;
        }
        debug!(
            "Stored clip of {} frames for {:?}",
            self.capture.len(),
            self.vehicle
        );
        self.clip = Some(std::mem::take(&mut self.capture));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_vehicle(x: f32) -> Vehicle {
        let mut vehicle = Vehicle::new();
        vehicle.position = Vec3::new(x, 0.0, 0.0);
        vehicle.throttle_input = 0.5;
        vehicle
    }

    #[test]
    fn test_record_toggles_and_keeps_clip() {
        let mut recorder = Recorder::new(VehicleId(1));
        recorder.record();
        assert_eq!(recorder.mode(), RecordMode::Record);

        recorder.step(&mut moving_vehicle(1.0));
        recorder.step(&mut moving_vehicle(2.0));

        recorder.record();
        assert_eq!(recorder.mode(), RecordMode::Neutral);
        assert_eq!(recorder.clip().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_play_without_clip_stays_neutral() {
        let mut recorder = Recorder::new(VehicleId(1));
        recorder.play();
        assert_eq!(recorder.mode(), RecordMode::Neutral);
    }

    #[test]
    fn test_playback_replays_frames_then_returns_to_neutral() {
        let mut recorder = Recorder::new(VehicleId(1));
        recorder.record();
        recorder.step(&mut moving_vehicle(1.0));
        recorder.step(&mut moving_vehicle(2.0));
        recorder.stop();

        recorder.play();
        assert_eq!(recorder.mode(), RecordMode::Play);

        let mut vehicle = Vehicle::new();
        recorder.step(&mut vehicle);
        assert_eq!(vehicle.position.x, 1.0);
        assert_eq!(vehicle.throttle_input, 0.5);

        recorder.step(&mut vehicle);
        assert_eq!(vehicle.position.x, 2.0);

        recorder.step(&mut vehicle);
        assert_eq!(recorder.mode(), RecordMode::Neutral);
    }

    #[test]
    fn test_play_toggles_off() {
        let mut recorder = Recorder::new(VehicleId(1));
        recorder.record();
        recorder.step(&mut moving_vehicle(1.0));
        recorder.play();
        assert_eq!(recorder.mode(), RecordMode::Play);

        recorder.play();
        assert_eq!(recorder.mode(), RecordMode::Neutral);
    }

    #[test]
    fn test_empty_recording_does_not_replace_clip() {
        let mut recorder = Recorder::new(VehicleId(1));
        recorder.record();
        recorder.step(&mut moving_vehicle(4.0));
        recorder.record();

        recorder.record();
        recorder.record();
        assert_eq!(recorder.clip().map(|c| c[0].position.x), Some(4.0));
    }

    #[test]
    fn test_unbind_clears_vehicle() {
        let mut recorder = Recorder::new(VehicleId(9));
        recorder.unbind();
        assert_eq!(recorder.vehicle(), None);
    }
}
