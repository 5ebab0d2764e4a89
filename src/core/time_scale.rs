//=========================================================================
// Simulation Clock & Time-Scale Gate
//=========================================================================
//
// `SimulationClock` holds the engine timing values the coordinator is
// allowed to override. The host reads it back every frame.
//
// `TimeScaleGate` switches the clock between the captured baseline and
// a fixed slow-motion factor. Signals do not stack: the last one wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== SimulationClock =====================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    pub time_scale: f32,
    pub fixed_delta_time: f32,
    /// `None` leaves the frame rate to the host.
    pub target_frame_rate: Option<u32>,
    pub cursor_locked: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_delta_time: 0.02,
            target_frame_rate: None,
            cursor_locked: false,
        }
    }
}

//=== TimeScaleGate =======================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScaleGate {
    baseline: f32,
    slow_scale: f32,
}

impl TimeScaleGate {
    /// Captures the clock's current scale as the baseline.
    pub fn capture(clock: &SimulationClock, slow_scale: f32) -> Self {
        Self {
            baseline: clock.time_scale,
            slow_scale,
        }
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn apply(&self, clock: &mut SimulationClock, slow_motion: bool) {
        clock.time_scale = if slow_motion {
            self.slow_scale
        } else {
            self.baseline
        };
        debug!("Time scale set to {}", clock.time_scale);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
