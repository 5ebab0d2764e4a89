//=========================================================================
// Recording System
//=========================================================================
//
// Per-vehicle recorders and the supervisor that binds them.
//
// Architecture:
//   RecorderSupervisor
//     ├─ recorders: Vec<Recorder>   (one per live vehicle)
//     └─ sweep: consistency pass state
//
//=========================================================================

//=== Module Declarations =================================================

mod recorder;
mod supervisor;

//=== Public API ==========================================================

pub use recorder::{RecordMode, RecordedFrame, Recorder};
pub use supervisor::RecorderSupervisor;
