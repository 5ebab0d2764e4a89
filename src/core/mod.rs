//=========================================================================
// Core Scene Systems
//
// Building blocks the `SceneCoordinator` composes.
//
// Responsibilities:
// - `registry`:    live vehicle roster
// - `recorder`:    per-vehicle recorders and their supervisor
// - `session`:     player vehicle, camera, dashboard and character
// - `terrain`:     one-time splat-map snapshot cache
// - `transport`:   teleport with a control freeze window
// - `time_scale`:  simulation clock and slow-motion gate
// - `events`:      inbound scene events, outbound notifications
// - `host`:        seam to the host engine (ids and collaborator traits)
//
// Notes:
// Each system is independently usable and testable against any
// `SceneHost`. None of them holds engine objects directly.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod error;
pub mod events;
pub mod host;
pub mod integration;
pub mod recorder;
pub mod registry;
pub mod session;
pub mod settings;
pub mod terrain;
pub mod time_scale;
pub mod transport;
pub mod vehicle;

//=== Re-exports ==========================================================

pub use error::{SceneError, SceneResult};
pub use host::{
    CameraId, CameraRig, CanvasId, CharacterId, DashboardCanvas, DisplayType, SceneHost,
    TerrainId, VehicleId,
};
pub use settings::SceneSettings;
pub use vehicle::{Vehicle, Wheel};
