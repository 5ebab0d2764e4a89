//=========================================================================
// Aetheric Drive — Library Root
//
// Scene-level coordinator for vehicle simulation games.
//
// Responsibilities:
// - Track the active player vehicle, camera and dashboard
// - Maintain the roster of live player and AI vehicles
// - Bind one recorder per vehicle and fan out record/play/stop
// - Snapshot terrain splat-maps once per scene
// - Transport vehicles with a short control freeze
// - Gate the simulation time scale for slow motion
//
// The host engine owns every vehicle, camera and terrain; this crate
// sees them through the `SceneHost` trait and is driven by the host's
// frame and physics-step callbacks.
//
// Typical usage:
// ```ignore
// use aetheric_drive::prelude::*;
//
// let mut scene = SceneCoordinatorBuilder::new().build();
// scene.awake(&mut host);
// scene.start();
//
// let spawner = scene.event_sender().unwrap();
// spawner.send(SceneEvent::PlayerVehicleSpawned(VehicleId(1)))?;
//
// loop {
//     scene.fixed_update(&mut host);
//     scene.update(&mut host, frame_delta);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the individual scene systems. Most callers only need the
// `SceneCoordinator` facade and the types in `prelude`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod coordinator;

//--- Public Exports ------------------------------------------------------

pub use coordinator::{SceneCoordinator, SceneCoordinatorBuilder};
