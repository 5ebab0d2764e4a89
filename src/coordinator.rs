//=========================================================================
// Scene Coordinator
//
// Per-scene orchestration of the player session, vehicle roster,
// recorders, terrain snapshots, transport freezes and time scale.
//
// Architecture:
// ```text
//     SceneCoordinatorBuilder ──build()──> SceneCoordinator
//         │                                   │
//         ├─ with_settings()                  ├─ awake()        once, on load
//         ├─ with_slow_motion_scale()         ├─ start()        once, after awake
//         └─ with_enter_exit()                ├─ update(dt)     every frame
//                                             └─ fixed_update() every physics step
//
//     Spawners ──EventSender──> inbox ──update()──> registry / recorders / session
//     SceneCoordinator ──NotificationHub──> Subscription (vehicle/behavior changed)
// ```
//
// The host engine drives every method; nothing here spawns threads or
// blocks. Multi-step work (recorder consistency pass, terrain capture,
// freeze windows) is kept as resumable state advanced by those calls.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::events::{
    EventInbox, EventSender, Notification, NotificationHub, SceneEvent, Subscription,
};
use crate::core::host::{SceneHost, VehicleId};
use crate::core::integration::EnterExitIntegration;
use crate::core::recorder::{RecordMode, RecorderSupervisor};
use crate::core::registry::VehicleRegistry;
use crate::core::session::{PlayerSession, RegisterOptions};
use crate::core::settings::SceneSettings;
use crate::core::terrain::TerrainCache;
use crate::core::time_scale::{SimulationClock, TimeScaleGate};
use crate::core::transport::TransportFreezes;

//=== SceneCoordinatorBuilder =============================================

/// Builder for configuring and constructing a [`SceneCoordinator`].
///
/// # Default Values
///
/// Every value defaults to [`SceneSettings::default`]: slow motion at
/// 0.2x, a one second transport freeze, and every spawned player vehicle
/// registered as the player's.
///
/// # Examples
///
/// ```
/// use aetheric_drive::SceneCoordinatorBuilder;
///
/// let coordinator = SceneCoordinatorBuilder::new()
///     .with_slow_motion_scale(0.25)
///     .disable_ui_when_no_player_vehicle(true)
///     .build();
///
/// assert!(!coordinator.is_enabled());
/// ```
pub struct SceneCoordinatorBuilder {
    settings: SceneSettings,
    enter_exit: Option<Box<dyn EnterExitIntegration>>,
}

impl SceneCoordinatorBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: SceneSettings::default(),
            enter_exit: None,
        }
    }

    /// Replaces all settings at once, typically loaded from a file.
    ///
    /// # Panics
    ///
    /// Panics if the settings do not validate.
    pub fn with_settings(mut self, settings: SceneSettings) -> Self {
        if let Err(e) = settings.validate() {
            panic!("Scene settings must be valid: {}", e);
        }
        self.settings = settings;
        self
    }

    /// Sets the time scale used while slow motion is on.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 < scale <= 1.0`.
    pub fn with_slow_motion_scale(mut self, scale: f32) -> Self {
        assert!(
            scale > 0.0 && scale <= 1.0,
            "Slow motion scale must be in (0, 1], got {}",
            scale
        );
        self.settings.slow_motion_time_scale = scale;
        self
    }

    /// Sets how long a transported vehicle stays frozen, in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `seconds < 0.0`.
    pub fn with_freeze_duration(mut self, seconds: f32) -> Self {
        assert!(seconds >= 0.0, "Freeze duration must not be negative, got {}", seconds);
        self.settings.transport_freeze_seconds = seconds;
        self
    }

    /// Makes every spawned player vehicle the active one.
    pub fn register_first_vehicle_as_player(mut self, enabled: bool) -> Self {
        self.settings.register_first_vehicle_as_player = enabled;
        self
    }

    /// Hides the dashboard while there is no drivable player vehicle.
    pub fn disable_ui_when_no_player_vehicle(mut self, enabled: bool) -> Self {
        self.settings.disable_ui_when_no_player_vehicle = enabled;
        self
    }

    /// Loads persisted customization when a player vehicle is registered.
    pub fn load_customization_at_first(mut self, enabled: bool) -> Self {
        self.settings.load_customization_at_first = enabled;
        self
    }

    /// Installs the enter/exit character integration.
    pub fn with_enter_exit<T>(mut self, integration: T) -> Self
    where
        T: EnterExitIntegration + 'static,
    {
        self.enter_exit = Some(Box::new(integration));
        self
    }

    /// Builds the coordinator. Call [`SceneCoordinator::awake`] next.
    pub fn build(self) -> SceneCoordinator {
        info!(
            "Building scene coordinator (slow motion: {}x, freeze: {}s)",
            self.settings.slow_motion_time_scale, self.settings.transport_freeze_seconds
        );

        SceneCoordinator {
            freezes: TransportFreezes::new(self.settings.transport_freeze_seconds),
            settings: self.settings,
            clock: SimulationClock::default(),
            time_gate: None,
            slow_motion: false,
            registry: VehicleRegistry::new(),
            recorders: RecorderSupervisor::new(),
            record_mode: RecordMode::Neutral,
            session: PlayerSession::new(),
            terrains: TerrainCache::new(),
            inbox: None,
            notifications: NotificationHub::new(),
            enter_exit: self.enter_exit,
        }
    }
}

impl Default for SceneCoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== SceneCoordinator ====================================================

/// Scene-scoped coordinator. One instance per loaded scene.
///
/// Create via [`SceneCoordinatorBuilder`], then drive it from the host:
///
/// ```text
/// awake(host) → start() → { update(host, dt) | fixed_update(host) }* → on_disable()
/// ```
pub struct SceneCoordinator {
    settings: SceneSettings,
    clock: SimulationClock,
    time_gate: Option<TimeScaleGate>,
    slow_motion: bool,

    registry: VehicleRegistry,
    recorders: RecorderSupervisor,
    record_mode: RecordMode,
    session: PlayerSession,
    terrains: TerrainCache,
    freezes: TransportFreezes,

    inbox: Option<EventInbox>,
    notifications: NotificationHub,
    enter_exit: Option<Box<dyn EnterExitIntegration>>,
}

impl SceneCoordinator {
    //--- Lifecycle --------------------------------------------------------

    /// Applies engine overrides, captures the baseline time scale, finds
    /// the dashboard and starts listening for events.
    pub fn awake(&mut self, host: &mut dyn SceneHost) {
        if self.settings.override_fixed_time_step {
            self.clock.fixed_delta_time = self.settings.fixed_time_step;
        }
        if self.settings.override_fps {
            self.clock.target_frame_rate = Some(self.settings.max_fps);
        }
        if self.settings.lock_and_unlock_cursor {
            self.clock.cursor_locked = true;
        }

        // A slow-motion signal before awake already captured the baseline.
        if self.time_gate.is_none() {
            self.time_gate = Some(TimeScaleGate::capture(
                &self.clock,
                self.settings.slow_motion_time_scale,
            ));
        }

        self.session.set_canvas(host.find_canvas());
        self.on_enable();

        info!(
            "Scene coordinator awake (fixed dt: {}, time scale: {})",
            self.clock.fixed_delta_time, self.clock.time_scale
        );
    }

    /// Kicks off the terrain snapshot capture.
    pub fn start(&mut self) {
        self.terrains.start();
    }

    /// Opens the inbound event channel.
    pub fn on_enable(&mut self) {
        if self.inbox.is_some() {
            return;
        }
        debug!("Subscribing to scene events");
        self.inbox = Some(EventInbox::new());
    }

    /// Closes the inbound event channel. Pending events are discarded and
    /// outstanding senders become disconnected.
    pub fn on_disable(&mut self) {
        if let Some(inbox) = self.inbox.take() {
            let dropped = inbox.drain().len();
            debug!("Unsubscribed from scene events ({} pending dropped)", dropped);
        }
    }

    /// `true` while the inbound event channel is open.
    pub fn is_enabled(&self) -> bool {
        self.inbox.is_some()
    }

    /// Sender for spawners and input. `None` while disabled.
    pub fn event_sender(&self) -> Option<EventSender> {
        self.inbox.as_ref().map(EventInbox::sender)
    }

    /// Subscribes to vehicle-changed and behavior-changed notifications.
    pub fn subscribe(&mut self) -> Subscription {
        self.notifications.subscribe()
    }

    //--- Update Loop ------------------------------------------------------

    /// Per-frame tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. Drain inbound events
    /// 2. Advance freeze windows and the terrain capture by one frame
    /// 3. Report a player vehicle change
    /// 4. Derive dashboard visibility (if enabled)
    /// 5. Refresh the main camera and mirror the recorder mode
    pub fn update(&mut self, host: &mut dyn SceneHost, delta: f32) {
        self.process_events(host);

        self.freezes.frame(host, delta);
        self.terrains.frame(host);

        if let Some(notification) = self.session.detect_change() {
            debug!("{:?}", notification);
            self.notifications.publish(notification);
        }

        if self.settings.disable_ui_when_no_player_vehicle {
            self.session.check_canvas(host);
        }

        self.session.refresh_main_camera(host);

        if let Some(mode) = self.recorders.mode() {
            self.record_mode = mode;
        }
    }

    /// Per-physics-step tick.
    pub fn fixed_update(&mut self, host: &mut dyn SceneHost) {
        self.terrains.fixed_step(host);
        self.recorders.fixed_step(host);
    }

    //--- Event Handling ---------------------------------------------------

    /// Handles one event immediately instead of through the inbox.
    pub fn handle_event(&mut self, host: &mut dyn SceneHost, event: SceneEvent) {
        match event {
            SceneEvent::PlayerVehicleSpawned(id) => {
                self.vehicle_spawned(id);
                self.player_vehicle_spawned(host, id);
            }
            SceneEvent::AiVehicleSpawned(id) => self.vehicle_spawned(id),
            SceneEvent::PlayerVehicleDestroyed(id) | SceneEvent::AiVehicleDestroyed(id) => {
                self.vehicle_destroyed(id)
            }
            SceneEvent::CameraSpawned(camera) => self.session.set_camera(camera),
            SceneEvent::SlowMotion(on) => self.set_slow_motion(on),
            SceneEvent::CharacterSpawned(character) => {
                if let Some(integration) = self.enter_exit.as_mut() {
                    self.session.set_character(Some(character));
                    integration.on_character_spawned(character);
                }
            }
            SceneEvent::CharacterDestroyed(character) => {
                if let Some(integration) = self.enter_exit.as_mut() {
                    if self.session.character() == Some(character) {
                        self.session.set_character(None);
                    }
                    integration.on_character_destroyed(character);
                }
            }
        }
    }

    fn process_events(&mut self, host: &mut dyn SceneHost) {
        let events = match &self.inbox {
            Some(inbox) => inbox.drain(),
            None => return,
        };

        for event in events {
            self.handle_event(host, event);
        }
    }

    fn vehicle_spawned(&mut self, vehicle: VehicleId) {
        if self.registry.insert(vehicle) {
            self.recorders.ensure_recorder(vehicle);
        }
        self.recorders.schedule_sweep();
    }

    fn player_vehicle_spawned(&mut self, host: &mut dyn SceneHost, vehicle: VehicleId) {
        if self.settings.register_first_vehicle_as_player {
            self.register_player(host, vehicle);
        }

        if let Some(integration) = self.enter_exit.as_mut() {
            integration.on_vehicle_spawned(vehicle, self.session.camera());
        }
    }

    fn vehicle_destroyed(&mut self, vehicle: VehicleId) {
        self.registry.remove(vehicle);
        self.recorders.schedule_sweep();
        self.session.vehicle_destroyed(vehicle);
    }

    //--- Player Session ---------------------------------------------------

    /// Makes `vehicle` the player's vehicle, leaving its state untouched.
    pub fn register_player(&mut self, host: &mut dyn SceneHost, vehicle: VehicleId) {
        self.register_player_with(host, vehicle, RegisterOptions::default());
    }

    /// Makes `vehicle` the player's vehicle, forcing the given state.
    pub fn register_player_with(
        &mut self,
        host: &mut dyn SceneHost,
        vehicle: VehicleId,
        options: RegisterOptions,
    ) {
        self.session.register(
            host,
            vehicle,
            options,
            self.settings.load_customization_at_first,
        );
    }

    /// Releases the player's vehicle, disabling its control and clearing
    /// the camera target.
    pub fn deregister_player(&mut self, host: &mut dyn SceneHost) {
        self.session.deregister(host);
    }

    /// Cycles the active camera rig to its next mode.
    pub fn change_camera(&mut self, host: &mut dyn SceneHost) {
        self.session.change_camera(host);
    }

    //--- Recording --------------------------------------------------------

    /// Toggles recording on every recorder.
    pub fn record(&mut self) {
        self.recorders.record();
    }

    /// Toggles playback on every recorder.
    pub fn play(&mut self) {
        self.recorders.play();
    }

    /// Returns every recorder to neutral.
    pub fn stop(&mut self) {
        self.recorders.stop();
    }

    //--- Transport --------------------------------------------------------

    /// Transports the player's vehicle. Returns `false` if there is none.
    pub fn transport(&mut self, host: &mut dyn SceneHost, position: Vec3, rotation: Quat) -> bool {
        match self.session.vehicle() {
            Some(vehicle) => self.freezes.transport(host, vehicle, position, rotation),
            None => {
                debug!("No player vehicle to transport");
                false
            }
        }
    }

    /// Transports an explicit vehicle.
    pub fn transport_vehicle(
        &mut self,
        host: &mut dyn SceneHost,
        vehicle: VehicleId,
        position: Vec3,
        rotation: Quat,
    ) -> bool {
        self.freezes.transport(host, vehicle, position, rotation)
    }

    //--- Behavior & Time --------------------------------------------------

    /// Selects a behavior preset and notifies subscribers.
    pub fn set_behavior(&mut self, index: usize) {
        if !self.settings.behaviors.is_empty() && index >= self.settings.behaviors.len() {
            warn!(
                "Behavior index {} is outside the {} known preset(s)",
                index,
                self.settings.behaviors.len()
            );
        }

        self.settings.override_behavior = true;
        self.settings.behavior_selected_index = index;
        self.notifications
            .publish(Notification::BehaviorChanged { index });
    }

    fn set_slow_motion(&mut self, on: bool) {
        let slow_scale = self.settings.slow_motion_time_scale;
        let gate = *self
            .time_gate
            .get_or_insert_with(|| TimeScaleGate::capture(&self.clock, slow_scale));

        gate.apply(&mut self.clock, on);
        self.slow_motion = on;
    }

    //--- Queries ----------------------------------------------------------

    /// Settings in effect, including the selected behavior.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Simulation clock the host should apply to its engine.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Mutable clock, for hosts that seed engine timing before `awake`.
    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    /// `true` after the last slow-motion signal turned it on.
    pub fn is_slow_motion(&self) -> bool {
        self.slow_motion
    }

    /// Roster of live vehicles.
    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    /// Per-vehicle recorders.
    pub fn recorders(&self) -> &RecorderSupervisor {
        &self.recorders
    }

    /// Scene-wide record mode, mirrored from the first recorder.
    pub fn record_mode(&self) -> RecordMode {
        self.record_mode
    }

    /// Player vehicle, camera, dashboard and character.
    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    /// The player's vehicle, if one is registered and not destroyed.
    pub fn active_vehicle(&self) -> Option<VehicleId> {
        self.session.vehicle()
    }

    /// Terrain snapshots, ready once the capture finished.
    pub fn terrains(&self) -> &TerrainCache {
        &self.terrains
    }

    /// Open transport freeze windows.
    pub fn freezes(&self) -> &TransportFreezes {
        &self.freezes
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
