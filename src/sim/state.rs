//! Simulation state and the context object that owns it
//!
//! Nothing here is global: every `Simulation` carries its own vehicle, race,
//! input snapshot and track, so several can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::{Control, InputState};
use super::track::TrackGeometry;
use crate::config::{PhysicsConfig, SimConfig};
use crate::consts::MAX_PENDING_EVENTS;
use crate::error::ConfigError;
use crate::status::StatusSnapshot;

/// Pose and scalar speed of the single vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position in track coordinates
    pub pos: Vec2,
    /// Heading in radians, accumulates without wraparound
    pub angle: f32,
    /// Always within `[0, max_speed]` after a tick
    pub speed: f32,
}

impl VehicleState {
    /// Stationary vehicle at the configured start pose
    pub fn at_start(physics: &PhysicsConfig) -> Self {
        Self {
            pos: Vec2::new(physics.start_x, physics.start_y),
            angle: physics.start_angle,
            speed: 0.0,
        }
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }
}

/// Race status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RacePhase {
    /// Normal driving; finish detection is armed
    #[default]
    Racing,
    /// Finish crossed; coasting to a stop until reset
    Finished,
}

/// Lap counter and race phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaceState {
    /// Finish crossings, cumulative across resets
    pub laps: u32,
    pub phase: RacePhase,
}

impl RaceState {
    #[inline]
    pub fn finished(&self) -> bool {
        self.phase == RacePhase::Finished
    }
}

/// Something observable that happened during a tick (or on reset)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// The vehicle moved off the ring and was damped
    LeftTrack { pos: Vec2 },
    /// The vehicle is back on the ring
    ReturnedToTrack,
    /// Finish rectangle entered while racing
    FinishReached { laps: u32 },
    /// Vehicle returned to the start pose
    Reset,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) vehicle: VehicleState,
    pub(crate) race: RaceState,
    /// Written by input collaborators between ticks
    pub(crate) input: InputState,
    /// Latest user-facing status message (empty when none pending)
    pub(crate) message: String,
    /// Whether the vehicle was on track at the end of the last tick
    pub(crate) on_track: bool,
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<SimEvent>,
}

impl Simulation {
    /// Build a simulation, rejecting configurations that can never be raced
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let vehicle = VehicleState::at_start(&config.physics);
        let on_track = config.track.is_on_track(vehicle.pos);
        log::info!(
            "Simulation ready: start {:?}, max speed {}",
            vehicle.pos,
            config.physics.max_speed
        );

        Ok(Self {
            config,
            vehicle,
            race: RaceState::default(),
            input: InputState::default(),
            message: String::new(),
            on_track,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Simulation on the default track with default tuning
    pub fn with_defaults() -> Self {
        Self {
            vehicle: VehicleState::at_start(&PhysicsConfig::default()),
            config: SimConfig::default(),
            race: RaceState::default(),
            input: InputState::default(),
            message: String::new(),
            on_track: true,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.config.physics
    }

    pub fn track(&self) -> &TrackGeometry {
        &self.config.track
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    /// Direct pose access for hosts that teleport the vehicle (and for tests)
    pub fn vehicle_mut(&mut self) -> &mut VehicleState {
        &mut self.vehicle
    }

    pub fn race(&self) -> &RaceState {
        &self.race
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_on_track(&self) -> bool {
        self.on_track
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Hold or release a single control
    pub fn set_control(&mut self, control: Control, held: bool) {
        self.input.set(control, held);
    }

    /// Replace the whole input snapshot
    pub fn apply_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Events recorded since the last call
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Queue an event; hosts that never drain only keep the newest few
    pub(crate) fn push_event(&mut self, event: SimEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Checkpoint currently under the vehicle (advisory, never gates laps)
    pub fn current_checkpoint(&self) -> Option<usize> {
        self.config.track.checkpoint_at(self.vehicle.pos)
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self)
    }

    /// Tick once per input snapshot; returns the number of ticks run
    pub fn run_script(&mut self, script: &[InputState]) -> usize {
        for input in script {
            self.apply_input(*input);
            super::tick::tick(self);
        }
        script.len()
    }
}
