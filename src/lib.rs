//! Ring Racer - top-down driving around a rectangular ring track
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, track collision, lap state)
//! - `config`: Tunable physics constants and track layout
//! - `status`: Read-only status view for HUDs and renderers
//! - `platform`: Browser bindings for the simulation handle

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;
pub mod status;

pub use config::{PhysicsConfig, SimConfig};
pub use error::ConfigError;
pub use sim::{Control, InputState, Simulation, tick};
pub use status::StatusSnapshot;

/// Simulation constants that are not part of the tunable configuration
pub mod consts {
    /// Speed multiplier applied when the vehicle is off the track
    pub const OFF_TRACK_DAMPING: f32 = 0.65;
    /// Inset from the outer boundary used when clamping an off-track vehicle
    pub const BOUNDARY_MARGIN: f32 = 10.0;
    /// Fraction of normal friction applied while coasting after the finish
    pub const FINISHED_FRICTION_SCALE: f32 = 0.5;
    /// Baseline steering authority at rest (added to turn intensity)
    pub const BASE_TURN_FACTOR: f32 = 0.5;
    /// Speed units to km/h for status display
    pub const SPEED_TO_KMH: f32 = 18.0;

    /// Fixed logical step assumed by the frame stepper (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest host frame the stepper will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Undrained events kept per simulation; older ones are dropped first
    pub const MAX_PENDING_EVENTS: usize = 64;

    /// Status text shown after crossing the finish line
    pub const FINISH_MESSAGE: &str = "Finish line! Tap reset to drive again.";
}

/// Clamp `value` into `[min, max]`
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
