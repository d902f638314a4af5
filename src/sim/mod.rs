//! Deterministic simulation module
//!
//! All driving logic lives here. This module must stay pure:
//! - One call to `tick` is one logical step, no wall-clock time
//! - Input is read as a snapshot at the start of a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod kinematics;
pub mod lap;
pub mod script;
pub mod state;
pub mod stepper;
pub mod tick;
pub mod track;

pub use collision::{CollisionOutcome, resolve};
pub use input::{Control, InputState};
pub use script::{ScriptError, parse_script};
pub use state::{RacePhase, RaceState, SimEvent, Simulation, VehicleState};
pub use stepper::FixedStepper;
pub use tick::tick;
pub use track::{Rect, TrackGeometry};
