//! Finish-line state machine
//!
//! `Racing -> Finished` on entering the finish rectangle, `Finished -> Racing`
//! only on an explicit reset. The finish check is skipped while finished, so
//! a single visit counts one lap no matter how long the vehicle lingers.

use super::state::{RacePhase, SimEvent, Simulation, VehicleState};
use crate::consts::FINISH_MESSAGE;

/// Test the current position against the finish rectangle
///
/// Returns true if this call registered a crossing.
pub fn check_finish(sim: &mut Simulation) -> bool {
    if sim.race.finished() {
        return false;
    }
    if !sim.config.track.is_at_finish(sim.vehicle.pos) {
        return false;
    }

    sim.race.phase = RacePhase::Finished;
    sim.race.laps += 1;
    sim.message = FINISH_MESSAGE.to_string();
    sim.push_event(SimEvent::FinishReached {
        laps: sim.race.laps,
    });
    log::info!(
        "Finish reached at tick {} (laps: {})",
        sim.time_ticks,
        sim.race.laps
    );
    true
}

/// Back to the start pose and racing; `laps` is kept
pub fn reset(sim: &mut Simulation) {
    sim.vehicle = VehicleState::at_start(&sim.config.physics);
    sim.race.phase = RacePhase::Racing;
    sim.message.clear();
    sim.on_track = sim.config.track.is_on_track(sim.vehicle.pos);
    sim.push_event(SimEvent::Reset);
    log::info!("Vehicle reset (laps: {})", sim.race.laps);
}

impl Simulation {
    /// External reset command
    pub fn reset(&mut self) {
        reset(self);
    }
}
