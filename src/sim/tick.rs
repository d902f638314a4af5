//! One simulation tick
//!
//! Snapshot input, move the vehicle, resolve the track boundary, then check
//! the finish line. Once finished, the vehicle only sheds speed where it
//! stopped until the next reset. The tick has no notion of wall-clock time; see
//! [`super::stepper`] for a fixed-timestep wrapper.

use super::state::{SimEvent, Simulation};
use super::{collision, kinematics, lap};

/// Advance the simulation by one logical step
pub fn tick(sim: &mut Simulation) {
    // Input may change between ticks but never during one
    let input = sim.input;
    sim.time_ticks += 1;

    if sim.race.finished() {
        sim.vehicle.speed = kinematics::coast_speed(sim.vehicle.speed, &sim.config.physics);
        return;
    }

    kinematics::step(&mut sim.vehicle, &input, &sim.config.physics);

    let outcome = collision::resolve(&mut sim.vehicle, &sim.config.track);
    if outcome.on_track != sim.on_track {
        if outcome.on_track {
            log::debug!("Back on track at tick {}", sim.time_ticks);
            sim.push_event(SimEvent::ReturnedToTrack);
        } else {
            log::debug!("Left track at {:?} (tick {})", outcome.raw_pos, sim.time_ticks);
            sim.push_event(SimEvent::LeftTrack {
                pos: outcome.raw_pos,
            });
        }
        sim.on_track = outcome.on_track;
    }

    lap::check_finish(sim);
}
