//! Read-only view of the simulation for HUDs and renderers
//!
//! The core never formats text itself; hosts pull a snapshot after each tick.

use serde::Serialize;

use crate::consts::SPEED_TO_KMH;
use crate::sim::Simulation;

/// Everything a status display needs, captured after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub tick: u64,
    pub speed: f32,
    pub speed_kmh: f32,
    pub laps: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub finished: bool,
    pub on_track: bool,
    /// Empty when no message is pending
    pub message: String,
}

impl StatusSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let vehicle = sim.vehicle();
        Self {
            tick: sim.time_ticks(),
            speed: vehicle.speed,
            speed_kmh: vehicle.speed * SPEED_TO_KMH,
            laps: sim.race().laps,
            x: vehicle.pos.x,
            y: vehicle.pos.y,
            angle: vehicle.angle,
            finished: sim.race().finished(),
            on_track: sim.is_on_track(),
            message: sim.message().to_string(),
        }
    }

    /// e.g. `"86 km/h"`
    pub fn speed_text(&self) -> String {
        format!("{:.0} km/h", self.speed_kmh)
    }

    /// e.g. `"180, 520"`
    pub fn position_text(&self) -> String {
        format!("{}, {}", self.x.round(), self.y.round())
    }

    pub fn laps_text(&self) -> String {
        self.laps.to_string()
    }

    /// One-line summary for logs and the headless runner
    pub fn summary(&self) -> String {
        let mut line = format!(
            "tick {:>5} | {:>8} | lap {} | pos {}",
            self.tick,
            self.speed_text(),
            self.laps_text(),
            self.position_text()
        );
        if !self.on_track {
            line.push_str(" | off track");
        }
        if !self.message.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.message);
        }
        line
    }
}
