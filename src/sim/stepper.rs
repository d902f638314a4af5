//! Fixed-timestep driver
//!
//! The core tick is one logical step with no timing. Hosts that want
//! frame-rate independent physics feed real frame times in here instead of
//! calling `tick` once per animation frame.

use super::state::Simulation;
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates host frame time and spends it in whole ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    /// Seconds represented by one tick
    pub step_dt: f32,
    /// Cap on ticks per frame
    pub max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepper {
    pub fn new(step_dt: f32, max_substeps: u32) -> Self {
        Self {
            step_dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Unspent time carried to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Run as many ticks as `frame_dt` pays for; returns the count
    pub fn advance(&mut self, sim: &mut Simulation, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() {
            return 0;
        }
        // Long stalls (tab in background) don't turn into a burst of ticks
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step_dt && substeps < self.max_substeps {
            tick(sim);
            self.accumulator -= self.step_dt;
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.step_dt {
            log::debug!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
