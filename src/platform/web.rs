//! JS-facing simulation handle

use wasm_bindgen::prelude::*;

use crate::config::SimConfig;
use crate::sim::{Control, FixedStepper, Simulation, tick};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// One simulation owned by the page
#[wasm_bindgen]
pub struct WebSimulation {
    sim: Simulation,
    stepper: FixedStepper,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Default track and tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSimulation {
        Self {
            sim: Simulation::with_defaults(),
            stepper: FixedStepper::default(),
        }
    }

    /// Build from a JSON config; rejects tracks that can't be raced
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<WebSimulation, JsValue> {
        let config = SimConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let sim = Simulation::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            sim,
            stepper: FixedStepper::default(),
        })
    }

    /// Hold/release a control by name (`accelerate`, `brake`, `left`, `right`)
    #[wasm_bindgen(js_name = setControl)]
    pub fn set_control(&mut self, name: &str, held: bool) -> bool {
        match Control::from_name(name) {
            Some(control) => {
                self.sim.set_control(control, held);
                true
            }
            None => false,
        }
    }

    /// Feed a `KeyboardEvent.code`; returns true if it mapped to a control
    #[wasm_bindgen(js_name = keyEvent)]
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.sim.set_control(control, pressed);
                true
            }
            None => false,
        }
    }

    /// Whether a named control is currently held; false for unknown names
    #[wasm_bindgen(js_name = isHeld)]
    pub fn is_held(&self, name: &str) -> bool {
        Control::from_name(name).is_some_and(|control| self.sim.input().get(control))
    }

    /// Release every control (window blur)
    #[wasm_bindgen(js_name = releaseAll)]
    pub fn release_all(&mut self) {
        self.sim.input_mut().clear();
    }

    /// One tick per animation frame
    pub fn tick(&mut self) {
        tick(&mut self.sim);
    }

    /// Fixed-timestep alternative to `tick`; `dt_ms` is the frame delta
    #[wasm_bindgen(js_name = advanceFrame)]
    pub fn advance_frame(&mut self, dt_ms: f64) -> u32 {
        self.stepper.advance(&mut self.sim, (dt_ms / 1000.0) as f32)
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.stepper.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f32 {
        self.sim.vehicle().speed
    }

    #[wasm_bindgen(getter)]
    pub fn laps(&self) -> u32 {
        self.sim.race().laps
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.sim.vehicle().pos.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.sim.vehicle().pos.y
    }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 {
        self.sim.vehicle().angle
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.sim.race().finished()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.sim.message().to_string()
    }

    #[wasm_bindgen(js_name = speedText)]
    pub fn speed_text(&self) -> String {
        self.sim.status().speed_text()
    }

    #[wasm_bindgen(js_name = lapsText)]
    pub fn laps_text(&self) -> String {
        self.sim.status().laps_text()
    }

    #[wasm_bindgen(js_name = positionText)]
    pub fn position_text(&self) -> String {
        self.sim.status().position_text()
    }

    /// Drain events since the last call as a JSON array; call once per frame
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> String {
        serde_json::to_string(&self.sim.take_events()).unwrap_or_default()
    }

    /// Track layout as JSON so the renderer draws what the simulation uses
    #[wasm_bindgen(js_name = trackJson)]
    pub fn track_json(&self) -> String {
        serde_json::to_string(self.sim.track()).unwrap_or_default()
    }
}

impl Default for WebSimulation {
    fn default() -> Self {
        Self::new()
    }
}
