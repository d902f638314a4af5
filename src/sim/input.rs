//! Player controls
//!
//! Input sources (buttons, keyboard, touch) only ever write held/not-held
//! flags here. The simulation reads one snapshot per tick.

use serde::{Deserialize, Serialize};

/// A named control the player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Accelerate,
    Brake,
    Left,
    Right,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Accelerate,
        Control::Brake,
        Control::Left,
        Control::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Control::Accelerate => "accelerate",
            Control::Brake => "brake",
            Control::Left => "left",
            Control::Right => "right",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "accelerate" => Some(Control::Accelerate),
            "brake" => Some(Control::Brake),
            "left" => Some(Control::Left),
            "right" => Some(Control::Right),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.code` to a control (arrows and WASD)
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Control::Accelerate),
            "ArrowDown" | "KeyS" => Some(Control::Brake),
            "ArrowLeft" | "KeyA" => Some(Control::Left),
            "ArrowRight" | "KeyD" => Some(Control::Right),
            _ => None,
        }
    }
}

/// Held state of every control
///
/// No mutual exclusion: accelerate and brake may both be held, and so may
/// left and right. The kinematics model resolves the overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    pub accelerate: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Last write wins
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::Accelerate => self.accelerate = held,
            Control::Brake => self.brake = held,
            Control::Left => self.left = held,
            Control::Right => self.right = held,
        }
    }

    pub fn get(&self, control: Control) -> bool {
        match control {
            Control::Accelerate => self.accelerate,
            Control::Brake => self.brake,
            Control::Left => self.left,
            Control::Right => self.right,
        }
    }

    /// Builder-style helper for tests and scripts
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn is_idle(&self) -> bool {
        Control::ALL.iter().all(|&control| !self.get(control))
    }

    /// Release everything (e.g. when the host window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
