//! Per-tick vehicle kinematics
//!
//! Scalar speed along a heading, no mass or torque. One call is one fixed
//! logical step: speed, then heading, then a forward-Euler position step.
//! There is no sub-stepping, so a fast vehicle can skip over a thin wall in
//! a single tick.

use super::input::InputState;
use super::state::VehicleState;
use crate::clamp;
use crate::config::PhysicsConfig;
use crate::consts::{BASE_TURN_FACTOR, FINISHED_FRICTION_SCALE};

/// Speed from held controls. Accelerate beats brake; neither means friction.
pub fn update_speed(speed: f32, input: &InputState, physics: &PhysicsConfig) -> f32 {
    let next = if input.accelerate {
        speed + physics.acceleration
    } else if input.brake {
        speed - physics.brake_power
    } else {
        speed - physics.friction
    };
    clamp(next, 0.0, physics.max_speed)
}

/// Speed decay after the finish: half friction, input ignored
///
/// Only the speed changes; a finished vehicle is neither steered nor moved.
pub fn coast_speed(speed: f32, physics: &PhysicsConfig) -> f32 {
    clamp(
        speed - physics.friction * FINISHED_FRICTION_SCALE,
        0.0,
        physics.max_speed,
    )
}

/// Steering authority grows with speed: 0.5x at rest, 1.5x at max speed
#[inline]
pub fn turn_step(speed: f32, physics: &PhysicsConfig) -> f32 {
    let turn_intensity = speed / physics.max_speed;
    physics.turn_rate * (BASE_TURN_FACTOR + turn_intensity)
}

/// New heading; left and right both apply and cancel when held together
pub fn update_heading(angle: f32, speed: f32, input: &InputState, physics: &PhysicsConfig) -> f32 {
    let step = turn_step(speed, physics);
    let mut angle = angle;
    if input.left {
        angle -= step;
    }
    if input.right {
        angle += step;
    }
    angle
}

/// Advance a racing vehicle one tick
pub fn step(vehicle: &mut VehicleState, input: &InputState, physics: &PhysicsConfig) {
    vehicle.speed = update_speed(vehicle.speed, input, physics);
    vehicle.angle = update_heading(vehicle.angle, vehicle.speed, input, physics);
    vehicle.pos += vehicle.forward() * vehicle.speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Control;
    use glam::Vec2;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn held(control: Control) -> InputState {
        InputState::default().with(control)
    }

    #[test]
    fn test_accelerate_caps_at_max_speed() {
        let p = physics();
        let input = held(Control::Accelerate);
        assert!((update_speed(0.0, &input, &p) - 0.12).abs() < 1e-6);
        assert_eq!(update_speed(4.75, &input, &p), 4.8);
        assert_eq!(update_speed(4.8, &input, &p), 4.8);
    }

    #[test]
    fn test_brake_and_friction_floor_at_zero() {
        let p = physics();
        assert_eq!(update_speed(0.1, &held(Control::Brake), &p), 0.0);
        assert_eq!(update_speed(0.02, &InputState::default(), &p), 0.0);
        assert_eq!(update_speed(0.0, &InputState::default(), &p), 0.0);
        assert!((update_speed(1.0, &held(Control::Brake), &p) - 0.84).abs() < 1e-6);
    }

    #[test]
    fn test_accelerate_beats_brake() {
        let p = physics();
        let both = held(Control::Accelerate).with(Control::Brake);
        assert_eq!(
            update_speed(2.0, &both, &p),
            update_speed(2.0, &held(Control::Accelerate), &p)
        );
    }

    #[test]
    fn test_coast_uses_half_friction() {
        let p = physics();
        assert!((coast_speed(1.0, &p) - 0.98).abs() < 1e-6);
        assert_eq!(coast_speed(0.01, &p), 0.0);
    }

    #[test]
    fn test_turn_scales_with_speed() {
        let p = physics();
        assert!((turn_step(0.0, &p) - 0.02).abs() < 1e-7);
        assert!((turn_step(p.max_speed, &p) - 0.06).abs() < 1e-7);
    }

    #[test]
    fn test_left_right_cancel() {
        let p = physics();
        let both = held(Control::Left).with(Control::Right);
        assert_eq!(update_heading(1.0, 2.0, &both, &p), 1.0);
    }

    #[test]
    fn test_step_moves_along_heading() {
        let p = physics();
        let mut v = VehicleState {
            pos: Vec2::new(100.0, 100.0),
            angle: 0.0,
            speed: 1.0,
        };
        step(&mut v, &held(Control::Accelerate), &p);
        assert!((v.speed - 1.12).abs() < 1e-6);
        assert!((v.pos.x - 101.12).abs() < 1e-4);
        assert!((v.pos.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_coast_ignores_throttle() {
        let p = physics();
        let mut speed = 2.0;
        for _ in 0..10 {
            speed = coast_speed(speed, &p);
        }
        assert!((speed - 1.8).abs() < 1e-5);
    }
}
