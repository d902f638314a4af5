//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use ring_racer::consts::{BOUNDARY_MARGIN, OFF_TRACK_DAMPING};
use ring_racer::sim::{
    InputState, Simulation, TrackGeometry, VehicleState, collision, kinematics, tick,
};
use ring_racer::PhysicsConfig;

fn any_input() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(accelerate, brake, left, right)| InputState {
            accelerate,
            brake,
            left,
            right,
        },
    )
}

proptest! {
    #[test]
    fn speed_stays_within_bounds(inputs in prop::collection::vec(any_input(), 1..300)) {
        let mut sim = Simulation::with_defaults();
        let max_speed = sim.physics().max_speed;
        for input in inputs {
            sim.apply_input(input);
            tick(&mut sim);
            let speed = sim.vehicle().speed;
            prop_assert!((0.0..=max_speed).contains(&speed), "speed {} out of range", speed);
        }
    }

    #[test]
    fn accelerate_wins_over_brake(speed in 0.0f32..=4.8) {
        let physics = PhysicsConfig::default();
        let both = InputState { accelerate: true, brake: true, ..Default::default() };
        let accel = InputState { accelerate: true, ..Default::default() };
        prop_assert_eq!(
            kinematics::update_speed(speed, &both, &physics),
            kinematics::update_speed(speed, &accel, &physics)
        );
    }

    #[test]
    fn steering_is_symmetric(speed in 0.0f32..=4.8, angle in -10.0f32..10.0) {
        let physics = PhysicsConfig::default();
        let start = VehicleState { pos: Vec2::new(180.0, 530.0), angle, speed };

        let mut left = start;
        kinematics::step(&mut left, &InputState { left: true, ..Default::default() }, &physics);
        let mut right = start;
        kinematics::step(&mut right, &InputState { right: true, ..Default::default() }, &physics);

        let dl = left.angle - angle;
        let dr = right.angle - angle;
        prop_assert!(dl < 0.0 && dr > 0.0);
        prop_assert!((dl.abs() - dr.abs()).abs() < 1e-5);
    }

    #[test]
    fn off_track_is_damped_and_clamped(
        x in -200.0f32..600.0,
        y in -200.0f32..800.0,
        speed in 0.0f32..=4.8,
    ) {
        let track = TrackGeometry::default();
        let pos = Vec2::new(x, y);
        prop_assume!(!track.is_on_track(pos));

        let mut vehicle = VehicleState { pos, angle: 0.0, speed };
        let outcome = collision::resolve(&mut vehicle, &track);

        prop_assert!(!outcome.on_track);
        prop_assert!((vehicle.speed - speed * OFF_TRACK_DAMPING).abs() < 1e-5);
        let outer = track.outer;
        prop_assert!(vehicle.pos.x >= outer.x + BOUNDARY_MARGIN);
        prop_assert!(vehicle.pos.x <= outer.right() - BOUNDARY_MARGIN);
        prop_assert!(vehicle.pos.y >= outer.y + BOUNDARY_MARGIN);
        prop_assert!(vehicle.pos.y <= outer.bottom() - BOUNDARY_MARGIN);
    }

    #[test]
    fn laps_never_increase_while_finished(inputs in prop::collection::vec(any_input(), 1..120)) {
        let mut sim = Simulation::with_defaults();
        sim.vehicle_mut().pos = Vec2::new(180.0, 60.0);
        tick(&mut sim);
        prop_assert!(sim.race().finished());
        for input in inputs {
            sim.apply_input(input);
            tick(&mut sim);
            prop_assert_eq!(sim.race().laps, 1);
            prop_assert!(sim.race().finished());
        }
    }
}
