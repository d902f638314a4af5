//! End-to-end driving scenarios on the default track

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use ring_racer::consts::{BOUNDARY_MARGIN, FINISH_MESSAGE, OFF_TRACK_DAMPING};
use ring_racer::sim::{Control, InputState, SimEvent, Simulation, parse_script, tick};
use ring_racer::{PhysicsConfig, SimConfig};

#[test]
fn test_first_tick_from_start() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    sim.set_control(Control::Accelerate, true);
    tick(&mut sim);

    let v = sim.vehicle();
    assert!((v.speed - 0.12).abs() < 1e-6);
    assert_eq!(v.angle, -FRAC_PI_2);
    assert!((v.pos.y - (520.0 - 0.12)).abs() < 1e-4);
    assert!((v.pos.x - 180.0).abs() < 1e-4);
}

#[test]
fn test_reset_restores_start_pose_and_keeps_laps() {
    let mut sim = Simulation::with_defaults();
    let script = parse_script("w*60, w+d*15, s*5, a*10").unwrap();
    sim.run_script(&script);
    sim.vehicle_mut().pos = Vec2::new(180.0, 58.0);
    tick(&mut sim);
    assert_eq!(sim.race().laps, 1);

    sim.reset();

    let v = sim.vehicle();
    assert_eq!(v.pos, Vec2::new(180.0, 520.0));
    assert_eq!(v.angle, -FRAC_PI_2);
    assert_eq!(v.speed, 0.0);
    assert!(!sim.race().finished());
    assert!(sim.message().is_empty());
    assert_eq!(sim.race().laps, 1);
}

#[test]
fn test_idle_decay_reaches_zero() {
    let mut sim = Simulation::with_defaults();
    // Bottom straight heading right: the roll-out (~286 units) ends before the wall
    *sim.vehicle_mut() = ring_racer::sim::VehicleState {
        pos: Vec2::new(40.0, 530.0),
        angle: 0.0,
        speed: 4.8,
    };

    let mut last = sim.vehicle().speed;
    for _ in 0..200 {
        tick(&mut sim);
        let speed = sim.vehicle().speed;
        assert!(speed <= last);
        assert!(speed >= 0.0);
        last = speed;
    }
    assert_eq!(sim.vehicle().speed, 0.0);
    assert!(sim.is_on_track());
}

#[test]
fn test_off_track_tick_damps_and_clamps() {
    let mut sim = Simulation::with_defaults();
    let physics = PhysicsConfig::default();
    *sim.vehicle_mut() = ring_racer::sim::VehicleState {
        pos: Vec2::new(338.0, 300.0),
        angle: 0.0,
        speed: 4.0,
    };
    tick(&mut sim);

    // Friction first, then the off-track penalty
    let expected = (4.0 - physics.friction) * OFF_TRACK_DAMPING;
    let v = sim.vehicle();
    assert!((v.speed - expected).abs() < 1e-5);
    let outer = sim.track().outer;
    assert!(v.pos.x >= outer.x + BOUNDARY_MARGIN && v.pos.x <= outer.right() - BOUNDARY_MARGIN);
    assert!(v.pos.y >= outer.y + BOUNDARY_MARGIN && v.pos.y <= outer.bottom() - BOUNDARY_MARGIN);
    assert!(matches!(
        sim.take_events().as_slice(),
        [SimEvent::LeftTrack { .. }]
    ));
}

#[test]
fn test_driving_into_the_finish() {
    let mut sim = Simulation::with_defaults();
    // Put the car on the top straight just below the line, pointing up
    sim.vehicle_mut().pos = Vec2::new(180.0, 75.0);
    sim.set_control(Control::Accelerate, true);

    let mut ticks = 0;
    while !sim.race().finished() && ticks < 100 {
        tick(&mut sim);
        ticks += 1;
    }
    assert!(sim.race().finished());
    assert_eq!(sim.race().laps, 1);
    assert_eq!(sim.message(), FINISH_MESSAGE);

    // Lingering on the line never adds laps
    for _ in 0..50 {
        tick(&mut sim);
    }
    assert_eq!(sim.race().laps, 1);

    sim.reset();
    sim.vehicle_mut().pos = Vec2::new(180.0, 75.0);
    let mut ticks = 0;
    while !sim.race().finished() && ticks < 100 {
        tick(&mut sim);
        ticks += 1;
    }
    assert_eq!(sim.race().laps, 2);
}

#[test]
fn test_checkpoints_do_not_gate_laps() {
    let mut sim = Simulation::with_defaults();
    assert_eq!(sim.current_checkpoint(), None);
    sim.vehicle_mut().pos = Vec2::new(180.0, 60.0);
    tick(&mut sim);
    assert_eq!(sim.race().laps, 1);
}

#[test]
fn test_independent_simulations() {
    let mut a = Simulation::with_defaults();
    let mut b = Simulation::with_defaults();
    a.apply_input(InputState::default().with(Control::Accelerate));
    for _ in 0..5 {
        tick(&mut a);
        tick(&mut b);
    }
    assert!(a.vehicle().speed > 0.0);
    assert_eq!(b.vehicle().speed, 0.0);
}

#[test]
fn test_replay_is_deterministic() {
    let script = parse_script("w*80, w+a*40, w*30, d*20, s*10, space*15").unwrap();
    let mut a = Simulation::with_defaults();
    let mut b = Simulation::with_defaults();
    assert_eq!(a.run_script(&script), script.len());
    b.run_script(&script);
    assert_eq!(a.vehicle(), b.vehicle());
    assert_eq!(a.race(), b.race());
}
