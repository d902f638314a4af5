//! Track-boundary collision
//!
//! No bounce and no normal: leaving the ring costs speed and the position
//! is clamped back inside the outer boundary's inset band.

use glam::Vec2;

use super::state::VehicleState;
use super::track::TrackGeometry;
use crate::clamp;
use crate::consts::{BOUNDARY_MARGIN, OFF_TRACK_DAMPING};

/// Result of resolving one tick's position against the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    /// Whether the post-kinematics position was on the ring
    pub on_track: bool,
    /// Position before clamping
    pub raw_pos: Vec2,
}

/// Clamp a point into the outer rectangle inset by [`BOUNDARY_MARGIN`]
pub fn clamp_to_outer(pos: Vec2, track: &TrackGeometry) -> Vec2 {
    let outer = &track.outer;
    Vec2::new(
        clamp(
            pos.x,
            outer.x + BOUNDARY_MARGIN,
            outer.right() - BOUNDARY_MARGIN,
        ),
        clamp(
            pos.y,
            outer.y + BOUNDARY_MARGIN,
            outer.bottom() - BOUNDARY_MARGIN,
        ),
    )
}

/// Damp and clamp the vehicle if it ended the tick off the ring
///
/// The clamp only knows the outer bounds. A vehicle sitting in the inner
/// hole stays there (still damped every tick) until it drives back out.
pub fn resolve(vehicle: &mut VehicleState, track: &TrackGeometry) -> CollisionOutcome {
    let raw_pos = vehicle.pos;
    let on_track = track.is_on_track(raw_pos);

    if !on_track {
        vehicle.speed *= OFF_TRACK_DAMPING;
        vehicle.pos = clamp_to_outer(raw_pos, track);
    }

    CollisionOutcome { on_track, raw_pos }
}
