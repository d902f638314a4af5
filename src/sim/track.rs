//! Track geometry: axis-aligned rectangles forming a ring
//!
//! The drivable surface is the outer rectangle minus the inner rectangle.
//! All rectangles are closed regions, so touching an edge counts as inside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed axis-aligned rectangle `[x, x + width] × [y, y + height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Point-in-rectangle test, inclusive on all four edges
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.contains(p.x, p.y)
    }

    /// True if `other` lies entirely within this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Overlap of two closed rectangles; edge contact yields a zero-extent rect
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        if min.x <= max.x && min.y <= max.y {
            Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
        } else {
            None
        }
    }

    /// Center point (used for diagnostics)
    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Static track layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackGeometry {
    /// Outer boundary of the ring
    pub outer: Rect,
    /// Hole in the middle of the ring
    pub inner: Rect,
    /// Crossing this rectangle ends the race
    pub finish: Rect,
    /// Ordered checkpoints. Advisory only: laps are never gated on them.
    pub checkpoints: Vec<Rect>,
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            outer: Rect::new(20.0, 20.0, 320.0, 560.0),
            inner: Rect::new(85.0, 120.0, 190.0, 360.0),
            finish: Rect::new(140.0, 50.0, 80.0, 16.0),
            checkpoints: vec![
                Rect::new(70.0, 320.0, 40.0, 80.0),
                Rect::new(250.0, 220.0, 40.0, 80.0),
            ],
        }
    }
}

impl TrackGeometry {
    /// Inside the outer boundary and outside the inner one
    #[inline]
    pub fn is_on_track(&self, pos: Vec2) -> bool {
        self.outer.contains_point(pos) && !self.inner.contains_point(pos)
    }

    #[inline]
    pub fn is_at_finish(&self, pos: Vec2) -> bool {
        self.finish.contains_point(pos)
    }

    /// Index of the first checkpoint containing `pos`, if any
    pub fn checkpoint_at(&self, pos: Vec2) -> Option<usize> {
        self.checkpoints.iter().position(|c| c.contains_point(pos))
    }

    /// True if at least one point of `rect` is on track
    ///
    /// The inner rect is closed, so an overlap wholly covered by it has no
    /// on-track point.
    pub fn overlaps_ring(&self, rect: &Rect) -> bool {
        rect.intersection(&self.outer)
            .is_some_and(|overlap| !self.inner.contains_rect(&overlap))
    }

    /// Check the layout can actually be raced on
    ///
    /// Rejects degenerate rectangles, an inner hole that escapes the outer
    /// boundary, and a finish rectangle with no drivable point in it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("outer", &self.outer),
            ("inner", &self.inner),
            ("finish", &self.finish),
        ];
        for (name, rect) in named {
            check_rect(name.to_string(), rect)?;
        }
        for (i, rect) in self.checkpoints.iter().enumerate() {
            check_rect(format!("checkpoint {i}"), rect)?;
        }

        if !self.outer.contains_rect(&self.inner) {
            return Err(ConfigError::InnerNotContained);
        }

        if !self.overlaps_ring(&self.finish) {
            return Err(ConfigError::FinishOffTrack);
        }

        for (i, checkpoint) in self.checkpoints.iter().enumerate() {
            if !self.overlaps_ring(checkpoint) {
                log::warn!("Checkpoint {} at {:?} does not touch the ring", i, checkpoint.center());
            }
        }

        Ok(())
    }
}

fn check_rect(name: String, rect: &Rect) -> Result<(), ConfigError> {
    if !rect.is_finite() {
        return Err(ConfigError::NonFinite { field: "track rectangle" });
    }
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(ConfigError::EmptyRect { name });
    }
    Ok(())
}
