//! 2D coordinate helpers for event positions.
//!
//! Event positions arrive in viewport pixels; camera primitives take
//! normalized coordinates (0..1 across the viewport). This module provides
//! the minimal point/vector types and the centralized conversion used by the
//! state machine, so the formulas are not duplicated across state handlers.

use serde::{Deserialize, Serialize};

/// A position in viewport pixels (origin bottom-left, like the host viewer).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

/// A 2D displacement, in whatever unit its producer uses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `other` to `self`.
    #[inline]
    pub fn delta_from(self, other: Point2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Convert a pixel position to normalized viewport coordinates.
    #[inline]
    pub fn normalized(self, viewport: (f32, f32)) -> Point2 {
        let (w, h) = viewport;
        Point2::new(
            if w > 0.0 { self.x / w } else { 0.0 },
            if h > 0.0 { self.y / h } else { 0.0 },
        )
    }
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Scale a pixel delta down to normalized viewport units.
    #[inline]
    pub fn normalized(self, viewport: (f32, f32)) -> Vec2 {
        let (w, h) = viewport;
        Vec2::new(
            if w > 0.0 { self.x / w } else { 0.0 },
            if h > 0.0 { self.y / h } else { 0.0 },
        )
    }
}

impl std::ops::Sub for Point2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Point2) -> Vec2 {
        self.delta_from(rhs)
    }
}
