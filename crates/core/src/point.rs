//! A single animated particle.

use crate::color::Rgba;
use glam::DVec2;

/// A single animated particle: position, velocity, size, color.
///
/// Radius and color are fixed at creation; position and velocity change only
/// through the stepper. Units are pixels and pixels-per-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    radius: f64,
    color: Rgba,
}

impl Point {
    /// Creates a point. `radius` is expected to be positive.
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, color: Rgba) -> Point {
        Point {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Current position in pixel space.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity in pixels per frame.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Radius in pixels. Never changes after creation.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Color. Never changes after creation.
    pub fn color(&self) -> Rgba {
        self.color
    }
}
