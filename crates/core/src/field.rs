//! The particle store: an ordered collection of points animating over a viewport.
//!
//! A `Field` owns its points and the bounds they bounce inside. The count is
//! fixed at construction and initialization is fully deterministic from the
//! seed, so two fields built from the same inputs animate identically.

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::point::Point;
use crate::prng::Xorshift64;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Per-axis velocity magnitude at speed 1.0, in px/frame.
const VELOCITY_SPREAD: f64 = 1.5;
/// Smallest point radius in px.
const RADIUS_MIN: f64 = 1.0;
/// Largest point radius in px.
const RADIUS_MAX: f64 = 3.0;
/// Lower bound of the randomized per-point alpha band.
const ALPHA_MIN: f64 = 0.25;
/// Upper bound of the randomized per-point alpha band.
const ALPHA_MAX: f64 = 0.6;

/// Animation bounds in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, requiring both dimensions to be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Viewport, FieldError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(FieldError::InvalidDimensions);
        }
        Ok(Viewport { width, height })
    }
}

/// The full set of animated decorative points for one background instance.
#[derive(Debug, Clone)]
pub struct Field {
    points: Vec<Point>,
    viewport: Viewport,
}

impl Field {
    /// Initializes a field of `config.density` points.
    ///
    /// Positions are uniform over the viewport, velocities uniform in
    /// [-1.5, 1.5] px/frame per axis scaled by `config.speed`, radii uniform
    /// in [1, 3] px, and each point's color is a random mix of the two
    /// configured colors with a randomized low alpha. A density of 0 yields
    /// an empty field. Deterministic for a given `seed`.
    pub fn new(config: &FieldConfig, viewport: Viewport, seed: u64) -> Field {
        let mut rng = Xorshift64::new(seed);
        let points = (0..config.density)
            .map(|_| {
                let position = DVec2::new(
                    rng.next_range(0.0, viewport.width),
                    rng.next_range(0.0, viewport.height),
                );
                let velocity = DVec2::new(
                    rng.next_symmetric(VELOCITY_SPREAD),
                    rng.next_symmetric(VELOCITY_SPREAD),
                ) * config.speed;
                let radius = rng.next_range(RADIUS_MIN, RADIUS_MAX);
                let color = Rgba::lerp(config.color, config.secondary_color, rng.next_unit())
                    .with_alpha(rng.next_range(ALPHA_MIN, ALPHA_MAX));
                Point::new(position, velocity, radius, color)
            })
            .collect();
        Field { points, viewport }
    }

    /// Builds a field from pre-made points, for hosts that lay points out
    /// themselves. Positions outside the viewport are clamped inside.
    pub fn from_points(mut points: Vec<Point>, viewport: Viewport) -> Field {
        for p in &mut points {
            p.position.x = p.position.x.clamp(0.0, viewport.width);
            p.position.y = p.position.y.clamp(0.0, viewport.height);
        }
        Field { points, viewport }
    }

    /// Read-only access to the points, in creation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The bounds the points animate inside.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of points in the field.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the field holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Advances the field by one simulation tick. See [`crate::stepper::step`].
    pub fn step(&mut self) {
        crate::stepper::step(self);
    }

    /// Replaces the viewport, rescaling every position proportionally so the
    /// in-bounds invariant holds immediately.
    ///
    /// Call between frames: the stepper reads whichever bounds are current
    /// when its tick starts.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let scale_x = viewport.width / self.viewport.width;
        let scale_y = viewport.height / self.viewport.height;
        for p in &mut self.points {
            // Clamp absorbs the last-ulp rounding of the rescale.
            p.position.x = (p.position.x * scale_x).clamp(0.0, viewport.width);
            p.position.y = (p.position.y * scale_y).clamp(0.0, viewport.height);
        }
        self.viewport = viewport;
    }

    /// Mutable view for the stepper: points plus the bounds they bounce in.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Point], Viewport) {
        (&mut self.points, self.viewport)
    }
}
