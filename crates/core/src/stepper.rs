//! Advances a field by one simulation tick.
//!
//! Each tick adds velocity to position; any axis that leaves the viewport is
//! mirror-reflected back inside and that velocity component is negated. The
//! two axes are checked independently, so a corner overflow bounces both in
//! the same tick. No randomness: identical fields stay identical under
//! identical step sequences.

use crate::field::Field;

/// Advances every point by one tick, bouncing off the viewport edges.
pub fn step(field: &mut Field) {
    let (points, viewport) = field.parts_mut();
    for p in points {
        p.position += p.velocity;
        let (x, vx) = reflect_axis(p.position.x, p.velocity.x, viewport.width);
        let (y, vy) = reflect_axis(p.position.y, p.velocity.y, viewport.height);
        p.position.x = x;
        p.position.y = y;
        p.velocity.x = vx;
        p.velocity.y = vy;
    }
}

/// Elastic bounce on one axis: a coordinate past either edge is mirrored
/// back inside and the velocity sign flips. An overshoot larger than the
/// mirror span (a single frame crossing the whole viewport) is clamped to
/// the far edge so the in-bounds invariant holds unconditionally.
fn reflect_axis(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
    if pos < 0.0 {
        ((-pos).min(extent), -vel)
    } else if pos > extent {
        ((2.0 * extent - pos).max(0.0), -vel)
    } else {
        (pos, vel)
    }
}
