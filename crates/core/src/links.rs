//! Proximity linker: decorative lines between nearby points.
//!
//! Every unordered pair closer than the cutoff yields a link whose opacity
//! fades linearly with distance. The scan is O(n²) per frame on purpose:
//! fields are small (≤ ~200 points) and the effect is cosmetic, so a spatial
//! index would be complexity without payoff.

use crate::field::Field;
use crate::point::Point;

/// A connecting line between two nearby points.
#[derive(Debug, Clone, Copy)]
pub struct Link<'a> {
    pub a: &'a Point,
    pub b: &'a Point,
    /// Already faded for distance; multiply into the line color's alpha.
    pub opacity: f64,
}

/// Opacity of a link at `distance`: `base` at 0, fading linearly to exactly
/// 0 at `max_distance`. Out-of-range and degenerate inputs yield 0.
pub fn link_opacity(distance: f64, max_distance: f64, base: f64) -> f64 {
    if !(max_distance > 0.0) || !distance.is_finite() || distance < 0.0 {
        return 0.0;
    }
    (base * (1.0 - distance / max_distance)).max(0.0)
}

/// Lazily yields a [`Link`] for every unordered pair of points whose
/// Euclidean distance is strictly below `max_distance`.
///
/// `base_opacity` is the link opacity at distance zero. A non-positive or
/// non-finite `max_distance` yields no links.
pub fn links_for(field: &Field, max_distance: f64, base_opacity: f64) -> Links<'_> {
    let points = field.points();
    let i = if max_distance > 0.0 && max_distance.is_finite() {
        0
    } else {
        points.len()
    };
    Links {
        points,
        max_distance,
        base_opacity,
        i,
        j: 1,
    }
}

/// Lazy iterator over in-range point pairs. See [`links_for`].
#[derive(Debug, Clone)]
pub struct Links<'a> {
    points: &'a [Point],
    max_distance: f64,
    base_opacity: f64,
    i: usize,
    j: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Link<'a>> {
        let points = self.points;
        while self.i < points.len() {
            while self.j < points.len() {
                let (a, b) = (&points[self.i], &points[self.j]);
                self.j += 1;
                let distance = a.position().distance(b.position());
                if distance < self.max_distance {
                    return Some(Link {
                        a,
                        b,
                        opacity: link_opacity(distance, self.max_distance, self.base_opacity),
                    });
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}
