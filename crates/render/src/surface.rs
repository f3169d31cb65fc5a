//! The drawing seam between the simulation and whatever actually paints.

use driftfield_core::{FieldError, Rgba, Viewport};
use glam::DVec2;

/// Black-box drawing target for one animated background instance.
///
/// The frame composer only needs these five operations. Every drawing method
/// is fallible: a missing or torn-down target reports
/// [`FieldError::Surface`], and the caller treats the whole frame as skipped
/// rather than crashing — the background simply freezes.
pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> Viewport;

    /// Erases the whole surface to its background.
    fn clear(&mut self) -> Result<(), FieldError>;

    /// Draws a filled circle of `radius` px centered at `center`.
    fn draw_point(&mut self, center: DVec2, radius: f64, color: Rgba) -> Result<(), FieldError>;

    /// Draws a thin line segment from `from` to `to`.
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba) -> Result<(), FieldError>;

    /// Commits the finished frame to the viewer.
    fn present(&mut self) -> Result<(), FieldError>;
}
