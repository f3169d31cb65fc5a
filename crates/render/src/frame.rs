//! Whole-frame composition: field state in, surface calls out.

use crate::surface::Surface;
use driftfield_core::{links_for, Field, FieldConfig, FieldError};

/// Draws one frame of the background onto `surface`.
///
/// Order: clear, then connecting lines (when enabled) so they sit behind the
/// dots, then every point, then present. Lines use the primary color with
/// alpha scaled by each link's distance-faded opacity.
///
/// Any surface failure aborts the frame and propagates; the caller treats it
/// as "skip this frame" — the animation degrades to a frozen background, it
/// never crashes the host.
pub fn draw_frame<S: Surface>(
    field: &Field,
    config: &FieldConfig,
    surface: &mut S,
) -> Result<(), FieldError> {
    surface.clear()?;
    if config.connect_lines {
        for link in links_for(field, config.link_distance, config.link_opacity) {
            let color = config.color.with_alpha(config.color.a * link.opacity);
            surface.draw_line(link.a.position(), link.b.position(), color)?;
        }
    }
    for point in field.points() {
        surface.draw_point(point.position(), point.radius(), point.color())?;
    }
    surface.present()
}
