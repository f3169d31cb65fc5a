#![deny(unsafe_code)]
//! Rendering for driftfield: the `Surface` drawing seam, a CPU `Pixmap`
//! rasterizer, whole-frame composition, and PNG snapshots.
//!
//! The simulation core never draws; it hands a `Field` to [`draw_frame`],
//! which talks to any [`Surface`] implementation. The built-in surface is a
//! software RGBA8 [`Pixmap`]; `snapshot` (feature `png`, default on) writes
//! it to disk via the `image` crate.

pub mod frame;
pub mod pixmap;
pub mod surface;

#[cfg(feature = "png")]
pub mod snapshot;

pub use frame::draw_frame;
pub use pixmap::Pixmap;
pub use surface::Surface;
