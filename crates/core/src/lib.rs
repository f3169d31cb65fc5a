#![deny(unsafe_code)]
//! Core types for the driftfield decorative particle-field animation.
//!
//! Provides the `Field`/`Point` data model, the bounce stepper, the proximity
//! linker, the `FrameDriver` pacing state machine, the `FieldConfig` options
//! surface with named presets, the `Rgba` color type, the `Xorshift64` PRNG,
//! and the `DragState` pointer-interaction struct.

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod interaction;
pub mod links;
pub mod params;
pub mod point;
pub mod prng;
pub mod scene;
pub mod stepper;

pub use color::Rgba;
pub use config::FieldConfig;
pub use driver::{Clock, DriverState, FrameDriver, MonotonicClock};
pub use error::FieldError;
pub use field::{Field, Viewport};
pub use interaction::DragState;
pub use links::{link_opacity, links_for, Link};
pub use point::Point;
pub use prng::Xorshift64;
pub use scene::Scene;
