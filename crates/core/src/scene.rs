//! Reproducible specification for one animated background capture.
//!
//! A [`Scene`] bundles everything needed to recreate a run exactly: surface
//! dimensions, PRNG seed, frame count, and the field configuration. Two
//! identical `Scene` values fed to the same binary produce bit-identical
//! frames.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::Viewport;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a background animation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub frames: usize,
    pub config: FieldConfig,
}

impl Scene {
    /// Creates a scene with zero frames and the default config.
    pub fn new(width: usize, height: usize, seed: u64) -> Scene {
        Scene {
            width,
            height,
            seed,
            frames: 0,
            config: FieldConfig::default(),
        }
    }

    /// Validates dimensions and the embedded config.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        self.config.validate()
    }

    /// The animation bounds this scene describes.
    pub fn viewport(&self) -> Result<Viewport, FieldError> {
        Viewport::new(self.width as f64, self.height as f64)
    }
}
