//! Configuration for one animated background instance.
//!
//! The same particle background tends to recur across page sections with
//! slightly different densities, palettes, and speeds. Those variants are
//! expressed here as data: one [`FieldConfig`] struct plus named presets,
//! rather than near-identical components per call site.

use crate::color::Rgba;
use crate::error::FieldError;
use crate::params::{param_bool, param_color, param_f64, param_opt_f64, param_usize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_DENSITY: usize = 100;
const DEFAULT_SPEED: f64 = 1.0;
const DEFAULT_LINK_DISTANCE: f64 = 120.0;
const DEFAULT_LINK_OPACITY: f64 = 0.35;

/// All available preset names.
const PRESET_NAMES: &[&str] = &["aurora", "banner", "constellation", "mist"];

/// Options for one particle-field background instance.
///
/// `speed` scales the per-frame velocity assigned at initialization.
/// `link_distance`/`link_opacity` only matter when `connect_lines` is on.
/// `target_fps` of `None` means "run at the host refresh rate".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of points in the field.
    pub density: usize,
    /// Velocity scale applied at initialization.
    pub speed: f64,
    /// Primary palette color; also used for connecting lines.
    pub color: Rgba,
    /// Secondary palette color; each point mixes the two.
    pub secondary_color: Rgba,
    /// Whether nearby points are joined by distance-faded lines.
    pub connect_lines: bool,
    /// Distance in px at which a link fades to nothing.
    pub link_distance: f64,
    /// Link opacity at distance zero.
    pub link_opacity: f64,
    /// Optional frame-rate throttle for the driver.
    pub target_fps: Option<f64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            speed: DEFAULT_SPEED,
            color: Rgba::from_u8(0x8b, 0x5c, 0xf6),
            secondary_color: Rgba::from_u8(0xec, 0x48, 0x99),
            connect_lines: false,
            link_distance: DEFAULT_LINK_DISTANCE,
            link_opacity: DEFAULT_LINK_OPACITY,
            target_fps: None,
        }
    }
}

impl FieldConfig {
    /// Constructs a config by preset name.
    ///
    /// Returns `FieldError::UnknownPreset` if the name is not recognized.
    pub fn preset(name: &str) -> Result<FieldConfig, FieldError> {
        match name {
            // Hero backdrop: sparse violet-to-pink drift.
            "aurora" => Ok(FieldConfig::default()),
            // Dense, faster banner strip behind headline text.
            "banner" => Ok(FieldConfig {
                density: 200,
                speed: 2.0,
                color: Rgba::from_u8(0x7c, 0x3a, 0xed),
                secondary_color: Rgba::from_u8(0x3b, 0x82, 0xf6),
                ..FieldConfig::default()
            }),
            // Slow blue web of connected points.
            "constellation" => Ok(FieldConfig {
                density: 80,
                speed: 0.6,
                color: Rgba::from_u8(0x60, 0xa5, 0xfa),
                secondary_color: Rgba::from_u8(0xa7, 0x8b, 0xfa),
                connect_lines: true,
                link_distance: 140.0,
                ..FieldConfig::default()
            }),
            // Barely-there gray haze, throttled to save battery.
            "mist" => Ok(FieldConfig {
                density: 30,
                speed: 0.3,
                color: Rgba::from_u8(0x94, 0xa3, 0xb8),
                secondary_color: Rgba::from_u8(0xe2, 0xe8, 0xf0),
                target_fps: Some(30.0),
                ..FieldConfig::default()
            }),
            _ => Err(FieldError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns a slice of all recognized preset names.
    pub fn preset_names() -> &'static [&'static str] {
        PRESET_NAMES
    }

    /// Applies a JSON options object over this config, key by key.
    ///
    /// Missing keys and wrong-typed values keep the current setting, so a
    /// partial override like `{"density": 40}` is valid on its own.
    pub fn merge_json(&self, params: &Value) -> FieldConfig {
        FieldConfig {
            density: param_usize(params, "density", self.density),
            speed: param_f64(params, "speed", self.speed),
            color: param_color(params, "color", self.color),
            secondary_color: param_color(params, "secondary_color", self.secondary_color),
            connect_lines: param_bool(params, "connect_lines", self.connect_lines),
            link_distance: param_f64(params, "link_distance", self.link_distance),
            link_opacity: param_f64(params, "link_opacity", self.link_opacity),
            target_fps: param_opt_f64(params, "target_fps", self.target_fps),
        }
    }

    /// Checks that every numeric setting is usable.
    ///
    /// Rejects non-finite or negative speed, non-positive or non-finite link
    /// distance, link opacity outside [0, 1], and a non-positive target fps.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "link_distance must be finite and positive, got {}",
                self.link_distance
            )));
        }
        if !self.link_opacity.is_finite() || !(0.0..=1.0).contains(&self.link_opacity) {
            return Err(FieldError::InvalidConfig(format!(
                "link_opacity must be within [0, 1], got {}",
                self.link_opacity
            )));
        }
        if let Some(fps) = self.target_fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(FieldError::InvalidConfig(format!(
                    "target_fps must be finite and positive, got {fps}"
                )));
            }
        }
        Ok(())
    }
}
