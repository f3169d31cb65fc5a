//! RGBA color type for particles and connecting lines.
//!
//! Colors hold f64 components in [0, 1] and parse/format as hex strings,
//! the form every background configuration in the wild uses. Alpha is a
//! first-class component because the whole field is translucent decoration.

use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with components in [0, 1].
///
/// Serializes as a hex string: `"#rrggbb"` when fully opaque, `"#rrggbbaa"`
/// otherwise. The hex round-trip has 8-bit quantization (1/255 precision
/// loss), acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Creates an opaque color from 8-bit channel values.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Rgba {
        Rgba {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (case insensitive, `#` optional).
    ///
    /// Returns `FieldError::InvalidColor` if the input is not a valid 6- or
    /// 8-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgba, FieldError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(FieldError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| FieldError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Rgba {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        })
    }

    /// Formats as `"#rrggbb"` (opaque) or `"#rrggbbaa"`.
    ///
    /// Components are quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (q(self.r), q(self.g), q(self.b), q(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Returns this color with alpha replaced by `alpha`, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Component-wise linear interpolation between two colors.
    ///
    /// `t` is clamped to [0, 1]: `t = 0` returns `from`, `t = 1` returns `to`.
    pub fn lerp(from: Rgba, to: Rgba, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: f64, b: f64| a + t * (b - a);
        Rgba {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
