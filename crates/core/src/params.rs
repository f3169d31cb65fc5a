//! Pure helper functions for extracting typed values from a JSON options object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail, so a partial or sloppy options object still yields a
//! usable configuration.

use crate::color::Rgba;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a hex color from `params[name]`, returning `default` if missing,
/// the wrong type, or unparseable.
pub fn param_color(params: &Value, name: &str, default: Rgba) -> Rgba {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Rgba::from_hex(s).ok())
        .unwrap_or(default)
}

/// Extracts an optional `f64` from `params[name]`.
///
/// An explicit JSON `null` clears the value to `None`; a number sets it;
/// a missing key or wrong type keeps `default`.
pub fn param_opt_f64(params: &Value, name: &str, default: Option<f64>) -> Option<f64> {
    match params.get(name) {
        Some(Value::Null) => None,
        Some(v) => v.as_f64().map(Some).unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"speed": 2.5});
        assert!((param_f64(&params, "speed", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"link_distance": 140});
        assert!((param_f64(&params, "link_distance", 0.0) - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "speed", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"speed": "fast"});
        assert!((param_f64(&params, "speed", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "speed", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"density": 80});
        assert_eq!(param_usize(&params, "density", 0), 80);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_usize(&params, "density", 100), 100);
    }

    #[test]
    fn param_usize_returns_default_for_float_value() {
        let params = json!({"density": 2.5});
        assert_eq!(param_usize(&params, "density", 99), 99);
    }

    #[test]
    fn param_usize_returns_default_for_negative_integer() {
        let params = json!({"density": -1});
        assert_eq!(param_usize(&params, "density", 5), 5);
    }

    // -- param_bool --

    #[test]
    fn param_bool_extracts_true() {
        let params = json!({"connect_lines": true});
        assert!(param_bool(&params, "connect_lines", false));
    }

    #[test]
    fn param_bool_extracts_false() {
        let params = json!({"connect_lines": false});
        assert!(!param_bool(&params, "connect_lines", true));
    }

    #[test]
    fn param_bool_returns_default_for_wrong_type() {
        let params = json!({"connect_lines": 1});
        assert!(!param_bool(&params, "connect_lines", false));
    }

    // -- param_color --

    #[test]
    fn param_color_extracts_valid_hex() {
        let params = json!({"color": "#ec4899"});
        let c = param_color(&params, "color", Rgba::from_u8(0, 0, 0));
        assert_eq!(c.to_hex(), "#ec4899");
    }

    #[test]
    fn param_color_returns_default_for_bad_hex() {
        let default = Rgba::from_u8(1, 2, 3);
        let params = json!({"color": "#nothex"});
        assert_eq!(param_color(&params, "color", default), default);
    }

    #[test]
    fn param_color_returns_default_when_key_missing() {
        let default = Rgba::from_u8(1, 2, 3);
        let params = json!({});
        assert_eq!(param_color(&params, "color", default), default);
    }

    #[test]
    fn param_color_returns_default_for_non_string() {
        let default = Rgba::from_u8(1, 2, 3);
        let params = json!({"color": 0xff00ff});
        assert_eq!(param_color(&params, "color", default), default);
    }

    // -- param_opt_f64 --

    #[test]
    fn param_opt_f64_extracts_number_as_some() {
        let params = json!({"target_fps": 30.0});
        assert_eq!(param_opt_f64(&params, "target_fps", None), Some(30.0));
    }

    #[test]
    fn param_opt_f64_null_clears_to_none() {
        let params = json!({"target_fps": null});
        assert_eq!(param_opt_f64(&params, "target_fps", Some(60.0)), None);
    }

    #[test]
    fn param_opt_f64_missing_key_keeps_default() {
        let params = json!({});
        assert_eq!(param_opt_f64(&params, "target_fps", Some(60.0)), Some(60.0));
    }

    #[test]
    fn param_opt_f64_wrong_type_keeps_default() {
        let params = json!({"target_fps": "fast"});
        assert_eq!(param_opt_f64(&params, "target_fps", Some(24.0)), Some(24.0));
    }
}
