//! 2D vector component.
//!
//! [`Vector`] is used for positions, offsets and sizes on the canvas.

use canvas_ecs::Component;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An immutable 2D vector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Component for Vector {
    fn type_name() -> &'static str {
        "Vector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector::default(), Vector::ZERO);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector::new(1.5, -2.0);
        let g: DVec2 = v.into();
        assert_eq!(g, DVec2::new(1.5, -2.0));
        assert_eq!(Vector::from(g), v);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let v = Vector::new(10.0, 20.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":20.0}"#);
        let restored: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, restored);
    }
}
