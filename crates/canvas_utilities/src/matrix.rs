//! 2D affine transform component.
//!
//! [`Matrix`] uses the canvas convention of six elements `[a, b, c, d, e, f]`,
//! which stand for
//!
//! ```text
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! ```
//!
//! so a point maps to `(a·x + c·y + e, b·x + d·y + f)`.

use canvas_ecs::Component;
use glam::{DAffine2, DMat2, DVec2};
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// An immutable 2D affine transform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_elements([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Build a matrix from `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn from_elements([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The six elements as `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn elements(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// A pure translation.
    #[must_use]
    pub fn from_translation(offset: Vector) -> Self {
        DAffine2::from_translation(offset.into()).into()
    }

    /// Apply the transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: Vector) -> Vector {
        DAffine2::from(*self).transform_point2(point.into()).into()
    }

    /// `self` applied after `other`.
    #[must_use]
    pub fn then(&self, other: &Matrix) -> Self {
        (DAffine2::from(*self) * DAffine2::from(*other)).into()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix> for DAffine2 {
    fn from(m: Matrix) -> Self {
        DAffine2::from_mat2_translation(
            DMat2::from_cols(DVec2::new(m.a, m.b), DVec2::new(m.c, m.d)),
            DVec2::new(m.e, m.f),
        )
    }
}

impl From<DAffine2> for Matrix {
    fn from(t: DAffine2) -> Self {
        let m = t.matrix2;
        Self {
            a: m.x_axis.x,
            b: m.x_axis.y,
            c: m.y_axis.x,
            d: m.y_axis.y,
            e: t.translation.x,
            f: t.translation.y,
        }
    }
}

impl Component for Matrix {
    fn type_name() -> &'static str {
        "Matrix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Matrix::default().elements(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let p = Vector::new(3.0, 4.0);
        assert_eq!(Matrix::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_translation() {
        let m = Matrix::from_translation(Vector::new(5.0, -1.0));
        assert_eq!(m.elements(), [1.0, 0.0, 0.0, 1.0, 5.0, -1.0]);
        assert_eq!(m.transform_point(Vector::new(1.0, 1.0)), Vector::new(6.0, 0.0));
    }

    #[test]
    fn test_element_layout() {
        // Scale x by 2, shear y into x by 3, translate by (10, 20).
        let m = Matrix::from_elements([2.0, 0.0, 3.0, 1.0, 10.0, 20.0]);
        assert_eq!(m.transform_point(Vector::new(1.0, 1.0)), Vector::new(15.0, 21.0));
    }

    #[test]
    fn test_then_composes_right_to_left() {
        let scale = Matrix::from_elements([2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        let shift = Matrix::from_translation(Vector::new(1.0, 0.0));
        // Shift first, then scale.
        let m = scale.then(&shift);
        assert_eq!(m.transform_point(Vector::ZERO), Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = Matrix::from_elements([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Matrix::from(DAffine2::from(m)), m);
    }
}
