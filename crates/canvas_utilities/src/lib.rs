//! # canvas_utilities
//!
//! Immutable value types used as component payloads on the canvas. Each type
//! implements [`Component`](canvas_ecs::Component) so it can be attached to an
//! entity directly; conversions to [`glam`] are provided where the math lives.

pub mod clock;
pub mod color;
pub mod json;
pub mod matrix;
pub mod vector;

// Re-export glam types for convenience.
pub use glam::{DAffine2, DVec2};

pub use clock::Clock;
pub use color::Color;
pub use json::{Json, JsonObject, is_document};
pub use matrix::Matrix;
pub use vector::Vector;
