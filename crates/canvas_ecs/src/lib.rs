//! # canvas_ecs
//!
//! The in-memory entity-component store that sits underneath the canvas.
//! Entities are rows, components are columns, and a [`Context`] is the table.
//!
//! This crate provides:
//!
//! - [`Entity`]: lightweight `u64` entity identifiers.
//! - [`EntityAllocator`]: monotonically increasing, never-reused ID allocator.
//! - [`Component`] trait and [`ComponentKind`]: the marker all component data
//!   implements, and the discriminator that tells component shapes apart.
//! - [`Context`]: the store (attach, detach, get, has, destroy).
//! - [`View`]: lazy smallest-set intersection queries over the store.
//!
//! ```rust
//! use canvas_ecs::{Component, Context};
//!
//! #[derive(Debug, PartialEq)]
//! struct Positionable { x: f64, y: f64 }
//! impl Component for Positionable {}
//!
//! #[derive(Debug, PartialEq)]
//! struct Drawable(&'static str);
//! impl Component for Drawable {}
//!
//! let mut ctx = Context::new();
//! let e1 = ctx.entity();
//! let e2 = ctx.entity();
//! ctx.attach(e1, Positionable { x: 10.0, y: 20.0 }).unwrap();
//! ctx.attach(e1, Drawable("rect")).unwrap();
//! ctx.attach(e2, Positionable { x: 0.0, y: 0.0 }).unwrap();
//!
//! let both: Vec<_> = ctx.view::<(Positionable, Drawable)>().collect();
//! assert_eq!(both, vec![e1]);
//! ```

pub mod component;
pub mod context;
pub mod entity;
pub mod error;
pub mod query;
mod storage;

pub use component::{Component, ComponentKind, ComponentSet};
pub use context::Context;
pub use entity::{Entity, EntityAllocator};
pub use error::ContextError;
pub use query::View;
