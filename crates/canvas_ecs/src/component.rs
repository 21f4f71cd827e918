//! Core [`Component`] trait and the [`ComponentKind`] discriminator.
//!
//! Every piece of data stored in a [`Context`](crate::Context) must implement
//! [`Component`]. The trait has no required methods; it only marks a type as
//! allowed in the store and requires `Send + Sync + 'static` so a store can be
//! handed to another thread behind an external lock.
//!
//! ## Kind identity
//!
//! [`ComponentKind`] is derived from the component's [`TypeId`], so two
//! distinct Rust types are always two distinct kinds, even when they share a
//! name in different modules.

use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// A unique identifier for a component shape.
///
/// Equality and hashing look only at the underlying [`TypeId`]. The name is
/// kept for `Debug` output and log lines.
#[derive(Debug, Clone, Copy)]
pub struct ComponentKind {
    type_id: TypeId,
    name: &'static str,
}

impl ComponentKind {
    /// Returns the [`ComponentKind`] for a Rust component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::type_name(),
        }
    }

    /// The human-readable name of the component type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKind {}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// The component marker trait.
///
/// # Examples
///
/// ```rust
/// use canvas_ecs::{Component, ComponentKind};
///
/// #[derive(Debug, Clone)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {}
///
/// assert_eq!(Health::kind(), ComponentKind::of::<Health>());
/// ```
pub trait Component: Send + Sync + 'static {
    /// A human-readable name for this component type.
    ///
    /// Defaults to the fully qualified Rust type name.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }

    /// Returns the [`ComponentKind`] for this component.
    fn kind() -> ComponentKind
    where
        Self: Sized,
    {
        ComponentKind::of::<Self>()
    }
}

/// A fixed set of component types, used to request a typed view.
///
/// Implemented for `()` (every live entity) and tuples of up to six
/// components.
pub trait ComponentSet {
    /// The kinds in this set, in declaration order.
    fn kinds() -> Vec<ComponentKind>;
}

impl ComponentSet for () {
    fn kinds() -> Vec<ComponentKind> {
        Vec::new()
    }
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentSet for ($($name,)+) {
            fn kinds() -> Vec<ComponentKind> {
                vec![$(ComponentKind::of::<$name>()),+]
            }
        }
    };
}

impl_component_set!(C0);
impl_component_set!(C0, C1);
impl_component_set!(C0, C1, C2);
impl_component_set!(C0, C1, C2, C3);
impl_component_set!(C0, C1, C2, C3, C4);
impl_component_set!(C0, C1, C2, C3, C4, C5);
