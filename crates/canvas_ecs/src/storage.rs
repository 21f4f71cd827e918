//! Type-erased per-kind component storage.
//!
//! A `ComponentColumn` holds every instance of a single [`ComponentKind`],
//! keyed by the entity that owns it. Values are boxed as `dyn Any` and
//! downcast on the way out; the owning [`Context`](crate::Context) guarantees
//! a column only ever receives values of its own kind.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Keys;

use crate::component::{Component, ComponentKind};
use crate::entity::Entity;

pub(crate) type BoxedComponent = Box<dyn Any + Send + Sync>;

/// A column storing components of a single kind, one per entity.
pub(crate) struct ComponentColumn {
    /// The component kind stored in this column.
    kind: ComponentKind,
    /// Entity → boxed component instance.
    rows: HashMap<Entity, BoxedComponent>,
}

impl ComponentColumn {
    /// Create a new empty column for the given component kind.
    #[must_use]
    pub(crate) fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            rows: HashMap::new(),
        }
    }

    /// Returns the number of component instances stored.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Store `component` for `entity`, returning the value it replaced.
    pub(crate) fn insert<C: Component>(&mut self, entity: Entity, component: C) -> Option<C> {
        debug_assert_eq!(self.kind, C::kind(), "component stored in foreign column");
        self.rows
            .insert(entity, Box::new(component))
            .and_then(|old| old.downcast::<C>().ok())
            .map(|old| *old)
    }

    /// Borrow the component stored for `entity`.
    #[must_use]
    pub(crate) fn get<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.rows.get(&entity)?.downcast_ref::<C>()
    }

    /// Mutably borrow the component stored for `entity`.
    pub(crate) fn get_mut<C: Component>(&mut self, entity: Entity) -> Option<&mut C> {
        self.rows.get_mut(&entity)?.downcast_mut::<C>()
    }

    /// Returns `true` if `entity` has a component in this column.
    #[must_use]
    pub(crate) fn contains(&self, entity: Entity) -> bool {
        self.rows.contains_key(&entity)
    }

    /// Remove and return the typed component stored for `entity`.
    pub(crate) fn take<C: Component>(&mut self, entity: Entity) -> Option<C> {
        let boxed = self.rows.remove(&entity)?;
        boxed.downcast::<C>().ok().map(|c| *c)
    }

    /// Drop the component stored for `entity`, if any.
    ///
    /// Returns `true` if something was removed.
    pub(crate) fn remove(&mut self, entity: Entity) -> bool {
        self.rows.remove(&entity).is_some()
    }

    /// Iterate the entities that have a component in this column.
    pub(crate) fn entities(&self) -> Keys<'_, Entity, BoxedComponent> {
        self.rows.keys()
    }
}

impl std::fmt::Debug for ComponentColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentColumn")
            .field("kind", &self.kind)
            .field("len", &self.rows.len())
            .finish()
    }
}
