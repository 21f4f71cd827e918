//! The component store.
//!
//! A [`Context`] works like an in-memory relational table: each
//! [`Entity`] is a row and each [`ComponentKind`] is a column. It owns the
//! entity allocator, the set of live entities, and one type-erased column
//! per kind that has ever been attached.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::component::{Component, ComponentKind, ComponentSet};
use crate::entity::{Entity, EntityAllocator};
use crate::error::ContextError;
use crate::query::View;
use crate::storage::ComponentColumn;

/// Entity-component store.
///
/// Single-owner and synchronous: every operation completes in one call and
/// there is no internal locking. Share it across threads behind an external
/// lock if needed.
#[derive(Debug, Default)]
pub struct Context {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// Entities that have been allocated and not destroyed. Ordered by ID,
    /// which is also allocation order.
    live: BTreeSet<Entity>,
    /// Component columns, created lazily the first time a kind is attached.
    columns: HashMap<ComponentKind, ComponentColumn>,
}

impl Context {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `kinds` component columns.
    #[must_use]
    pub fn with_capacity(kinds: usize) -> Self {
        Self {
            columns: HashMap::with_capacity(kinds),
            ..Self::default()
        }
    }

    // -- Entity lifecycle --

    /// Allocate a new, live entity with no components.
    ///
    /// # Panics
    ///
    /// Panics if the `u64` ID space is exhausted. See
    /// [`EntityAllocator::allocate`].
    pub fn entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.live.insert(entity);
        trace!(%entity, "entity allocated");
        entity
    }

    /// Destroy an entity and every component attached to it.
    ///
    /// Does nothing if the entity is not live. Returns `true` if the entity
    /// was live and has been removed.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.live.remove(&entity) {
            return false;
        }
        let mut dropped = 0usize;
        for column in self.columns.values_mut() {
            if column.remove(entity) {
                dropped += 1;
            }
        }
        debug!(%entity, components = dropped, "entity destroyed");
        true
    }

    /// Returns `true` if the entity has been allocated and not destroyed.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    // -- Component operations --

    /// Attach `component` to `entity`, replacing any component of the same
    /// kind it already has.
    ///
    /// Fails with [`ContextError::UnknownEntity`] if the entity is not live,
    /// in which case the store is left untouched.
    pub fn attach<C: Component>(
        &mut self,
        entity: Entity,
        component: C,
    ) -> Result<(), ContextError> {
        if !self.live.contains(&entity) {
            debug!(%entity, kind = C::type_name(), "attach rejected: unknown entity");
            return Err(ContextError::UnknownEntity(entity));
        }
        let kind = C::kind();
        let replaced = self
            .columns
            .entry(kind)
            .or_insert_with(|| ComponentColumn::new(kind))
            .insert(entity, component)
            .is_some();
        trace!(%entity, %kind, replaced, "component attached");
        Ok(())
    }

    /// Remove the `C` component from `entity` and return it.
    ///
    /// Returns `None` if the entity is unknown or has no such component.
    pub fn detach<C: Component>(&mut self, entity: Entity) -> Option<C> {
        self.columns.get_mut(&C::kind())?.take::<C>(entity)
    }

    /// Remove the component of `kind` from `entity`.
    ///
    /// Returns `true` if a component was removed. Unknown entities and absent
    /// components are not errors.
    pub fn detach_kind(&mut self, entity: Entity, kind: ComponentKind) -> bool {
        self.columns
            .get_mut(&kind)
            .is_some_and(|column| column.remove(entity))
    }

    /// Borrow the `C` component of `entity`, if it has one.
    #[must_use]
    pub fn get<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.columns.get(&C::kind())?.get::<C>(entity)
    }

    /// Mutably borrow the `C` component of `entity`, if it has one.
    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> Option<&mut C> {
        self.columns.get_mut(&C::kind())?.get_mut::<C>(entity)
    }

    /// Returns `true` if `entity` has a `C` component.
    #[must_use]
    pub fn has<C: Component>(&self, entity: Entity) -> bool {
        self.has_kind(entity, C::kind())
    }

    /// Returns `true` if `entity` has a component of `kind`.
    #[must_use]
    pub fn has_kind(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.columns
            .get(&kind)
            .is_some_and(|column| column.contains(entity))
    }

    // -- Query --

    /// Iterate the entities holding every component in `S`.
    ///
    /// `view::<()>()` yields every live entity in allocation order.
    pub fn view<S: ComponentSet>(&self) -> View<'_> {
        self.view_kinds(&S::kinds())
    }

    /// Iterate the entities holding every kind in `kinds`.
    ///
    /// An empty slice yields every live entity in allocation order. A kind
    /// that has never been attached makes the view empty.
    pub fn view_kinds(&self, kinds: &[ComponentKind]) -> View<'_> {
        View::new(&self.live, &self.columns, kinds)
    }
}
