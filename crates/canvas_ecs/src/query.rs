//! Intersection queries over a [`Context`](crate::Context).
//!
//! A [`View`] yields every entity that holds *all* of the requested component
//! kinds. It picks the smallest matching column as the driver, walks only that
//! column's entities, and checks the remaining columns for each candidate, so
//! the work is bounded by `smallest column × kinds` rather than the size of
//! the biggest column.
//!
//! Views are lazy and single-pass. They read the store's maps directly
//! instead of snapshotting them; the view borrows the store, so it cannot be
//! mutated until the view is dropped. Collect into a `Vec<Entity>` first when
//! the loop body needs to attach, detach or destroy.

use std::collections::btree_set;
use std::collections::hash_map::Keys;
use std::collections::{BTreeSet, HashMap};

use crate::component::ComponentKind;
use crate::entity::Entity;
use crate::storage::{BoxedComponent, ComponentColumn};

/// A lazy sequence of entities matching a set of component kinds.
///
/// Created by [`Context::view`](crate::Context::view) and
/// [`Context::view_kinds`](crate::Context::view_kinds).
#[derive(Debug)]
pub struct View<'a> {
    plan: Plan<'a>,
}

#[derive(Debug)]
enum Plan<'a> {
    /// A requested kind has never been stored: nothing can match.
    Empty,
    /// No kinds requested: every live entity, in allocation order.
    All(btree_set::Iter<'a, Entity>),
    /// Walk `driver`, keep entities present in every column of `peers`.
    Intersect {
        driver: Keys<'a, Entity, BoxedComponent>,
        peers: Vec<&'a ComponentColumn>,
    },
}

impl<'a> View<'a> {
    pub(crate) fn new(
        live: &'a BTreeSet<Entity>,
        columns: &'a HashMap<ComponentKind, ComponentColumn>,
        kinds: &[ComponentKind],
    ) -> Self {
        if kinds.is_empty() {
            return Self {
                plan: Plan::All(live.iter()),
            };
        }

        let mut matched = Vec::with_capacity(kinds.len());
        for kind in kinds {
            match columns.get(kind) {
                Some(column) => matched.push(column),
                None => return Self { plan: Plan::Empty },
            }
        }

        // `matched` is non-empty because `kinds` is.
        let Some(driver) = matched.iter().copied().min_by_key(|c| c.len()) else {
            return Self { plan: Plan::Empty };
        };
        let peers = matched
            .into_iter()
            .filter(|c| !std::ptr::eq(*c, driver))
            .collect();

        Self {
            plan: Plan::Intersect {
                driver: driver.entities(),
                peers,
            },
        }
    }
}

impl Iterator for View<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        match &mut self.plan {
            Plan::Empty => None,
            Plan::All(iter) => iter.next().copied(),
            Plan::Intersect { driver, peers } => driver
                .by_ref()
                .copied()
                .find(|entity| peers.iter().all(|column| column.contains(*entity))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.plan {
            Plan::Empty => (0, Some(0)),
            Plan::All(iter) => iter.size_hint(),
            Plan::Intersect { driver, peers } if peers.is_empty() => driver.size_hint(),
            Plan::Intersect { driver, .. } => (0, driver.size_hint().1),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::component::Component;
    use crate::context::Context;
    use crate::entity::Entity;

    struct A;
    impl Component for A {}

    struct B;
    impl Component for B {}

    struct C;
    impl Component for C {}

    struct Unused;
    impl Component for Unused {}

    fn as_set(view: impl Iterator<Item = Entity>) -> HashSet<Entity> {
        view.collect()
    }

    #[test]
    fn test_view_without_kinds_yields_live_entities_in_order() {
        let mut ctx = Context::new();
        let ids: Vec<Entity> = (0..5).map(|_| ctx.entity()).collect();
        ctx.destroy(ids[2]);

        let all: Vec<Entity> = ctx.view::<()>().collect();
        assert_eq!(all, vec![ids[0], ids[1], ids[3], ids[4]]);
        // Stable for an unmodified store.
        assert_eq!(ctx.view::<()>().collect::<Vec<_>>(), all);
    }

    #[test]
    fn test_view_intersection_independent_of_smallest_set() {
        let mut ctx = Context::new();
        // Many A, few B.
        let mut both = HashSet::new();
        for i in 0..20 {
            let e = ctx.entity();
            ctx.attach(e, A).unwrap();
            if i % 5 == 0 {
                ctx.attach(e, B).unwrap();
                both.insert(e);
            }
        }
        // A handful of B-only entities.
        for _ in 0..2 {
            let e = ctx.entity();
            ctx.attach(e, B).unwrap();
        }

        assert_eq!(as_set(ctx.view::<(A, B)>()), both);
        assert_eq!(as_set(ctx.view::<(B, A)>()), both);
    }

    #[test]
    fn test_view_is_driven_by_smallest_column() {
        let mut ctx = Context::new();
        for _ in 0..100 {
            let e = ctx.entity();
            ctx.attach(e, A).unwrap();
        }
        let mut both = HashSet::new();
        for _ in 0..3 {
            let e = ctx.entity();
            ctx.attach(e, A).unwrap();
            ctx.attach(e, B).unwrap();
            both.insert(e);
        }

        // The upper bound is the driving column's length.
        assert_eq!(ctx.view::<(A, B)>().size_hint(), (0, Some(3)));
        assert_eq!(ctx.view::<(B, A)>().size_hint(), (0, Some(3)));
        assert_eq!(ctx.view::<(A,)>().size_hint(), (103, Some(103)));
        assert_eq!(as_set(ctx.view::<(A, B)>()), both);
    }

    #[test]
    fn test_view_three_kinds() {
        let mut ctx = Context::new();
        let abc = ctx.entity();
        let ab = ctx.entity();
        let bc = ctx.entity();
        let c = ctx.entity();
        ctx.attach(abc, A).unwrap();
        ctx.attach(abc, B).unwrap();
        ctx.attach(abc, C).unwrap();
        ctx.attach(ab, A).unwrap();
        ctx.attach(ab, B).unwrap();
        ctx.attach(bc, B).unwrap();
        ctx.attach(bc, C).unwrap();
        ctx.attach(c, C).unwrap();

        assert_eq!(ctx.view::<(A, B, C)>().collect::<Vec<_>>(), vec![abc]);
        assert_eq!(as_set(ctx.view::<(A, B)>()), HashSet::from([abc, ab]));
        assert_eq!(as_set(ctx.view::<(B, C)>()), HashSet::from([abc, bc]));
        assert_eq!(as_set(ctx.view::<(C,)>()), HashSet::from([abc, bc, c]));
    }

    #[test]
    fn test_view_with_unused_kind_is_empty() {
        let mut ctx = Context::new();
        let e = ctx.entity();
        ctx.attach(e, A).unwrap();

        let mut view = ctx.view::<(A, Unused)>();
        assert_eq!(view.size_hint(), (0, Some(0)));
        assert_eq!(view.next(), None);
        assert_eq!(ctx.view::<(Unused,)>().count(), 0);
    }

    #[test]
    fn test_view_with_duplicate_kinds() {
        let mut ctx = Context::new();
        let e1 = ctx.entity();
        let e2 = ctx.entity();
        ctx.attach(e1, A).unwrap();
        ctx.attach(e1, B).unwrap();
        ctx.attach(e2, A).unwrap();

        assert_eq!(as_set(ctx.view::<(A, A)>()), HashSet::from([e1, e2]));
        assert_eq!(ctx.view::<(A, B, A)>().collect::<Vec<_>>(), vec![e1]);
    }

    #[test]
    fn test_view_excludes_detached_component() {
        let mut ctx = Context::new();
        let e = ctx.entity();
        ctx.attach(e, A).unwrap();
        ctx.detach::<A>(e);

        // The column still exists but is empty.
        assert_eq!(ctx.view::<(A,)>().count(), 0);
    }

    #[test]
    fn test_view_is_fresh_per_call() {
        let mut ctx = Context::new();
        let e = ctx.entity();
        ctx.attach(e, A).unwrap();

        let mut first = ctx.view::<(A,)>();
        assert_eq!(first.next(), Some(e));
        assert_eq!(first.next(), None);
        assert_eq!(ctx.view::<(A,)>().next(), Some(e));
    }

    #[test]
    fn test_collect_then_mutate() {
        let mut ctx = Context::new();
        for _ in 0..4 {
            let e = ctx.entity();
            ctx.attach(e, A).unwrap();
        }

        let targets: Vec<Entity> = ctx.view::<(A,)>().collect();
        for e in targets {
            ctx.destroy(e);
        }
        assert!(ctx.is_empty());
        assert_eq!(ctx.view::<(A,)>().count(), 0);
    }
}
