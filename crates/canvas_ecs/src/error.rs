//! Store error types.

use crate::entity::Entity;

/// Errors returned by [`Context`](crate::Context) operations.
///
/// Only precondition violations are errors. Missing components, repeated
/// removals, and destroying an unknown entity are ordinary outcomes and
/// report through `Option` / `bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The entity was never allocated by this store, or has been destroyed.
    #[error("{0} does not exist, cannot attach component")]
    UnknownEntity(Entity),
}
