//! Crate error type.
//!
//! The store distinguishes tolerated lookups from caller-contract
//! violations. Lookups targeting an id that no longer exists (a
//! component or page deleted moments ago) are silent no-ops, because UI
//! operations routinely race with prior deletions. Everything here is
//! the other kind: a condition the caller must not produce, surfaced as
//! an explicit value instead of a panic.

use thiserror::Error;

/// Result type used throughout pageforge.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the store's mutation and action surface.
#[derive(Debug, Error)]
pub enum Error {
    /// A page-scoped operation ran while no page was selected.
    /// Page-scoped getters return empty defaults instead.
    #[error("no page is currently selected")]
    NoSelectedPage,

    /// Partition-keyed access to a page id with no partition.
    #[error("unknown page `{0}`")]
    PageNotFound(String),

    /// A supplied page id is already in use.
    #[error("page id `{0}` already exists")]
    DuplicatePage(String),

    /// Inserting the descriptor would put the same id in the page's
    /// tree twice.
    #[error("component id `{0}` already exists in the page tree")]
    DuplicateComponent(String),

    /// A descriptor was found but no live instance is registered under
    /// its id. Registering an instance before updating or deleting a
    /// component is a caller contract (see [`crate::engine::Instance`]).
    #[error("no instance registered for component `{0}`")]
    InstanceNotFound(String),
}
