//! # pageforge
//!
//! Reactive state core for a visual page builder.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A project is a forest of pages; every page owns an isolated state
//! partition holding its tree of component descriptors, the registry of
//! live instances rendered from them, and the page-scoped interaction
//! state. One explicit [`Store`] value composes the partitions with the
//! project header, the injected catalogs, and the global selection and
//! menu state.
//!
//! All writes pass through a single funnel:
//! ```text
//! action → named atomic mutations → descriptor tree / partitions
//!        ↘ instance synchronization (register / apply / destroy)
//! ```
//!
//! Descriptors are declarative and serializable; instances are live
//! objects owned by the rendering collaborator and kept consistent by
//! the store - every prop patch is mirrored onto the instance, and
//! removing a descriptor destroys the instances behind it, children
//! before parents.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Project, Page, Descriptor, catalogs)
//! - [`tree`] - Recursive find/remove over nested slot trees
//! - [`engine`] - Instance trait and per-partition instance registry
//! - [`state`] - Partition, selection, and menu state bundles
//! - [`store`] - The central container: getters, mutations, actions

pub mod engine;
pub mod error;
pub mod state;
pub mod store;
pub mod tree;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use engine::{Instance, InstanceRegistry};

pub use state::{
    ContextMenu, ContextMenuPatch, MenuState, PagePartition, PartitionSnapshot, SelectionState,
    SlotMenu, SlotMenuPatch,
};

pub use store::{ProjectSnapshot, Store};

pub use tree::{find, find_mut, remove_first, subtree_ids};
