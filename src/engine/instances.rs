//! Instance Registry - id to live-instance mapping.
//!
//! Manages the lifecycle of rendered instances for one page partition:
//! - Registration keyed by the descriptor id (insert/overwrite)
//! - Prop propagation onto a live instance
//! - Paired destruction: the destroy hook runs exactly once, before the
//!   entry leaves the map
//!
//! The registry has no knowledge of the descriptor tree. Callers that
//! tear down a subtree pass ids in the order the tree dictates
//! (children before parents, see [`crate::tree::subtree_ids`]).

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::types::PropMap;

// =============================================================================
// Instance Trait
// =============================================================================

/// A live object produced by rendering a descriptor.
///
/// Implemented by the rendering collaborator. The core calls back into
/// these hooks to keep the instance consistent with its descriptor:
/// `apply_props` mirrors every prop patch committed to the descriptor,
/// and `destroy` releases the instance when the descriptor is removed.
///
/// Contract: an instance must be registered (via
/// [`crate::store::Store::register_instance`]) before any update or
/// delete targets its descriptor's id.
pub trait Instance {
    /// Merge a prop patch into the live object.
    fn apply_props(&mut self, patch: &PropMap);

    /// Release everything the instance holds. Called exactly once, just
    /// before the registry drops the entry.
    fn destroy(&mut self);
}

// =============================================================================
// Instance Registry
// =============================================================================

/// Owned id → instance map for one page partition.
#[derive(Default)]
pub struct InstanceRegistry {
    entries: HashMap<String, Box<dyn Instance>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `id`.
    ///
    /// Overwriting does NOT destroy the previous instance - re-rendering
    /// the same descriptor hands over ownership of a replacement, and
    /// the collaborator is expected to have retired the old one itself.
    pub fn register(&mut self, id: impl Into<String>, instance: Box<dyn Instance>) {
        let id = id.into();
        trace!(id = id.as_str(), "register instance");
        self.entries.insert(id, instance);
    }

    /// Check whether an instance is registered for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids of all registered instances (unordered).
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Propagate a prop patch onto the live instance for `id`.
    ///
    /// Returns false if no instance is registered; the caller decides
    /// whether that is tolerable.
    pub fn apply(&mut self, id: &str, patch: &PropMap) -> bool {
        match self.entries.get_mut(id) {
            Some(instance) => {
                trace!(id, "apply props to instance");
                instance.apply_props(patch);
                true
            }
            None => false,
        }
    }

    /// Run the destroy hook for `id` and drop the entry.
    ///
    /// Returns false if no instance is registered (no-op).
    pub fn destroy(&mut self, id: &str) -> bool {
        match self.entries.remove(id) {
            Some(mut instance) => {
                trace!(id, "destroy instance");
                instance.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroy every remaining instance and clear the map.
    ///
    /// Order is unspecified; callers that care about teardown order
    /// destroy ordered ids first and use this for the remainder.
    pub fn teardown_all(&mut self) {
        for (id, mut instance) in self.entries.drain() {
            trace!(id = id.as_str(), "destroy instance (teardown)");
            instance.destroy();
        }
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
