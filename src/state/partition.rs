//! Page State Partition - the isolated per-page bundle.
//!
//! Every page owns exactly one partition, created with the page and
//! destroyed with it. The partition holds the page's descriptor tree,
//! the registry of live instances behind it, and the page-scoped
//! interaction state (selected/hovered component, layout).
//!
//! Component selection is stored as an id, not a copy of the
//! descriptor: a stale id after a deletion simply resolves to nothing,
//! which is exactly the tolerance the UI needs.

use serde::{Deserialize, Serialize};
use spark_signals::{Signal, signal};

use crate::engine::InstanceRegistry;
use crate::tree;
use crate::types::Descriptor;

// =============================================================================
// Partition
// =============================================================================

/// The state bundle owned by a single page.
///
/// Interaction fields are signals so collaborator effects can track
/// them with fine granularity (an effect reading the selection does not
/// re-run when only the hover changes).
pub struct PagePartition {
    pub(crate) components: Vec<Descriptor>,
    pub(crate) instances: InstanceRegistry,
    selected_component: Signal<Option<String>>,
    hovered_component: Signal<Option<String>>,
    layout: Signal<Option<String>>,
}

impl PagePartition {
    /// Create an empty partition: no components, no instances, nothing
    /// selected.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            instances: InstanceRegistry::new(),
            selected_component: signal(None),
            hovered_component: signal(None),
            layout: signal(None),
        }
    }

    /// Rebuild a partition from persisted data. Instances start empty;
    /// the rendering collaborator re-registers them as it realizes the
    /// tree.
    pub fn from_snapshot(snap: PartitionSnapshot) -> Self {
        Self {
            components: snap.components,
            instances: InstanceRegistry::new(),
            selected_component: signal(None),
            hovered_component: signal(None),
            layout: signal(snap.layout),
        }
    }

    /// The serializable part of this partition (instances excluded).
    pub fn snapshot(&self) -> PartitionSnapshot {
        PartitionSnapshot {
            components: self.components.clone(),
            layout: self.layout.get(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The page's component tree (top-level descriptors).
    pub fn components(&self) -> &[Descriptor] {
        &self.components
    }

    /// Read-only view of the live-instance registry.
    pub fn instances(&self) -> &InstanceRegistry {
        &self.instances
    }

    /// Id of the currently selected component, if any.
    pub fn selected_component_id(&self) -> Option<String> {
        self.selected_component.get()
    }

    /// Id of the currently hovered component, if any.
    pub fn hovered_component_id(&self) -> Option<String> {
        self.hovered_component.get()
    }

    /// Name of the layout assigned to this page, if any.
    pub fn layout(&self) -> Option<String> {
        self.layout.get()
    }

    // -------------------------------------------------------------------------
    // Signals (for collaborator effects)
    // -------------------------------------------------------------------------

    pub fn selected_component_signal(&self) -> Signal<Option<String>> {
        self.selected_component.clone()
    }

    pub fn hovered_component_signal(&self) -> Signal<Option<String>> {
        self.hovered_component.clone()
    }

    pub fn layout_signal(&self) -> Signal<Option<String>> {
        self.layout.clone()
    }

    // -------------------------------------------------------------------------
    // Writes (funnel only)
    // -------------------------------------------------------------------------

    pub(crate) fn set_selected_component(&self, id: Option<String>) {
        self.selected_component.set(id);
    }

    pub(crate) fn set_hovered_component(&self, id: Option<String>) {
        self.hovered_component.set(id);
    }

    pub(crate) fn set_layout(&self, layout: Option<String>) {
        self.layout.set(layout);
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Destroy every live instance in this partition, children before
    /// parents, then any stragglers with no descriptor.
    pub(crate) fn teardown_instances(&mut self) {
        for root in &self.components {
            for id in tree::subtree_ids(root) {
                self.instances.destroy(&id);
            }
        }
        self.instances.teardown_all();
    }

    /// Full teardown: instances destroyed, tree cleared, interaction
    /// state reset. Used when the owning page is deleted.
    pub(crate) fn teardown(&mut self) {
        self.teardown_instances();
        self.components.clear();
        self.selected_component.set(None);
        self.hovered_component.set(None);
        self.layout.set(None);
    }
}

impl Default for PagePartition {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The serializable slice of a partition, as exchanged with the
/// persistence collaborator. Live instances never serialize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionSnapshot {
    #[serde(default)]
    pub components: Vec<Descriptor>,
    #[serde(default)]
    pub layout: Option<String>,
}
