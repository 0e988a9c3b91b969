//! The mutation funnel.
//!
//! Every state change in the store passes through exactly one of the
//! methods in this file. Each mutation is named, atomic, and
//! single-purpose: it touches one piece of state and never calls
//! outward. Composite behavior (sequencing, instance synchronization)
//! belongs to the actions layer.
//!
//! Mutations are crate-private; external callers cannot bypass the
//! action surface.

use std::collections::HashSet;

use tracing::trace;

use crate::engine::Instance;
use crate::error::{Error, Result};
use crate::state::{ContextMenuPatch, PagePartition, SlotMenuPatch};
use crate::tree;
use crate::types::{Descriptor, Page, PropMap, Project};

use super::Store;

/// Reject an insertion that would duplicate an id, either inside the
/// incoming subtree itself or against the ids already in the tree.
fn ensure_unique_ids(existing: &[Descriptor], incoming: &Descriptor) -> Result<()> {
    let mut seen = HashSet::new();
    for id in tree::subtree_ids(incoming) {
        if !seen.insert(id.clone()) || tree::find(existing, |c| c.id == id).is_some() {
            return Err(Error::DuplicateComponent(id));
        }
    }
    Ok(())
}

impl Store {
    // -------------------------------------------------------------------------
    // Project / pages
    // -------------------------------------------------------------------------

    pub(crate) fn set_project(&mut self, project: Project) {
        trace!(name = project.name.as_str(), "mutation: set project");
        self.project = project;
    }

    pub(crate) fn push_page(&mut self, page: Page) {
        trace!(id = page.id.as_str(), "mutation: push page");
        self.pages.push(page);
    }

    /// Splice a page out of the page list. No-op when absent.
    pub(crate) fn remove_page_entry(&mut self, id: &str) {
        trace!(id, "mutation: remove page entry");
        self.pages.retain(|p| p.id != id);
    }

    pub(crate) fn set_pages(&mut self, pages: Vec<Page>) {
        trace!(count = pages.len(), "mutation: set pages");
        self.pages = pages;
    }

    // -------------------------------------------------------------------------
    // Partitions
    // -------------------------------------------------------------------------

    pub(crate) fn insert_partition(&mut self, id: impl Into<String>, partition: PagePartition) {
        let id = id.into();
        trace!(id = id.as_str(), "mutation: insert partition");
        self.partitions.insert(id, partition);
    }

    /// Remove and hand back a partition; the caller owns its teardown.
    /// No-op (`None`) when absent.
    pub(crate) fn take_partition(&mut self, id: &str) -> Option<PagePartition> {
        trace!(id, "mutation: take partition");
        self.partitions.remove(id)
    }

    // -------------------------------------------------------------------------
    // Component tree (selected page)
    // -------------------------------------------------------------------------

    pub(crate) fn set_components(&mut self, components: Vec<Descriptor>) -> Result<()> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        trace!(count = components.len(), "mutation: set components");
        part.components = components;
        Ok(())
    }

    /// Append a top-level component to the selected page's tree.
    pub(crate) fn push_component(&mut self, component: Descriptor) -> Result<()> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        ensure_unique_ids(&part.components, &component)?;
        trace!(id = component.id.as_str(), "mutation: push component");
        part.components.push(component);
        Ok(())
    }

    /// Splice the first component matching `id` out of the selected
    /// page's tree, returning it with its whole subtree. `Ok(None)`
    /// when the id is not in the tree.
    pub(crate) fn take_component_tree(&mut self, id: &str) -> Result<Option<Descriptor>> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        trace!(id, "mutation: take component tree");
        Ok(tree::remove_first(&mut part.components, |c| c.id == id))
    }

    /// Merge a prop patch into the matching descriptor. `Ok(false)`
    /// when the id is not in the tree.
    pub(crate) fn merge_component_props(&mut self, id: &str, patch: &PropMap) -> Result<bool> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        match tree::find_mut(&mut part.components, |c| c.id == id) {
            Some(component) => {
                trace!(id, "mutation: merge component props");
                component.props.merge(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Append `slot` to the slots of the component matching `id`.
    /// `Ok(false)` when the id is not in the tree.
    pub(crate) fn push_component_slot(&mut self, id: &str, slot: Descriptor) -> Result<bool> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        ensure_unique_ids(&part.components, &slot)?;
        match tree::find_mut(&mut part.components, |c| c.id == id) {
            Some(parent) => {
                trace!(id, slot_id = slot.id.as_str(), "mutation: push component slot");
                parent.props.slots.push(slot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // -------------------------------------------------------------------------
    // Instances
    // -------------------------------------------------------------------------

    pub(crate) fn register_instance_entry(
        &mut self,
        page_id: &str,
        id: &str,
        instance: Box<dyn Instance>,
    ) -> Result<()> {
        let part = self
            .partitions
            .get_mut(page_id)
            .ok_or_else(|| Error::PageNotFound(page_id.to_string()))?;
        trace!(page_id, id, "mutation: register instance");
        part.instances.register(id, instance);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub(crate) fn set_selected_page_id(&mut self, id: Option<String>) {
        trace!(id = id.as_deref(), "mutation: set selected page");
        self.selection.set_selected_page(id);
    }

    pub(crate) fn set_selected_component_id(&mut self, id: Option<String>) -> Result<()> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        trace!(id = id.as_deref(), "mutation: set selected component");
        part.set_selected_component(id);
        Ok(())
    }

    pub(crate) fn set_hovered_component_id(&mut self, id: Option<String>) -> Result<()> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        trace!(id = id.as_deref(), "mutation: set hovered component");
        part.set_hovered_component(id);
        Ok(())
    }

    pub(crate) fn set_selected_layout_name(&mut self, name: Option<String>) {
        trace!(name = name.as_deref(), "mutation: set selected layout");
        self.selection.set_selected_layout(name);
    }

    pub(crate) fn set_selected_block_name(&mut self, name: Option<String>) {
        trace!(name = name.as_deref(), "mutation: set selected block");
        self.selection.set_selected_block(name);
    }

    pub(crate) fn set_selected_widget_name(&mut self, name: Option<String>) {
        trace!(name = name.as_deref(), "mutation: set selected widget");
        self.selection.set_selected_widget(name);
    }

    /// Assign a layout to the selected page.
    pub(crate) fn set_layout_name(&mut self, name: Option<String>) -> Result<()> {
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        trace!(name = name.as_deref(), "mutation: set layout");
        part.set_layout(name);
        Ok(())
    }

    pub(crate) fn clear_selection(&mut self) {
        trace!("mutation: clear selection");
        self.selection.clear();
    }

    // -------------------------------------------------------------------------
    // Menus
    // -------------------------------------------------------------------------

    pub(crate) fn merge_context_menu(&mut self, patch: &ContextMenuPatch) {
        trace!("mutation: merge context menu");
        self.menus.merge_context_menu(patch);
    }

    pub(crate) fn merge_slot_menu(&mut self, patch: &SlotMenuPatch) {
        trace!("mutation: merge slot menu");
        self.menus.merge_slot_menu(patch);
    }
}
