//! Composite actions.
//!
//! One action = one logical user operation, implemented as a sequence
//! of funnel mutations plus instance synchronization where descriptors
//! and live objects must stay consistent.
//!
//! Actions are NOT atomic across their steps: the first fatal condition
//! is returned immediately and earlier mutations stay committed. Ids
//! that no longer exist are tolerated (logged no-op); a descriptor
//! whose instance was never registered is a caller-contract violation
//! and comes back as [`Error::InstanceNotFound`].

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::engine::Instance;
use crate::error::{Error, Result};
use crate::state::{ContextMenuPatch, PagePartition, PartitionSnapshot, SlotMenuPatch};
use crate::tree;
use crate::types::{Descriptor, Page, PropMap, Project};

use super::Store;

impl Store {
    // -------------------------------------------------------------------------
    // Project lifecycle
    // -------------------------------------------------------------------------

    /// Tear down every partition, clear the page list and all global
    /// selection, and reset the project header to its defaults.
    pub fn reset_project(&mut self) {
        debug!("action: reset project");
        let ids: Vec<String> = self.partitions.keys().cloned().collect();
        for id in ids {
            if let Some(mut part) = self.take_partition(&id) {
                part.teardown();
            }
        }
        self.set_pages(Vec::new());
        self.set_project(Project::default());
        self.clear_selection();
        self.page_counter = 0;
    }

    /// Replace the project wholesale from persisted data.
    ///
    /// Partitions are (re)allocated from the supplied snapshots,
    /// bypassing page-id generation; anything left from the previous
    /// project is torn down first. The component library resets to the
    /// default, and no page is selected afterwards.
    pub fn load_project(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        pages: Vec<Page>,
        partitions: HashMap<String, PartitionSnapshot>,
    ) {
        let name = name.into();
        let path = path.into();
        debug!(name = name.as_str(), path = path.as_str(), "action: load project");

        let stale: Vec<String> = self.partitions.keys().cloned().collect();
        for id in stale {
            if let Some(mut part) = self.take_partition(&id) {
                part.teardown();
            }
        }

        self.set_project(Project::new(name, path));
        self.set_pages(pages);
        for (id, snap) in partitions {
            self.insert_partition(id, PagePartition::from_snapshot(snap));
        }
    }

    // -------------------------------------------------------------------------
    // Page lifecycle
    // -------------------------------------------------------------------------

    /// Create a page, allocate its partition, and select it.
    ///
    /// With no `id`, a fresh one is generated (counter-based, skipping
    /// ids already in use). The label defaults to the id. A supplied id
    /// that is already taken is rejected.
    pub fn create_page(
        &mut self,
        id: Option<&str>,
        label: Option<&str>,
        children: Vec<String>,
    ) -> Result<Page> {
        let id = match id {
            Some(id) => {
                if self.pages.iter().any(|p| p.id == id) || self.partitions.contains_key(id) {
                    return Err(Error::DuplicatePage(id.to_string()));
                }
                id.to_string()
            }
            None => self.next_page_id(),
        };
        debug!(id = id.as_str(), "action: create page");

        self.insert_partition(id.clone(), PagePartition::new());
        let page = Page {
            id: id.clone(),
            label: label.map_or_else(|| id.clone(), str::to_string),
            children,
        };
        self.push_page(page.clone());
        self.set_selected_page_id(Some(id));
        Ok(page)
    }

    /// Remove a page and tear down its partition (every live instance
    /// destroyed, children before parents). If the page was selected,
    /// the selection is cleared - never silently moved to another page.
    /// Unknown ids are a no-op.
    pub fn delete_page(&mut self, id: &str) {
        debug!(id, "action: delete page");
        self.remove_page_entry(id);
        if let Some(mut part) = self.take_partition(id) {
            part.teardown();
        }
        if self.selection.selected_page().as_deref() == Some(id) {
            self.set_selected_page_id(None);
        }
    }

    /// Clear the selected page's component tree, destroying all of its
    /// live instances, and drop its component selection.
    pub fn reset_page(&mut self) -> Result<()> {
        debug!("action: reset page");
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        part.teardown_instances();
        self.set_components(Vec::new())?;
        self.set_selected_component_id(None)?;
        self.set_hovered_component_id(None)?;
        Ok(())
    }

    /// Make `id` the page context every page-scoped operation works
    /// against.
    pub fn select_page(&mut self, id: &str) -> Result<()> {
        if !self.pages.iter().any(|p| p.id == id) {
            return Err(Error::PageNotFound(id.to_string()));
        }
        debug!(id, "action: select page");
        self.set_selected_page_id(Some(id.to_string()));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Catalog selection
    // -------------------------------------------------------------------------

    /// Highlight a layout in the catalog panel.
    pub fn select_layout(&mut self, name: &str) {
        debug!(name, "action: select layout");
        self.set_selected_layout_name(Some(name.to_string()));
    }

    /// Select a block, clearing any component selection first - a
    /// block and a component are never selected at the same time.
    pub fn select_block(&mut self, name: &str) {
        debug!(name, "action: select block");
        self.drop_component_selection();
        self.set_selected_block_name(Some(name.to_string()));
    }

    /// Select a widget, clearing any component selection first.
    pub fn select_widget(&mut self, name: &str) {
        debug!(name, "action: select widget");
        self.drop_component_selection();
        self.set_selected_widget_name(Some(name.to_string()));
    }

    /// Assign a layout to the selected page.
    pub fn set_layout(&mut self, name: &str) -> Result<()> {
        debug!(name, "action: set layout");
        self.set_layout_name(Some(name.to_string()))
    }

    // -------------------------------------------------------------------------
    // Component selection / hover
    // -------------------------------------------------------------------------

    /// Select a component on the current page. Ids that are not in the
    /// tree are tolerated (the click may have raced a deletion).
    pub fn select_component(&mut self, id: &str) -> Result<()> {
        let part = self.selected_partition().ok_or(Error::NoSelectedPage)?;
        if tree::find(part.components(), |c| c.id == id).is_none() {
            warn!(id, "select targeted a component that is not in the tree");
            return Ok(());
        }
        debug!(id, "action: select component");
        self.set_selected_component_id(Some(id.to_string()))
    }

    /// Drop the component selection on the current page.
    pub fn clear_component_selection(&mut self) -> Result<()> {
        self.set_selected_component_id(None)
    }

    /// Track the hovered component. `None` clears. Not validated
    /// against the tree - hover trails deletions constantly, and stale
    /// ids resolve to nothing in the getters.
    pub fn hover_component(&mut self, id: Option<&str>) -> Result<()> {
        self.set_hovered_component_id(id.map(str::to_string))
    }

    // -------------------------------------------------------------------------
    // Components & instances
    // -------------------------------------------------------------------------

    /// Append a component to the selected page's tree and select it.
    pub fn add_component(&mut self, component: Descriptor) -> Result<()> {
        debug!(id = component.id.as_str(), "action: add component");
        let id = component.id.clone();
        self.push_component(component)?;
        self.set_selected_component_id(Some(id))
    }

    /// Place `slot` into the slots of the component matching `id`.
    /// A parent id that is not in the tree is tolerated (logged no-op).
    pub fn add_component_slot(&mut self, id: &str, slot: Descriptor) -> Result<()> {
        debug!(id, slot_id = slot.id.as_str(), "action: add component slot");
        if !self.push_component_slot(id, slot)? {
            warn!(id, "slot target is not in the tree");
        }
        Ok(())
    }

    /// Hand over a freshly rendered live instance for the descriptor
    /// `id` on page `page_id`. The rendering collaborator must call
    /// this before any update or delete targets the id.
    pub fn register_instance(
        &mut self,
        page_id: &str,
        id: &str,
        instance: Box<dyn Instance>,
    ) -> Result<()> {
        debug!(page_id, id, "action: register instance");
        self.register_instance_entry(page_id, id, instance)
    }

    /// Merge a prop patch into a descriptor and mirror it onto the
    /// descriptor's live instance, keeping the two consistent.
    ///
    /// An id that is not in the tree is tolerated. A descriptor without
    /// a registered instance is not: the patch is already committed to
    /// the descriptor when [`Error::InstanceNotFound`] comes back (no
    /// rollback).
    pub fn update_component(&mut self, id: &str, patch: &PropMap) -> Result<()> {
        debug!(id, "action: update component");
        if !self.merge_component_props(id, patch)? {
            warn!(id, "update targeted a component that is not in the tree");
            return Ok(());
        }
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        if !part.instances.apply(id, patch) {
            return Err(Error::InstanceNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Remove a component (and its whole slot subtree) from the tree,
    /// destroy the live instances behind it children-before-parent, and
    /// clear selection/hover if they pointed into the removed subtree.
    ///
    /// Descendants that never had an instance registered are skipped;
    /// the target id itself must have one, or the action aborts with
    /// [`Error::InstanceNotFound`] after the tree removal (no rollback).
    /// An id that is not in the tree is a no-op that leaves selection
    /// alone.
    pub fn delete_component(&mut self, id: &str) -> Result<()> {
        debug!(id, "action: delete component");
        let Some(removed) = self.take_component_tree(id)? else {
            warn!(id, "delete targeted a component that is not in the tree");
            return Ok(());
        };

        let ids = tree::subtree_ids(&removed);
        let part = self.selected_partition_mut().ok_or(Error::NoSelectedPage)?;
        for cid in &ids {
            if !part.instances.destroy(cid) && cid.as_str() == id {
                return Err(Error::InstanceNotFound(id.to_string()));
            }
        }

        if part
            .selected_component_id()
            .is_some_and(|sel| ids.contains(&sel))
        {
            part.set_selected_component(None);
        }
        if part
            .hovered_component_id()
            .is_some_and(|hov| ids.contains(&hov))
        {
            part.set_hovered_component(None);
        }
        Ok(())
    }

    /// Delete whichever component is currently selected; no-op when
    /// nothing is.
    pub fn delete_selected_component(&mut self) -> Result<()> {
        match self
            .selected_partition()
            .and_then(|part| part.selected_component_id())
        {
            Some(id) => self.delete_component(&id),
            None => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Menus
    // -------------------------------------------------------------------------

    /// Merge a partial patch into the context menu state.
    pub fn set_context_menu(&mut self, patch: &ContextMenuPatch) {
        self.merge_context_menu(patch);
    }

    /// Merge a partial patch into the slot menu state.
    pub fn set_slot_menu(&mut self, patch: &SlotMenuPatch) {
        self.merge_slot_menu(patch);
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Clear the component selection if one exists. A selection implies
    /// a selected page, so the funnel call cannot fail here.
    fn drop_component_selection(&mut self) {
        let selected = self
            .selected_partition()
            .is_some_and(|part| part.selected_component_id().is_some());
        if selected {
            let _ = self.set_selected_component_id(None);
        }
    }

    fn next_page_id(&mut self) -> String {
        loop {
            let id = format!("page{}", self.page_counter);
            self.page_counter += 1;
            if !self.pages.iter().any(|p| p.id == id) && !self.partitions.contains_key(&id) {
                return id;
            }
        }
    }
}
