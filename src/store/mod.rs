//! Central State Container.
//!
//! `Store` is the root aggregate: the project header, the page list,
//! one partition per page, the injected catalogs, and the global
//! selection and menu state. It is a plain value - no ambient global,
//! no registration magic. Whoever drives the UI loop owns it and passes
//! it by reference.
//!
//! All writes go through the mutation funnel (`mutations`, crate
//! private) or the composite actions built on top of it (`actions`,
//! public). Reads go through the getters here, which are defensive:
//! page-scoped getters return empty defaults when no page is selected.
//!
//! # Example
//!
//! ```ignore
//! use pageforge::{Catalogs, Descriptor, Store};
//!
//! let mut store = Store::new(Catalogs::default());
//! store.create_page(None, Some("Home"), vec![])?;
//! store.add_component(Descriptor::new("hero"))?;
//! assert_eq!(store.selected_component().unwrap().id, "hero");
//! ```

mod actions;
mod mutations;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::{ContextMenu, MenuState, PagePartition, PartitionSnapshot, SelectionState, SlotMenu};
use crate::tree;
use crate::types::{Catalogs, ComponentLibrary, Descriptor, Page, Project};

// =============================================================================
// Store
// =============================================================================

/// The root state container of the page builder.
pub struct Store {
    project: Project,
    pages: Vec<Page>,
    /// Explicit ownership: page id → partition, inserted on page
    /// creation, removed (and torn down) on page deletion.
    partitions: HashMap<String, PagePartition>,
    catalogs: Catalogs,
    selection: SelectionState,
    menus: MenuState,
    /// Counter behind generated page ids.
    page_counter: usize,
}

impl Store {
    /// Create an empty store around the injected catalogs.
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            project: Project::default(),
            pages: Vec::new(),
            partitions: HashMap::new(),
            catalogs,
            selection: SelectionState::new(),
            menus: MenuState::new(),
            page_counter: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Root getters
    // -------------------------------------------------------------------------

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// The catalog entry behind `project.component_library`, if the
    /// catalogs carry one.
    pub fn component_library(&self) -> Option<&ComponentLibrary> {
        self.catalogs
            .component_libraries
            .iter()
            .find(|lib| lib.value == self.project.component_library)
    }

    /// Global selection state (page/layout/block/widget).
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Overlay menu state.
    pub fn menus(&self) -> &MenuState {
        &self.menus
    }

    /// Convenience: current context menu value.
    pub fn context_menu(&self) -> ContextMenu {
        self.menus.context_menu()
    }

    /// Convenience: current slot menu value.
    pub fn slot_menu(&self) -> SlotMenu {
        self.menus.slot_menu()
    }

    /// The partition owned by `id`, if that page exists.
    pub fn partition(&self, id: &str) -> Option<&PagePartition> {
        self.partitions.get(id)
    }

    // -------------------------------------------------------------------------
    // Page-scoped getters
    //
    // All of these key off the selected page and fall back to an empty
    // default when none is selected - UI reads must never fail just
    // because nothing is open.
    // -------------------------------------------------------------------------

    /// Id of the selected page, if any.
    pub fn page_id(&self) -> Option<String> {
        self.selection.selected_page()
    }

    /// The selected page itself.
    pub fn selected_page(&self) -> Option<&Page> {
        let id = self.selection.selected_page()?;
        self.pages.iter().find(move |p| p.id == id)
    }

    /// The selected page's component tree; empty when no page is
    /// selected.
    pub fn components(&self) -> &[Descriptor] {
        self.selected_partition()
            .map(PagePartition::components)
            .unwrap_or(&[])
    }

    /// Ids of the live instances registered on the selected page;
    /// empty when no page is selected.
    pub fn instance_ids(&self) -> Vec<String> {
        self.selected_partition()
            .map(|part| part.instances().ids())
            .unwrap_or_default()
    }

    /// The selected component's descriptor. A stale selection (id no
    /// longer in the tree) resolves to `None`.
    pub fn selected_component(&self) -> Option<&Descriptor> {
        let part = self.selected_partition()?;
        let id = part.selected_component_id()?;
        tree::find(part.components(), move |c| c.id == id)
    }

    /// The hovered component's descriptor, with the same stale-id
    /// tolerance as [`Store::selected_component`].
    pub fn hovered_component(&self) -> Option<&Descriptor> {
        let part = self.selected_partition()?;
        let id = part.hovered_component_id()?;
        tree::find(part.components(), move |c| c.id == id)
    }

    /// Layout assigned to the selected page.
    pub fn layout(&self) -> Option<String> {
        self.selected_partition()?.layout()
    }

    /// The page's CSS carrier: the first top-level component whose
    /// setting label is `"style"`. Nested components do not qualify.
    pub fn page_css(&self) -> Option<&Descriptor> {
        self.components()
            .iter()
            .find(|c| c.setting.label == "style")
    }

    /// Serializable view of the whole store for the persistence
    /// collaborator. Instances are excluded by construction.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            name: self.project.name.clone(),
            path: self.project.path.clone(),
            pages: self.pages.clone(),
            partitions: self
                .pages
                .iter()
                .filter_map(|page| {
                    self.partitions
                        .get(&page.id)
                        .map(|part| (page.id.clone(), part.snapshot()))
                })
                .collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Internal access
    // -------------------------------------------------------------------------

    pub(crate) fn selected_partition(&self) -> Option<&PagePartition> {
        let id = self.selection.selected_page()?;
        self.partitions.get(&id)
    }

    pub(crate) fn selected_partition_mut(&mut self) -> Option<&mut PagePartition> {
        let id = self.selection.selected_page()?;
        self.partitions.get_mut(&id)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Catalogs::default())
    }
}

// =============================================================================
// Project Snapshot
// =============================================================================

/// Everything the persistence collaborator reads and writes: project
/// header, page forest, and the serializable slice of every partition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub partitions: HashMap<String, PartitionSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Setting;

    #[test]
    fn test_page_scoped_getters_default_when_no_page() {
        let store = Store::default();
        assert!(store.components().is_empty());
        assert!(store.instance_ids().is_empty());
        assert!(store.selected_component().is_none());
        assert!(store.hovered_component().is_none());
        assert!(store.layout().is_none());
        assert!(store.page_css().is_none());
        assert!(store.page_id().is_none());
        assert!(store.selected_page().is_none());
    }

    #[test]
    fn test_component_library_lookup_by_value() {
        let catalogs = Catalogs {
            component_libraries: vec![
                ComponentLibrary {
                    value: 0,
                    label: "element".into(),
                },
                ComponentLibrary {
                    value: 1,
                    label: "iview".into(),
                },
            ],
            ..Catalogs::default()
        };
        let store = Store::new(catalogs);
        assert_eq!(store.component_library().unwrap().label, "element");
    }

    #[test]
    fn test_component_library_missing_entry_is_none() {
        let store = Store::default();
        assert!(store.component_library().is_none());
    }

    #[test]
    fn test_page_css_matches_top_level_only() {
        let mut store = Store::default();
        store.create_page(Some("home"), None, vec![]).unwrap();

        // Nested "style" component must not count
        let mut wrapper = Descriptor::new("wrapper");
        let mut nested = Descriptor::new("nested-style");
        nested.setting = Setting::new("style");
        wrapper.props.slots.push(nested);
        store.add_component(wrapper).unwrap();
        assert!(store.page_css().is_none());

        let mut css = Descriptor::new("css");
        css.setting = Setting::new("style");
        store.add_component(css).unwrap();
        assert_eq!(store.page_css().unwrap().id, "css");
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let mut store = Store::default();
        store.create_page(Some("home"), None, vec![]).unwrap();
        store.hover_component(Some("ghost")).unwrap();
        assert!(store.hovered_component().is_none());
    }
}
