//! Global selection state.
//!
//! Root-scoped selection slots: the selected page, and the
//! layout/block/widget picked in the catalog panels. Component
//! selection is page-scoped and lives in the partition instead.
//!
//! The slots are independent signals; the one cross-cutting rule
//! (selecting a block or widget clears the component selection) is
//! enforced by the action layer, not here.

use spark_signals::{Signal, signal};

/// Root-scoped selection signals.
///
/// Each field stores an id/name, never a copy of the referenced value;
/// getters on the store resolve them against the current state.
pub struct SelectionState {
    selected_page: Signal<Option<String>>,
    selected_layout: Signal<Option<String>>,
    selected_block: Signal<Option<String>>,
    selected_widget: Signal<Option<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_page: signal(None),
            selected_layout: signal(None),
            selected_block: signal(None),
            selected_widget: signal(None),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn selected_page(&self) -> Option<String> {
        self.selected_page.get()
    }

    pub fn selected_layout(&self) -> Option<String> {
        self.selected_layout.get()
    }

    pub fn selected_block(&self) -> Option<String> {
        self.selected_block.get()
    }

    pub fn selected_widget(&self) -> Option<String> {
        self.selected_widget.get()
    }

    // -------------------------------------------------------------------------
    // Signals (for collaborator effects)
    // -------------------------------------------------------------------------

    pub fn selected_page_signal(&self) -> Signal<Option<String>> {
        self.selected_page.clone()
    }

    pub fn selected_layout_signal(&self) -> Signal<Option<String>> {
        self.selected_layout.clone()
    }

    pub fn selected_block_signal(&self) -> Signal<Option<String>> {
        self.selected_block.clone()
    }

    pub fn selected_widget_signal(&self) -> Signal<Option<String>> {
        self.selected_widget.clone()
    }

    // -------------------------------------------------------------------------
    // Writes (funnel only)
    // -------------------------------------------------------------------------

    pub(crate) fn set_selected_page(&self, id: Option<String>) {
        self.selected_page.set(id);
    }

    pub(crate) fn set_selected_layout(&self, name: Option<String>) {
        self.selected_layout.set(name);
    }

    pub(crate) fn set_selected_block(&self, name: Option<String>) {
        self.selected_block.set(name);
    }

    pub(crate) fn set_selected_widget(&self, name: Option<String>) {
        self.selected_widget.set(name);
    }

    /// Clear every slot. Used when the project is reset.
    pub(crate) fn clear(&self) {
        self.selected_page.set(None);
        self.selected_layout.set(None);
        self.selected_block.set(None);
        self.selected_widget.set(None);
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
