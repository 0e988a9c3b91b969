//! Overlay menu state.
//!
//! The context menu and the slot menu are pure UI-position state: a
//! visibility flag, a position, and (for the slot menu) the slot names
//! offered. The core stores and merges them; it attaches no meaning.
//!
//! Updates arrive as partial patches - only the supplied fields change,
//! everything else keeps its value.

use spark_signals::{Signal, signal};

// =============================================================================
// Menu Values
// =============================================================================

/// Right-click context menu state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContextMenu {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl ContextMenu {
    /// Merge a partial patch into this value.
    pub fn apply(&mut self, patch: &ContextMenuPatch) {
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
    }
}

/// Slot-picker menu state: where to place a component inside a target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotMenu {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    /// Names of the slots offered by the component under the menu.
    pub slots: Vec<String>,
}

impl SlotMenu {
    /// Merge a partial patch into this value.
    pub fn apply(&mut self, patch: &SlotMenuPatch) {
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(slots) = &patch.slots {
            self.slots = slots.clone();
        }
    }
}

// =============================================================================
// Patches
// =============================================================================

/// Partial update for [`ContextMenu`]. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ContextMenuPatch {
    pub visible: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ContextMenuPatch {
    /// Patch that opens the menu at a position.
    pub fn open_at(x: f64, y: f64) -> Self {
        Self {
            visible: Some(true),
            x: Some(x),
            y: Some(y),
        }
    }

    /// Patch that hides the menu, leaving its position alone.
    pub fn hide() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }
}

/// Partial update for [`SlotMenu`]. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct SlotMenuPatch {
    pub visible: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub slots: Option<Vec<String>>,
}

// =============================================================================
// Menu State
// =============================================================================

/// Both overlay menus, held as signals so overlay effects re-render on
/// change.
pub struct MenuState {
    context: Signal<ContextMenu>,
    slot: Signal<SlotMenu>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            context: signal(ContextMenu::default()),
            slot: signal(SlotMenu::default()),
        }
    }

    pub fn context_menu(&self) -> ContextMenu {
        self.context.get()
    }

    pub fn slot_menu(&self) -> SlotMenu {
        self.slot.get()
    }

    pub fn context_menu_signal(&self) -> Signal<ContextMenu> {
        self.context.clone()
    }

    pub fn slot_menu_signal(&self) -> Signal<SlotMenu> {
        self.slot.clone()
    }

    pub(crate) fn merge_context_menu(&self, patch: &ContextMenuPatch) {
        let mut menu = self.context.get();
        menu.apply(patch);
        self.context.set(menu);
    }

    pub(crate) fn merge_slot_menu(&self, patch: &SlotMenuPatch) {
        let mut menu = self.slot.get();
        menu.apply(patch);
        self.slot.set(menu);
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
