//! Core types for pageforge.
//!
//! These types define the data model everything builds on: the project
//! header, the page forest, the descriptor tree that describes placed
//! components, and the static catalogs the builder chooses from.
//!
//! Descriptors are declarative and serializable; the live objects they
//! produce are not (see [`crate::engine::Instance`]).

use serde::{Deserialize, Serialize};

/// Free-form property bag carried by every descriptor.
///
/// Props have no schema; the builder UI and the rendering collaborator
/// agree on keys out of band.
pub type PropMap = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Project
// =============================================================================

/// Project header. Replaced wholesale on load/reset, never built
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: String,
    /// Numeric id of the active entry in
    /// [`Catalogs::component_libraries`].
    #[serde(default)]
    pub component_library: u32,
}

impl Project {
    /// Create a project header with the default component library.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            component_library: 0,
        }
    }
}

// =============================================================================
// Page
// =============================================================================

/// A page in the project's page forest.
///
/// The page list itself is flat; nesting is expressed through `children`
/// holding the ids of child pages. Every page owns a
/// [`crate::state::PagePartition`] keyed by the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique, stable id. Also the partition key.
    pub id: String,
    pub label: String,
    /// Ordered child-page ids.
    #[serde(default)]
    pub children: Vec<String>,
}

impl Page {
    /// Create a page whose label defaults to its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            children: Vec::new(),
        }
    }
}

// =============================================================================
// Component Descriptor
// =============================================================================

/// Display metadata attached to a descriptor (palette label, icon).
///
/// The `"style"` label is special-cased by the page-CSS getter on the
/// store; everything else is opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Setting {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Setting {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }
}

/// Descriptor props: a free-form field bag plus the ordered child
/// descriptors placed into this component's slots.
///
/// Slots are the only nesting path in the tree. The `"slots"` key is
/// structural and never travels through the field bag — [`Props::merge`]
/// drops it, and slot edits go through the dedicated slot operations on
/// the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Descriptor>,
    #[serde(flatten)]
    pub fields: PropMap,
}

impl Props {
    /// Read a single prop field.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// Merge a patch into the field bag, key by key. Existing keys are
    /// overwritten, unmentioned keys are left alone. The structural
    /// `"slots"` key is ignored.
    pub fn merge(&mut self, patch: &PropMap) {
        for (key, value) in patch {
            if key == "slots" {
                continue;
            }
            self.fields.insert(key.clone(), value.clone());
        }
    }
}

/// Declarative, serializable description of a placed component.
///
/// Invariant: within one page's tree, no id appears twice. The store
/// rejects insertions that would break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Unique within the owning page's tree. Also the key of the live
    /// instance the rendering collaborator registers for it.
    pub id: String,
    #[serde(default)]
    pub setting: Setting,
    #[serde(default)]
    pub props: Props,
}

impl Descriptor {
    /// Create a bare descriptor with empty setting and props.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            setting: Setting::default(),
            props: Props::default(),
        }
    }
}

// =============================================================================
// Static Catalogs
// =============================================================================

/// A page layout preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub label: String,
}

/// A block preset: a prebuilt group of components dropped in as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub label: String,
    pub template: Descriptor,
}

/// A widget preset: a single prebuilt component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub name: String,
    pub label: String,
    pub template: Descriptor,
}

/// A selectable component library (e.g. a UI kit), looked up by the
/// numeric id stored in [`Project::component_library`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentLibrary {
    pub value: u32,
    pub label: String,
}

/// Read-only reference data injected at store construction.
///
/// The core never mutates catalogs; it only looks entries up.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default)]
    pub layouts: Vec<Layout>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub component_libraries: Vec<ComponentLibrary>,
}
