//! State Module - partitioned and global interaction state
//!
//! This module contains the state bundles the store composes:
//!
//! - **Partition** - the isolated per-page bundle (component tree,
//!   instance registry, component selection, layout)
//! - **Selection** - root-scoped selection signals (page, layout,
//!   block, widget)
//! - **Menu** - context/slot menu overlay state with partial-patch
//!   merging

mod menu;
mod partition;
mod selection;

pub use menu::*;
pub use partition::*;
pub use selection::*;
